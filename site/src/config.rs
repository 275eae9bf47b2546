use std::{path::PathBuf, time::Duration};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the host, read from the environment.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built client bundle (`index.html` + pkg).
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub github_login: String,
    pub projects_token: Option<String>,
    pub projects_ttl: Duration,
    pub image_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            dist_dir: PathBuf::from("dist"),
            assets_dir: PathBuf::from("assets"),
            github_login: "henrikkvamme".to_owned(),
            projects_token: None,
            projects_ttl: Duration::from_secs(300),
            image_ttl: Duration::from_secs(3600),
        }
    }
}

impl SiteConfig {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        // empty strings count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("SITE_HOST") {
            cfg.host = host;
        }
        if let Some(port) = get("SITE_PORT") {
            cfg.port = parse("SITE_PORT", &port)?;
        }
        if let Some(dir) = get("SITE_DIST_DIR") {
            cfg.dist_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("SITE_ASSETS_DIR") {
            cfg.assets_dir = PathBuf::from(dir);
        }
        if let Some(login) = get("GITHUB_LOGIN") {
            cfg.github_login = login;
        }
        cfg.projects_token = get("PROJECTS_PAT");
        if let Some(secs) = get("PROJECTS_CACHE_TTL_SECS") {
            cfg.projects_ttl = Duration::from_secs(parse("PROJECTS_CACHE_TTL_SECS", &secs)?);
        }
        if let Some(secs) = get("IMAGE_CACHE_TTL_SECS") {
            cfg.image_ttl = Duration::from_secs(parse("IMAGE_CACHE_TTL_SECS", &secs)?);
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.github_login, "henrikkvamme");
        assert!(cfg.projects_token.is_none());
        assert_eq!(cfg.projects_ttl, Duration::from_secs(300));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_PORT", "8080"),
            ("SITE_DIST_DIR", "/srv/dist"),
            ("PROJECTS_PAT", "ghp_x"),
            ("IMAGE_CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/dist"));
        assert_eq!(cfg.projects_token.as_deref(), Some("ghp_x"));
        assert_eq!(cfg.image_ttl, Duration::from_secs(60));
    }

    #[test]
    fn blank_token_is_unset() {
        let cfg = SiteConfig::from_lookup(lookup(&[("PROJECTS_PAT", "  ")])).unwrap();
        assert!(cfg.projects_token.is_none());
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SITE_PORT",
                value: "http".to_owned()
            }
        );
    }
}
