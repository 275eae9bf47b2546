use globset::{GlobBuilder, GlobMatcher};
use reqwest::Url;

/// Remote origin the image pipeline may fetch from.
#[derive(Debug, Clone, Copy)]
pub struct RemotePattern {
    pub protocol: &'static str,
    pub hostname: &'static str,
    /// Empty means the url must not carry an explicit port.
    pub port: &'static str,
    /// Glob: `*` stays within a segment, `**` crosses segments.
    pub pathname: &'static str,
}

pub const REMOTE_PATTERNS: &[RemotePattern] = &[RemotePattern {
    protocol: "https",
    hostname: "raw.githubusercontent.com",
    port: "",
    pathname: "/henrikkvamme/portfolio/**",
}];

/// Widths the pipeline will produce; anything else is rejected so the
/// cache cannot be filled with arbitrary sizes.
pub const ALLOWED_WIDTHS: &[u32] = &[
    16, 32, 48, 64, 96, 128, 256, 384, 640, 750, 828, 1080, 1200, 1920, 2048, 3840,
];

impl RemotePattern {
    /// Scheme, host and port only; the path is left to the compiled glob.
    fn matches_origin(&self, url: &Url) -> bool {
        let port = url.port().map(|p| p.to_string()).unwrap_or_default();

        url.scheme() == self.protocol && url.host_str() == Some(self.hostname) && port == self.port
    }
}

/// Remote patterns with their path globs compiled once at startup.
#[derive(Debug, Clone)]
pub struct AllowList {
    entries: Vec<(RemotePattern, GlobMatcher)>,
}

impl AllowList {
    pub fn new(patterns: &[RemotePattern]) -> Result<Self, globset::Error> {
        let mut entries = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            // `*` must not cross `/`, `**` may
            let glob = GlobBuilder::new(pattern.pathname)
                .literal_separator(true)
                .build()?;
            entries.push((*pattern, glob.compile_matcher()));
        }
        Ok(Self { entries })
    }

    pub fn is_allowed(&self, url: &Url) -> bool {
        self.entries
            .iter()
            .any(|(pattern, path)| pattern.matches_origin(url) && path.is_match(url.path()))
    }
}

pub fn is_allowed_width(width: u32) -> bool {
    ALLOWED_WIDTHS.contains(&width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(url: &str) -> bool {
        AllowList::new(REMOTE_PATTERNS)
            .unwrap()
            .is_allowed(&Url::parse(url).unwrap())
    }

    fn path_allowed(pathname: &'static str, path: &str) -> bool {
        let pattern = RemotePattern {
            protocol: "https",
            hostname: "img.test",
            port: "",
            pathname,
        };
        let url = Url::parse(&format!("https://img.test{path}")).unwrap();
        AllowList::new(&[pattern]).unwrap().is_allowed(&url)
    }

    #[test]
    fn logo_on_main_branch_is_allowed() {
        assert!(allowed(
            "https://raw.githubusercontent.com/henrikkvamme/portfolio/main/apps/web/public/images/logo.png"
        ));
    }

    #[test]
    fn other_repos_and_hosts_are_rejected() {
        assert!(!allowed("https://raw.githubusercontent.com/someone/else/main/x.png"));
        assert!(!allowed("https://raw.githubusercontent.com/henrikkvamme/portfolio-fork/x.png"));
        assert!(!allowed("https://example.com/henrikkvamme/portfolio/x.png"));
    }

    #[test]
    fn protocol_and_port_must_match() {
        assert!(!allowed("http://raw.githubusercontent.com/henrikkvamme/portfolio/x.png"));
        assert!(!allowed("https://raw.githubusercontent.com:8443/henrikkvamme/portfolio/x.png"));
        // default port is not an explicit port
        assert!(allowed("https://raw.githubusercontent.com:443/henrikkvamme/portfolio/x.png"));
    }

    #[test]
    fn single_star_stays_in_segment() {
        assert!(path_allowed("/img/*.png", "/img/logo.png"));
        assert!(!path_allowed("/img/*.png", "/img/sub/logo.png"));
    }

    #[test]
    fn double_star_crosses_segments() {
        assert!(path_allowed("/img/**/*.png", "/img/sub/deeper/logo.png"));
        assert!(path_allowed("/img/**/*.png", "/img/logo.png"));
        assert!(!path_allowed("/img/**/*.png", "/other/logo.png"));
    }

    #[test]
    fn malformed_glob_is_rejected_up_front() {
        let pattern = RemotePattern {
            protocol: "https",
            hostname: "img.test",
            port: "",
            pathname: "/img/[",
        };
        assert!(AllowList::new(&[pattern]).is_err());
    }

    #[test]
    fn widths() {
        assert!(is_allowed_width(64));
        assert!(is_allowed_width(3840));
        assert!(!is_allowed_width(65));
        assert!(!is_allowed_width(0));
    }
}
