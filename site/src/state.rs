use std::sync::Arc;

use moka::future::Cache;
use octocrab::Octocrab;

use crate::api::image::OptimizedImage;
use crate::api::projects::ProjectDto;
use crate::config::SiteConfig;
use crate::remote_images::{AllowList, REMOTE_PATTERNS};

/// Shared across workers through `web::Data`.
pub struct AppState {
    pub config: SiteConfig,
    pub http: reqwest::Client,
    pub github: Option<Octocrab>,
    /// Remote image origins, compiled from [`REMOTE_PATTERNS`].
    pub allow_list: AllowList,
    /// Keyed by GitHub login.
    pub projects: Cache<String, Arc<Vec<ProjectDto>>>,
    /// Keyed by (source url, width).
    pub images: Cache<(String, u32), Arc<OptimizedImage>>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        let github = match &config.projects_token {
            Some(token) => Some(Octocrab::builder().personal_token(token.clone()).build()?),
            None => {
                log::warn!("PROJECTS_PAT is not set, /api/projects will be unavailable");
                None
            }
        };

        let allow_list = AllowList::new(REMOTE_PATTERNS)?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let projects = Cache::builder()
            .time_to_live(config.projects_ttl)
            .max_capacity(32) // safety cap
            .build();

        let images = Cache::builder()
            .time_to_live(config.image_ttl)
            .max_capacity(256)
            .build();

        Ok(Self {
            config,
            http,
            github,
            allow_list,
            projects,
            images,
        })
    }
}
