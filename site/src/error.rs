use std::sync::Arc;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no rewrite matches {0}")]
    NoRewrite(String),
    #[error("image url is not on the allow-list: {0}")]
    ImageNotAllowed(String),
    #[error("width {0} is not an allowed image size")]
    InvalidWidth(u32),
    #[error("upstream is not an image (content-type {0:?})")]
    NotAnImage(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("projects are unavailable: {0}")]
    ProjectsUnavailable(&'static str),
    #[error("github query failed: {0}")]
    GitHub(#[from] octocrab::Error),
    #[error("unexpected github response shape")]
    GraphQlShape,
    #[error("background task failed")]
    Blocking,
    /// Error from a load shared by several waiting requests.
    #[error(transparent)]
    Shared(Arc<SiteError>),
}

impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NoRewrite(_) => StatusCode::NOT_FOUND,
            SiteError::ImageNotAllowed(_)
            | SiteError::InvalidWidth(_)
            | SiteError::NotAnImage(_) => StatusCode::BAD_REQUEST,
            SiteError::Upstream(_) | SiteError::GitHub(_) | SiteError::GraphQlShape => {
                StatusCode::BAD_GATEWAY
            }
            SiteError::ProjectsUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SiteError::Image(_) | SiteError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::Shared(inner) => inner.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("{self}");
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_mistakes_map_to_4xx() {
        assert_eq!(
            SiteError::ImageNotAllowed("https://x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(SiteError::InvalidWidth(7).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            SiteError::NoRewrite("/ingestion".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn missing_token_is_service_unavailable() {
        assert_eq!(
            SiteError::ProjectsUnavailable("no token").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn shared_error_keeps_inner_status() {
        let shared = SiteError::Shared(Arc::new(SiteError::InvalidWidth(7)));
        assert_eq!(shared.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(shared.to_string(), "width 7 is not an allowed image size");
    }
}
