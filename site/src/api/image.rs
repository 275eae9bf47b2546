use std::{future::Future, io::Cursor, sync::Arc};

use actix_web::{HttpResponse, get, http::header, web};
use image::{ImageFormat, imageops::FilterType};
use moka::future::Cache;
use reqwest::Url;
use serde::Deserialize;

use crate::error::SiteError;
use crate::remote_images::{AllowList, is_allowed_width};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    url: String,
    w: u32,
}

/// Resized image bytes ready to serve.
#[derive(Debug, Clone)]
pub struct OptimizedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Checks `url`/`width` against the allow-list before anything is fetched.
pub fn validate(allow_list: &AllowList, url: &str, width: u32) -> Result<Url, SiteError> {
    if !is_allowed_width(width) {
        return Err(SiteError::InvalidWidth(width));
    }
    let parsed = Url::parse(url).map_err(|_| SiteError::ImageNotAllowed(url.to_owned()))?;
    if !allow_list.is_allowed(&parsed) {
        return Err(SiteError::ImageNotAllowed(url.to_owned()));
    }
    Ok(parsed)
}

/// Downscales to `width` keeping the aspect ratio; never upscales.
pub fn resize(raw: &[u8], width: u32) -> Result<OptimizedImage, SiteError> {
    let format = image::guess_format(raw)?;
    let img = image::load_from_memory_with_format(raw, format)?;

    if img.width() <= width {
        return Ok(OptimizedImage {
            content_type: format.to_mime_type().to_owned(),
            bytes: raw.to_vec(),
        });
    }

    let height = (img.height() as u64 * width as u64 / img.width() as u64).max(1) as u32;
    let scaled = img.resize_exact(width, height, FilterType::Lanczos3);

    // keep the source format where we can encode it, png otherwise
    let out_format = match format {
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP => format,
        _ => ImageFormat::Png,
    };
    let mut bytes = Vec::new();
    scaled.write_to(&mut Cursor::new(&mut bytes), out_format)?;

    Ok(OptimizedImage {
        content_type: out_format.to_mime_type().to_owned(),
        bytes,
    })
}

async fn fetch(state: &AppState, url: Url, width: u32) -> Result<OptimizedImage, SiteError> {
    let resp = state.http.get(url).send().await?.error_for_status()?;

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    if !content_type.starts_with("image/") {
        return Err(SiteError::NotAnImage(content_type));
    }

    let raw = resp.bytes().await?;
    web::block(move || resize(&raw, width))
        .await
        .map_err(|_| SiteError::Blocking)?
}

/// Cached image for `key`, running `load` on a miss. Concurrent misses for
/// the same key wait on a single load.
pub async fn cached_or_load<F>(
    cache: &Cache<(String, u32), Arc<OptimizedImage>>,
    key: (String, u32),
    load: F,
) -> Result<Arc<OptimizedImage>, SiteError>
where
    F: Future<Output = Result<OptimizedImage, SiteError>>,
{
    cache
        .try_get_with(key, async move { load.await.map(Arc::new) })
        .await
        .map_err(SiteError::Shared)
}

#[get("/_image")]
async fn optimize(
    query: web::Query<ImageQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, SiteError> {
    let ImageQuery { url, w } = query.into_inner();
    let parsed = validate(&state.allow_list, &url, w)?;

    log::debug!("image {url} @ {w}");
    let img = cached_or_load(&state.images, (url, w), fetch(&state, parsed, w)).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, img.content_type.as_str()))
        .insert_header((header::CACHE_CONTROL, "public, max-age=31536000, immutable"))
        .body(img.bytes.clone()))
}
