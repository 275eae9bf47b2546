use std::net::IpAddr;

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

use crate::error::SiteError;
use crate::rewrites::{self, INGEST_REWRITES};
use crate::state::AppState;

/// Headers that describe a single hop and must not be forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
    // rebuilt from the peer address below
    "x-forwarded-for",
];

fn forwardable(name: &str) -> bool {
    !HOP_BY_HOP.contains(&name.to_ascii_lowercase().as_str())
}

/// Builds the upstream url for `path` + raw `query`.
pub fn upstream_url(path: &str, query: &str) -> Option<String> {
    let mut url = rewrites::resolve(INGEST_REWRITES, path)?;
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    Some(url)
}

/// Appends `peer` to the client's existing `x-forwarded-for` chain.
pub fn forwarded_for(existing: Option<&str>, peer: Option<IpAddr>) -> Option<String> {
    let existing = existing.map(str::trim).filter(|v| !v.is_empty());
    match (existing, peer) {
        (Some(chain), Some(ip)) => Some(format!("{chain}, {ip}")),
        (Some(chain), None) => Some(chain.to_owned()),
        (None, Some(ip)) => Some(ip.to_string()),
        (None, None) => None,
    }
}

/// Forwards `/ingest/*` to the analytics collector, any method.
pub async fn ingest(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, SiteError> {
    let url = upstream_url(req.path(), req.query_string())
        .ok_or_else(|| SiteError::NoRewrite(req.path().to_owned()))?;

    // actix and reqwest sit on different `http` versions; convert via strings
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .unwrap_or(reqwest::Method::GET);

    let mut upstream = state.http.request(method, &url).body(body.to_vec());
    for (name, value) in req.headers() {
        if forwardable(name.as_str()) {
            upstream = upstream.header(name.as_str(), value.as_bytes());
        }
    }
    let existing = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok());
    if let Some(chain) = forwarded_for(existing, req.peer_addr().map(|addr| addr.ip())) {
        upstream = upstream.header("x-forwarded-for", chain);
    }

    let resp = upstream.send().await?;
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    log::debug!("ingest {} -> {} ({})", req.path(), url, status);

    let mut out = HttpResponse::build(status);
    for (name, value) in resp.headers() {
        if forwardable(name.as_str()) {
            out.append_header((name.as_str(), value.as_bytes()));
        }
    }

    Ok(out.body(resp.bytes().await?))
}
