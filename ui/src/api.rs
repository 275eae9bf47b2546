use gloo_net::http::Request;
use serde::Deserialize;

use crate::brand::links::ASSET_BASE;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LangDto {
    pub name: String,
    pub pct: f32,
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectDto {
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub labels: Vec<String>,
    pub languages: Vec<LangDto>,
    pub stars: u64,
    pub repo_url: String,
    pub homepage: Option<String>,
}

pub async fn fetch_projects() -> Result<Vec<ProjectDto>, String> {
    let resp = Request::get("/api/projects")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!("projects request failed ({})", resp.status()));
    }

    resp.json::<Vec<ProjectDto>>()
        .await
        .map_err(|e| e.to_string())
}

pub fn status_badge(status: &str) -> &'static str {
    match status {
        "active" => "bg-green-600/90",
        "ongoing" => "bg-orange-600/90",
        "paused" => "bg-yellow-600/90",
        _ => "bg-slate-600/90",
    }
}

pub fn project_image(name: &str) -> String {
    format!("{ASSET_BASE}/projects/{}.png", name.to_lowercase())
}

/// Routes a remote image through the host's resizing pipeline.
pub fn image_url(src: &str, width: u32) -> String {
    let encoded = String::from(js_sys::encode_uri_component(src));
    format!("/_image?url={encoded}&w={width}")
}

/// `flex` style for one segment of the language bar.
pub fn language_segment_style(lang: &LangDto) -> String {
    format!(
        "flex:{:.3} 0 0;background:{};",
        lang.pct,
        lang.color.as_deref().unwrap_or("#666")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colours() {
        assert_eq!(status_badge("active"), "bg-green-600/90");
        assert_eq!(status_badge("paused"), "bg-yellow-600/90");
        assert_eq!(status_badge("done / archived"), "bg-slate-600/90");
    }

    #[test]
    fn project_images_live_under_allow_listed_prefix() {
        let src = project_image("Portfolio");
        assert!(src.starts_with("https://raw.githubusercontent.com/henrikkvamme/portfolio/"));
        assert!(src.ends_with("/projects/portfolio.png"));
    }

    #[test]
    fn missing_language_colour_falls_back_to_grey() {
        let lang = LangDto {
            name: "Nix".into(),
            pct: 12.5,
            color: None,
        };
        assert_eq!(language_segment_style(&lang), "flex:12.500 0 0;background:#666;");
    }

    #[test]
    fn decodes_host_payload() {
        let json = r##"[{"name":"portfolio","description":null,"status":"active",
            "labels":["rust"],"languages":[{"name":"Rust","pct":100.0,"color":"#dea584"}],
            "stars":3,"repo_url":"https://github.com/henrikkvamme/portfolio","homepage":null}]"##;
        let projects: Vec<ProjectDto> = serde_json::from_str(json).unwrap();
        assert_eq!(projects[0].languages[0].name, "Rust");
        assert_eq!(projects[0].homepage, None);
    }
}
