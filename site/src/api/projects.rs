use std::sync::Arc;

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::SiteError;
use crate::state::AppState;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LangDto {
    pub name: String,
    pub pct: f32,
    pub color: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProjectDto {
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub labels: Vec<String>, // from repo topics
    pub languages: Vec<LangDto>,
    pub stars: u64,
    pub repo_url: String,
    pub homepage: Option<String>,
}

#[get("/api/projects")]
async fn projects(state: web::Data<AppState>) -> Result<web::Json<Vec<ProjectDto>>, SiteError> {
    let login = state.config.github_login.clone();

    if let Some(cached) = state.projects.get(&login).await {
        log::debug!("projects cache hit for {login}");
        return Ok(web::Json((*cached).clone()));
    }

    let gh = state
        .github
        .as_ref()
        .ok_or(SiteError::ProjectsUnavailable("PROJECTS_PAT is not configured"))?;

    let data: Value = gh
        .graphql(&serde_json::json!({
            "query":     include_str!("repos.graphql"),
            "variables": { "login": login }
        }))
        .await?;

    let out = parse_projects(&data, Utc::now())?;
    log::info!("fetched {} projects for {login}", out.len());

    state.projects.insert(login, Arc::new(out.clone())).await;
    Ok(web::Json(out))
}

/// Months since the last push, bucketed.
pub fn status_for(pushed: DateTime<Utc>, now: DateTime<Utc>) -> &'static str {
    let months = (now - pushed).num_days() / 30;
    match months {
        m if m <= 1 => "active",
        m if m <= 6 => "ongoing",
        m if m <= 18 => "paused",
        _ => "done / archived",
    }
}

pub fn parse_projects(data: &Value, now: DateTime<Utc>) -> Result<Vec<ProjectDto>, SiteError> {
    let repos = data
        .pointer("/data/repositoryOwner/repos/nodes")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            log::warn!("unexpected GraphQL shape: {data:#}");
            SiteError::GraphQlShape
        })?;

    Ok(repos.iter().filter_map(|repo| parse_repo(repo, now)).collect())
}

fn parse_repo(repo: &Value, now: DateTime<Utc>) -> Option<ProjectDto> {
    // name and pushedAt are the only fields we require
    let name = repo.get("name")?.as_str()?.to_owned();
    let pushed: DateTime<Utc> = repo.get("pushedAt")?.as_str()?.parse().ok()?;

    let archived = repo
        .get("isArchived")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let status = if archived {
        "done / archived"
    } else {
        status_for(pushed, now)
    };

    let labels = repo
        .pointer("/repositoryTopics/nodes")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|t| t.pointer("/topic/name").and_then(Value::as_str))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let edges: &[Value] = repo
        .pointer("/languages/edges")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    Some(ProjectDto {
        name,
        description: opt_str(repo, "description"),
        status: status.to_owned(),
        labels,
        languages: language_shares(edges),
        stars: repo
            .get("stargazerCount")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        repo_url: opt_str(repo, "url").unwrap_or_default(),
        homepage: opt_str(repo, "homepageUrl"),
    })
}

fn opt_str(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn language_shares(edges: &[Value]) -> Vec<LangDto> {
    let total: f32 = edges
        .iter()
        .filter_map(|l| l.get("size").and_then(Value::as_u64))
        .map(|s| s as f32)
        .sum();

    if total == 0.0 {
        return Vec::new();
    }

    edges
        .iter()
        .filter_map(|l| {
            let name = l.pointer("/node/name")?.as_str()?.to_owned();
            let pct = (l.get("size")?.as_u64()? as f32 / total) * 100.0;
            let color = l
                .pointer("/node/color")
                .and_then(Value::as_str)
                .map(String::from);
            Some(LangDto { name, pct, color })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn status_buckets() {
        let n = now();
        assert_eq!(status_for(n - Duration::days(10), n), "active");
        assert_eq!(status_for(n - Duration::days(59), n), "active");
        assert_eq!(status_for(n - Duration::days(120), n), "ongoing");
        assert_eq!(status_for(n - Duration::days(400), n), "paused");
        assert_eq!(status_for(n - Duration::days(700), n), "done / archived");
    }

    #[test]
    fn parses_repositories() {
        let data = json!({
            "data": { "repositoryOwner": { "repos": { "nodes": [
                {
                    "name": "portfolio",
                    "description": "My site",
                    "url": "https://github.com/henrikkvamme/portfolio",
                    "homepageUrl": "",
                    "stargazerCount": 4,
                    "pushedAt": "2025-05-20T10:00:00Z",
                    "isArchived": false,
                    "repositoryTopics": { "nodes": [
                        { "topic": { "name": "rust" } },
                        { "topic": { "name": "leptos" } }
                    ]},
                    "languages": { "edges": [
                        { "size": 300, "node": { "name": "Rust", "color": "#dea584" } },
                        { "size": 100, "node": { "name": "CSS", "color": null } }
                    ]}
                },
                { "description": "no name, skipped" }
            ]}}}
        });

        let out = parse_projects(&data, now()).unwrap();
        assert_eq!(out.len(), 1);

        let p = &out[0];
        assert_eq!(p.name, "portfolio");
        assert_eq!(p.status, "active");
        assert_eq!(p.labels, vec!["rust", "leptos"]);
        assert_eq!(p.homepage, None);
        assert_eq!(p.stars, 4);
        assert_eq!(p.languages.len(), 2);
        assert!((p.languages[0].pct - 75.0).abs() < 0.01);
        assert_eq!(p.languages[0].color.as_deref(), Some("#dea584"));
        assert_eq!(p.languages[1].color, None);
    }

    #[test]
    fn archived_repos_are_done() {
        let data = json!({
            "data": { "repositoryOwner": { "repos": { "nodes": [
                { "name": "old", "pushedAt": "2025-05-30T00:00:00Z", "isArchived": true }
            ]}}}
        });
        let out = parse_projects(&data, now()).unwrap();
        assert_eq!(out[0].status, "done / archived");
        assert!(out[0].languages.is_empty());
    }

    #[test]
    fn missing_owner_is_a_shape_error() {
        let data = json!({ "data": { "repositoryOwner": null } });
        assert!(matches!(
            parse_projects(&data, now()),
            Err(SiteError::GraphQlShape)
        ));
    }
}
