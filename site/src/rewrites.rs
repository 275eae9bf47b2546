/// A path rewrite forwarding requests to another origin.
///
/// `source` is a path prefix. With `catch_all` set, the rule also matches
/// any deeper path and the remainder (leading slash included) is appended to
/// `destination`; otherwise only the exact path matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewrite {
    pub source: &'static str,
    pub destination: &'static str,
    pub catch_all: bool,
}

/// Analytics ingestion proxy. Order matters, first match wins.
pub const INGEST_REWRITES: &[Rewrite] = &[
    Rewrite {
        source: "/ingest/static",
        destination: "https://eu-assets.i.posthog.com/static",
        catch_all: true,
    },
    Rewrite {
        source: "/ingest",
        destination: "https://eu.i.posthog.com",
        catch_all: true,
    },
    Rewrite {
        source: "/ingest/flags",
        destination: "https://eu.i.posthog.com/flags",
        catch_all: false,
    },
];

impl Rewrite {
    fn apply(&self, path: &str) -> Option<String> {
        if path == self.source {
            return Some(self.destination.to_owned());
        }
        if !self.catch_all {
            return None;
        }
        let rest = path.strip_prefix(self.source)?;
        rest.starts_with('/')
            .then(|| format!("{}{}", self.destination, rest))
    }
}

/// Resolves `path` against `rules`, returning the upstream URL (without query).
pub fn resolve(rules: &[Rewrite], path: &str) -> Option<String> {
    rules.iter().find_map(|r| r.apply(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_assets_go_to_asset_host() {
        assert_eq!(
            resolve(INGEST_REWRITES, "/ingest/static/array.js").as_deref(),
            Some("https://eu-assets.i.posthog.com/static/array.js")
        );
    }

    #[test]
    fn everything_else_goes_to_collector() {
        assert_eq!(
            resolve(INGEST_REWRITES, "/ingest/e").as_deref(),
            Some("https://eu.i.posthog.com/e")
        );
        assert_eq!(
            resolve(INGEST_REWRITES, "/ingest/decide/v3").as_deref(),
            Some("https://eu.i.posthog.com/decide/v3")
        );
    }

    #[test]
    fn flags_endpoint_resolves() {
        assert_eq!(
            resolve(INGEST_REWRITES, "/ingest/flags").as_deref(),
            Some("https://eu.i.posthog.com/flags")
        );
    }

    #[test]
    fn trailing_slash_is_kept() {
        assert_eq!(
            resolve(INGEST_REWRITES, "/ingest/e/").as_deref(),
            Some("https://eu.i.posthog.com/e/")
        );
    }

    #[test]
    fn prefix_must_end_on_segment_boundary() {
        assert_eq!(resolve(INGEST_REWRITES, "/ingestion/e"), None);
        assert_eq!(resolve(INGEST_REWRITES, "/projects"), None);
    }

    #[test]
    fn exact_rule_does_not_match_children() {
        let rules = [Rewrite {
            source: "/ingest/flags",
            destination: "https://eu.i.posthog.com/flags",
            catch_all: false,
        }];
        assert_eq!(resolve(&rules, "/ingest/flags/extra"), None);
    }
}
