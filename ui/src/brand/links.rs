pub const OWNER_NAME: &str = "Henrik Kvamme";
pub const TAGLINE: &str = "Full-Stack Developer & AI Engineer";

pub const EMAIL: &str = "henrik.halvorsen.kvamme@gmail.com";
/// Used by the mobile menu's contact entry.
pub const ALT_EMAIL: &str = "henrik@henrikkvamme.dev";
pub const GITHUB_URL: &str = "https://github.com/henrikkvamme";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/henrik-kvamme";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/henrikhalvorsenkvamme/";
pub const WEBSITE_URL: &str = "https://henrikkvamme.no";

/// Everything remote the site renders lives under this prefix, which the
/// host's image allow-list covers.
pub const ASSET_BASE: &str =
    "https://raw.githubusercontent.com/henrikkvamme/portfolio/main/apps/web/public/images";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

impl FooterLink {
    pub fn target(&self) -> &'static str {
        if self.external { "_blank" } else { "_self" }
    }

    pub fn rel(&self) -> Option<&'static str> {
        rel_for_target(self.target())
    }
}

pub fn rel_for_target(target: &str) -> Option<&'static str> {
    (target == "_blank").then_some("noopener noreferrer")
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// For the main portfolio site.
pub const DEFAULT_SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "GitHub",
        href: GITHUB_URL,
        external: true,
    },
    FooterLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        external: true,
    },
    FooterLink {
        label: "Instagram",
        href: INSTAGRAM_URL,
        external: true,
    },
    FooterLink {
        label: "Email",
        href: "mailto:henrik.halvorsen.kvamme@gmail.com",
        external: false,
    },
];

/// Minimal set for other sites linking back here.
pub const EXTERNAL_SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "GitHub",
        href: GITHUB_URL,
        external: true,
    },
    FooterLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        external: true,
    },
    FooterLink {
        label: "Email",
        href: "mailto:henrik.halvorsen.kvamme@gmail.com",
        external: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links_open_in_new_tab() {
        for link in DEFAULT_SOCIAL_LINKS.iter().filter(|l| l.external) {
            assert_eq!(link.target(), "_blank");
            assert_eq!(link.rel(), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn mail_links_stay_in_tab() {
        let email = DEFAULT_SOCIAL_LINKS
            .iter()
            .find(|l| l.label == "Email")
            .unwrap();
        assert_eq!(email.href, mailto(EMAIL));
        assert_eq!(email.target(), "_self");
        assert_eq!(email.rel(), None);
    }

    #[test]
    fn external_set_is_a_subset() {
        assert!(
            EXTERNAL_SOCIAL_LINKS
                .iter()
                .all(|l| DEFAULT_SOCIAL_LINKS.contains(l))
        );
        assert!(!EXTERNAL_SOCIAL_LINKS.iter().any(|l| l.label == "Instagram"));
    }
}
