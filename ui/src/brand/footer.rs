use leptos::prelude::*;

use super::links::{DEFAULT_SOCIAL_LINKS, FooterLink, OWNER_NAME, TAGLINE, WEBSITE_URL};
use super::logo::{Logo, LogoSize, join_classes};
use super::theme::{ResolvedTheme, use_theme};

pub const DEFAULT_COPYRIGHT_TEXT: &str = "All rights reserved.";

pub fn copyright_line(year: u32, holder: &str, text: Option<&str>) -> String {
    format!(
        "© {year} {holder}. {}",
        text.unwrap_or(DEFAULT_COPYRIGHT_TEXT)
    )
}

struct FooterClasses {
    container: &'static str,
    muted: &'static str,
    link: &'static str,
}

fn footer_classes(theme: ResolvedTheme) -> FooterClasses {
    match theme {
        ResolvedTheme::Dark => FooterClasses {
            container: "border-white/10 bg-black text-white",
            muted: "text-white/60",
            link: "text-white/70 hover:text-white",
        },
        ResolvedTheme::Light => FooterClasses {
            container: "border-black/10 bg-white text-neutral-900",
            muted: "text-neutral-500",
            link: "text-neutral-600 hover:text-neutral-900",
        },
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Site footer. `theme` defaults to whatever the theme context resolves to.
#[component]
pub fn Footer(
    #[prop(into, default = TAGLINE.to_owned())] tagline: String,
    #[prop(default = DEFAULT_SOCIAL_LINKS.to_vec())] links: Vec<FooterLink>,
    #[prop(default = true)] show_copyright: bool,
    #[prop(optional, into)] copyright_text: Option<String>,
    #[prop(into, default = OWNER_NAME.to_owned())] copyright_holder: String,
    #[prop(optional)] theme: Option<ResolvedTheme>,
    #[prop(into, default = WEBSITE_URL.to_owned())] website_url: String,
    #[prop(optional)] show_website_link: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctx = use_theme();
    let classes = move || footer_classes(theme.unwrap_or_else(|| ctx.resolved_theme()));

    let copyright = show_copyright.then(|| {
        copyright_line(current_year(), &copyright_holder, copyright_text.as_deref())
    });

    view! {
        <footer class=move || join_classes(&["w-full border-t px-6 py-10 lg:px-8", classes().container, &class])>
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-6 md:flex-row">
                <div class="flex flex-col items-center gap-2 md:items-start">
                    <Logo size=LogoSize::Sm href="/"/>
                    <p class=move || join_classes(&["text-sm", classes().muted])>{tagline}</p>
                </div>

                <nav class="flex flex-wrap items-center justify-center gap-4 text-sm">
                    {links
                        .into_iter()
                        .map(move |link| view! {
                            <a
                                class=move || join_classes(&["transition-colors", classes().link])
                                href=link.href
                                target=link.target()
                                rel=link.rel()
                            >
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                    {show_website_link.then(|| view! {
                        <a
                            class=move || join_classes(&["font-medium transition-colors", classes().link])
                            href=website_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "henrikkvamme.no"
                        </a>
                    })}
                </nav>
            </div>

            {copyright.map(|line| view! {
                <p class=move || join_classes(&["mt-8 text-center text-xs", classes().muted])>{line}</p>
            })}
        </footer>
    }
}
