use leptos::prelude::*;

use super::links::{ASSET_BASE, OWNER_NAME, rel_for_target};
use crate::api::image_url;

pub const DEFAULT_ALT: &str = "Henrik Kvamme Logo";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeClasses {
    pub container: &'static str,
    pub image: &'static str,
    pub text: &'static str,
}

impl LogoSize {
    pub const fn classes(self) -> SizeClasses {
        match self {
            LogoSize::Sm => SizeClasses {
                container: "gap-2",
                image: "h-5 w-5 sm:h-6 sm:w-6",
                text: "text-sm sm:text-base",
            },
            LogoSize::Md => SizeClasses {
                container: "gap-2",
                image: "h-7 w-7 sm:h-8 sm:w-8",
                text: "text-lg sm:text-xl",
            },
            LogoSize::Lg => SizeClasses {
                container: "gap-3",
                image: "h-10 w-10 sm:h-12 sm:w-12",
                text: "text-xl sm:text-2xl",
            },
            LogoSize::Xl => SizeClasses {
                container: "gap-4",
                image: "h-12 w-12 sm:h-16 sm:w-16",
                text: "text-2xl sm:text-3xl",
            },
        }
    }
}

/// Which element wraps the logo. `href` wins over `on_click`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoVariant {
    Anchor,
    Button,
    Plain,
}

impl LogoVariant {
    pub fn select(has_href: bool, has_on_click: bool) -> Self {
        match (has_href, has_on_click) {
            (true, _) => LogoVariant::Anchor,
            (false, true) => LogoVariant::Button,
            (false, false) => LogoVariant::Plain,
        }
    }
}

/// Joins class fragments, skipping empty ones.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn logo_src() -> String {
    format!("{ASSET_BASE}/logo.png")
}

#[component]
pub fn Logo(
    #[prop(optional)] size: LogoSize,
    #[prop(default = true)] show_text: bool,
    #[prop(into, default = DEFAULT_ALT.to_owned())] alt: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(into, default = "_self".to_owned())] target: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let sz = size.classes();
    let base = join_classes(&["flex items-center", sz.container, &class]);

    let content = view! {
        <div class="relative">
            <img
                alt=alt
                class=join_classes(&["m-1 object-contain", sz.image])
                height="64"
                width="64"
                src=image_url(&logo_src(), 128)
            />
        </div>
        {show_text.then(|| view! {
            <div class=join_classes(&["tracking-wide", sz.text])>
                <span class="font-geist-mono font-medium">{OWNER_NAME}</span>
            </div>
        })}
    };

    let variant = LogoVariant::select(href.is_some(), on_click.is_some());
    let click = move |_: leptos::ev::MouseEvent| {
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    match variant {
        LogoVariant::Anchor => {
            let rel = rel_for_target(&target);
            view! {
                <a
                    class=join_classes(&[&base, "no-underline"])
                    href=href
                    rel=rel
                    target=target
                    on:click=click
                >
                    {content}
                </a>
            }
            .into_any()
        }
        LogoVariant::Button => view! {
            <button
                class=join_classes(&[&base, "cursor-pointer border-none bg-transparent"])
                type="button"
                on:click=click
            >
                {content}
            </button>
        }
        .into_any(),
        LogoVariant::Plain => view! { <div class=base>{content}</div> }.into_any(),
    }
}
