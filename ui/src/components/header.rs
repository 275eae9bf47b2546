use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::use_event_listener;

use super::button::{ButtonSize, glass_button};
use super::dropdown::{DropdownMenu, DropdownMenuItem};
use super::icons::{Icon, IconKind};
use super::toggles::{AnimationToggle, Switch, ThemeToggle};
use crate::animation::use_animation;
use crate::brand::links::{ALT_EMAIL, EMAIL, GITHUB_URL, LINKEDIN_URL, mailto};
use crate::brand::logo::Logo;
use crate::scroll::{self, ScrollContainer, scroll_to_section};

const MENU_ITEM: &str = "flex items-center text-white hover:text-white/80";

/// True on a single project's page, not on the list itself.
pub fn is_project_page(pathname: &str) -> bool {
    pathname.starts_with("/projects/") && pathname != "/projects"
}

pub fn header_classes(scrolled: bool) -> &'static str {
    if scrolled {
        "mx-auto w-full px-6 transition-all duration-300 lg:px-8 max-w-6xl py-4 md:px-12 lg:px-6 lg:py-8"
    } else {
        "mx-auto w-full px-6 transition-all duration-300 lg:px-8 max-w-7xl py-4 lg:py-8"
    }
}

pub fn bar_classes(scrolled: bool) -> &'static str {
    if scrolled {
        "glass-navbar w-full py-2 backdrop-blur-sm transition-all duration-300 border-white/20 border-b px-2 sm:px-4 lg:px-5"
    } else {
        "glass-navbar w-full py-2 backdrop-blur-sm transition-all duration-300 border-transparent border-b px-3 lg:px-4"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let container = expect_context::<ScrollContainer>();
    let main_ref = container.0;
    let animation = use_animation();
    let location = use_location();
    let is_scrolled = RwSignal::new(false);

    let pathname = location.pathname;
    let on_project_page = move || is_project_page(&pathname.get());

    let check = move || {
        if let Some(main) = main_ref.get_untracked() {
            let next = scroll::is_scrolled(main.scroll_top());
            if next != is_scrolled.get_untracked() {
                is_scrolled.set(next);
            }
        }
    };

    // removed again when the header's owner is disposed
    let _ = use_event_listener(main_ref, ev::scroll, move |_| check());
    // initial position, once <main> is mounted
    Effect::new(move |_| {
        if main_ref.get().is_some() {
            check();
        }
    });

    let go = move |id: &'static str| move |_: ev::MouseEvent| scroll_to_section(container, id);
    let select =
        move |id: &'static str| Callback::new(move |_: ()| scroll_to_section(container, id));

    view! {
        <header class=move || header_classes(is_scrolled.get())>
            <div class=move || bar_classes(is_scrolled.get())>
                <div class="flex items-center justify-between">
                    {move || if on_project_page() {
                        view! {
                            <a
                                class="flex items-center gap-2 text-white/80 transition-colors hover:text-white"
                                href="/#projects"
                            >
                                <Icon kind=IconKind::ArrowLeft class="h-4 w-4"/>
                                <span class="font-medium">"Back to Projects"</span>
                            </a>
                        }.into_any()
                    } else {
                        view! { <Logo href="/"/> }.into_any()
                    }}

                    // desktop
                    <div class="hidden items-center gap-2 sm:gap-3 lg:flex">
                        <ThemeToggle/>
                        <AnimationToggle/>

                        <button type="button" class=glass_button(ButtonSize::Default, "") on:click=go("work")>
                            <Icon kind=IconKind::Briefcase class="mr-2 h-4 w-4"/>
                            "Work"
                        </button>

                        <button type="button" class=glass_button(ButtonSize::Default, "") on:click=go("projects")>
                            <Icon kind=IconKind::FolderOpen class="mr-2 h-4 w-4"/>
                            "Projects"
                        </button>

                        <a class=glass_button(ButtonSize::Default, "") href=mailto(EMAIL)>
                            <Icon kind=IconKind::Mail class="mr-2 h-4 w-4"/>
                            "Contact"
                        </a>

                        <a
                            class=glass_button(ButtonSize::Icon, "")
                            aria-label="GitHub"
                            href=GITHUB_URL
                            rel="noopener noreferrer"
                            target="_blank"
                        >
                            <Icon kind=IconKind::Github class="h-4 w-4"/>
                        </a>

                        <a
                            class=glass_button(ButtonSize::Icon, "")
                            aria-label="LinkedIn"
                            href=LINKEDIN_URL
                            rel="noopener noreferrer"
                            target="_blank"
                        >
                            <Icon kind=IconKind::Linkedin class="h-4 w-4"/>
                        </a>
                    </div>

                    // mobile
                    <div class="lg:hidden">
                        <DropdownMenu
                            label="Open menu"
                            class="w-56 border border-white/20 bg-black/90 backdrop-blur-sm"
                        >
                            {move || on_project_page().then(|| view! {
                                <DropdownMenuItem>
                                    <a class=MENU_ITEM href="/#projects">
                                        <Icon kind=IconKind::ArrowLeft class="mr-2 h-4 w-4"/>
                                        "Back to Projects"
                                    </a>
                                </DropdownMenuItem>
                            })}

                            <DropdownMenuItem keep_open=true class="flex items-center justify-between text-white">
                                <div class="flex items-center">
                                    <Icon kind=IconKind::Zap class="mr-2 h-4 w-4"/>
                                    "Animation"
                                </div>
                                <Switch
                                    checked=animation.signal()
                                    on_change=Callback::new(move |on: bool| animation.set(on))
                                    label="Animation"
                                />
                            </DropdownMenuItem>

                            <DropdownMenuItem>
                                <a class=MENU_ITEM href=GITHUB_URL rel="noopener noreferrer" target="_blank">
                                    <Icon kind=IconKind::Github class="mr-2 h-4 w-4"/>
                                    "GitHub"
                                </a>
                            </DropdownMenuItem>

                            <DropdownMenuItem>
                                <a class=MENU_ITEM href=LINKEDIN_URL rel="noopener noreferrer" target="_blank">
                                    <Icon kind=IconKind::Linkedin class="mr-2 h-4 w-4"/>
                                    "LinkedIn"
                                </a>
                            </DropdownMenuItem>

                            <DropdownMenuItem on_select=select("work") class="flex cursor-pointer items-center text-white hover:text-white/80">
                                <Icon kind=IconKind::Briefcase class="mr-2 h-4 w-4"/>
                                "Work"
                            </DropdownMenuItem>

                            <DropdownMenuItem on_select=select("projects") class="flex cursor-pointer items-center text-white hover:text-white/80">
                                <Icon kind=IconKind::FolderOpen class="mr-2 h-4 w-4"/>
                                "Projects"
                            </DropdownMenuItem>

                            <DropdownMenuItem>
                                <a class=MENU_ITEM href=mailto(ALT_EMAIL)>
                                    <Icon kind=IconKind::Mail class="mr-2 h-4 w-4"/>
                                    "Contact"
                                </a>
                            </DropdownMenuItem>
                        </DropdownMenu>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_detail_paths() {
        assert!(is_project_page("/projects/portfolio"));
        assert!(is_project_page("/projects/"));
        assert!(!is_project_page("/projects"));
        assert!(!is_project_page("/"));
        assert!(!is_project_page("/projectsx/a"));
    }

    #[test]
    fn scrolled_layout_is_tighter() {
        assert!(header_classes(true).contains("max-w-6xl"));
        assert!(header_classes(false).contains("max-w-7xl"));
        assert!(bar_classes(true).contains("border-white/20"));
        assert!(bar_classes(false).contains("border-transparent"));
    }
}
