use leptos::prelude::*;
use leptos::server::LocalResource;
use leptos::leptos_dom::logging::console_warn;
use leptos_router::hooks::use_location;

use crate::api::{ProjectDto, fetch_projects};
use crate::brand::footer::Footer;
use crate::brand::links::{OWNER_NAME, TAGLINE};
use crate::brand::logo::{Logo, LogoSize};
use crate::components::grid::{ContactCard, GithubCard, ProjectCard};
use crate::components::tilt_card::{TiltCard, TiltIntensity};
use crate::scroll::{ScrollContainer, scroll_to_section};

/// Section id from a location hash such as `#projects`.
pub fn hash_target(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-16 lg:py-24">
            <Logo size=LogoSize::Xl show_text=false/>
            <h1 class="mt-6 font-bold text-4xl text-white tracking-tight sm:text-6xl">{OWNER_NAME}</h1>
            <p class="mt-4 max-w-2xl text-lg text-white/70">{TAGLINE}</p>
        </section>
    }
}

#[component]
fn Work() -> impl IntoView {
    let areas = [
        ("Full-Stack Development", "Web applications from the database to the pixels, typed end to end."),
        ("AI Engineering", "Putting language models to work inside real products and pipelines."),
    ];

    view! {
        <section id="work" class="py-12">
            <h2 class="mb-6 font-bold text-2xl text-white">"Work"</h2>
            <div class="grid auto-rows-fr grid-cols-1 gap-6 md:grid-cols-2">
                {areas
                    .into_iter()
                    .map(|(title, blurb)| view! {
                        <TiltCard class="p-6" tilt_intensity=TiltIntensity::Subtle>
                            <h3 class="mb-2 font-semibold text-lg text-white">{title}</h3>
                            <p class="text-sm text-white/70">{blurb}</p>
                        </TiltCard>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let projects = LocalResource::new(fetch_projects);

    let cards = move || match projects.get() {
        Some(Ok(list)) => list
            .into_iter()
            .map(|p: ProjectDto| view! { <ProjectCard project=p/> })
            .collect_view()
            .into_any(),
        Some(Err(e)) => {
            console_warn(&format!("projects unavailable: {e}"));
            ().into_any()
        }
        None => view! { <p class="col-span-full text-white/60">"loading…"</p> }.into_any(),
    };

    view! {
        <section id="projects" class="py-12">
            <h2 class="mb-6 font-bold text-2xl text-white">"Projects"</h2>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                <GithubCard/>
                <ContactCard row_span=2/>
                <Suspense fallback=|| ()>{cards}</Suspense>
            </div>
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let container = expect_context::<ScrollContainer>();
    let hash = use_location().hash;

    // arriving via `/#projects` from a project page
    Effect::new(move |_| {
        if let Some(id) = hash_target(&hash.get()) {
            scroll_to_section(container, id);
        }
    });

    view! {
        <div class="mx-auto w-full max-w-7xl px-6 lg:px-8">
            <Hero/>
            <Work/>
            <Projects/>
        </div>
        <Footer/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_targets() {
        assert_eq!(hash_target("#projects"), Some("projects"));
        assert_eq!(hash_target("work"), Some("work"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target(""), None);
    }
}
