use leptos::prelude::*;
use leptos::server::LocalResource;
use leptos_router::hooks::use_params_map;

use crate::api::{ProjectDto, fetch_projects, image_url, project_image, status_badge};
use crate::brand::footer::Footer;
use crate::brand::links::EXTERNAL_SOCIAL_LINKS;
use crate::components::button::{ButtonSize, glass_button};
use crate::components::grid::LanguageBar;
use crate::components::icons::{Icon, IconKind};

pub fn find_project(list: Vec<ProjectDto>, name: &str) -> Option<ProjectDto> {
    list.into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[component]
fn ProjectDetail(project: ProjectDto) -> impl IntoView {
    let badge = status_badge(&project.status);

    view! {
        <article class="py-12">
            <img
                src=image_url(&project_image(&project.name), 1200)
                alt=format!("{} preview", project.name)
                class="mb-8 h-64 w-full rounded-2xl object-cover"
            />
            <div class="mb-4 flex items-center gap-3">
                <h1 class="font-bold text-4xl text-white tracking-tight">{project.name.clone()}</h1>
                <span class=format!("rounded-full px-2 py-0.5 text-xs text-white {badge}")>
                    {project.status.clone()}
                </span>
            </div>
            <p class="mb-6 max-w-3xl text-lg text-white/70">{project.description.clone()}</p>

            <div class="mb-8 max-w-xl">
                <LanguageBar languages=project.languages.clone()/>
                <ul class="mt-2 flex flex-wrap gap-3 text-xs text-white/60">
                    {project
                        .languages
                        .iter()
                        .map(|l| view! { <li>{format!("{} {:.1}%", l.name, l.pct)}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="flex flex-wrap gap-3">
                <a
                    class=glass_button(ButtonSize::Default, "")
                    href=project.repo_url.clone()
                    rel="noopener noreferrer"
                    target="_blank"
                >
                    <Icon kind=IconKind::Github class="mr-2 h-4 w-4"/>
                    "Source"
                </a>
                {project.homepage.clone().map(|url| view! {
                    <a class=glass_button(ButtonSize::Default, "") href=url rel="noopener noreferrer" target="_blank">
                        "Live site"
                    </a>
                })}
            </div>
        </article>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.read().get("name").unwrap_or_default();
    let projects = LocalResource::new(fetch_projects);

    let body = move || match projects.get() {
        Some(Ok(list)) => match find_project(list, &name()) {
            Some(project) => view! { <ProjectDetail project/> }.into_any(),
            None => view! { <p class="py-24 text-white/70">"No such project."</p> }.into_any(),
        },
        Some(Err(e)) => view! { <p class="py-24 text-red-400">"error: " {e}</p> }.into_any(),
        None => view! { <p class="py-24 text-white/60">"loading…"</p> }.into_any(),
    };

    view! {
        <div class="mx-auto w-full max-w-5xl px-6 lg:px-8">
            <Suspense fallback=|| ()>{body}</Suspense>
        </div>
        <Footer links=EXTERNAL_SOCIAL_LINKS.to_vec() show_website_link=true/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> ProjectDto {
        ProjectDto {
            name: name.to_owned(),
            description: None,
            status: "active".into(),
            labels: vec![],
            languages: vec![],
            stars: 0,
            repo_url: format!("https://github.com/henrikkvamme/{name}"),
            homepage: None,
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let list = vec![project("portfolio"), project("Solver")];
        assert_eq!(find_project(list.clone(), "solver").map(|p| p.name), Some("Solver".into()));
        assert!(find_project(list, "missing").is_none());
    }
}
