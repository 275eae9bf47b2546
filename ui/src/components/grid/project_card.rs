use leptos::prelude::*;

use crate::api::{LangDto, ProjectDto, image_url, language_segment_style, project_image, status_badge};
use crate::components::icons::{Icon, IconKind};
use crate::components::tilt_card::TiltCard;

#[component]
pub fn LanguageBar(languages: Vec<LangDto>) -> impl IntoView {
    let tooltip = languages
        .iter()
        .map(|l| format!("{} {:.1}%", l.name, l.pct))
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="flex h-2 w-full overflow-hidden rounded-full" title=tooltip>
            <For
                each=move || languages.clone()
                key=|seg| seg.name.clone()
                children=|seg| view! { <div class="basis-0" style=language_segment_style(&seg)></div> }
            />
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectDto, #[prop(default = 1)] col_span: u8) -> impl IntoView {
    let href = format!("/projects/{}", project.name);
    let badge = status_badge(&project.status);

    view! {
        <TiltCard class="flex h-full flex-col" clickable=true col_span hover_brightness=true>
            <a href=href class="flex h-full flex-col">
                <div class="relative">
                    <img
                        src=image_url(&project_image(&project.name), 640)
                        alt=format!("{} preview", project.name)
                        class="h-40 w-full object-cover"
                        loading="lazy"
                    />
                    <span class=format!("absolute top-2 left-2 rounded-full px-2 py-0.5 text-xs text-white {badge}")>
                        {project.status.clone()}
                    </span>
                </div>
                <div class="flex flex-1 flex-col gap-2 p-5">
                    <div class="flex items-center justify-between">
                        <h3 class="font-semibold text-lg text-white">{project.name.clone()}</h3>
                        <span class="flex items-center gap-1 text-sm text-white/60">
                            <Icon kind=IconKind::Star class="h-3.5 w-3.5"/>
                            {project.stars}
                        </span>
                    </div>
                    <p class="text-sm text-white/70">{project.description.clone()}</p>
                    <div class="mt-auto flex flex-wrap gap-1.5">
                        {project
                            .labels
                            .iter()
                            .map(|l| view! {
                                <span class="rounded-full border border-white/10 px-2 py-0.5 text-xs text-white/60">
                                    {l.clone()}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
                <LanguageBar languages=project.languages.clone()/>
            </a>
        </TiltCard>
    }
}
