use leptos::prelude::*;

use crate::brand::links::GITHUB_URL;
use crate::components::icons::{Icon, IconKind};
use crate::components::tilt_card::TiltCard;

#[component]
pub fn GithubCard(#[prop(default = 1)] col_span: u8, #[prop(default = 1)] row_span: u8) -> impl IntoView {
    view! {
        <TiltCard class="p-6" clickable=true col_span row_span hover_brightness=true>
            <a
                class="flex h-full flex-col items-center justify-center text-center transition-colors hover:text-white/90"
                href=GITHUB_URL
                rel="noopener noreferrer"
                target="_blank"
            >
                <Icon kind=IconKind::Github class="mb-4 h-12 w-12 text-white"/>
                <h3 class="mb-2 font-semibold text-lg text-white">"GitHub"</h3>
                <p class="text-sm text-white/60">"Check out my open source projects"</p>
            </a>
        </TiltCard>
    }
}
