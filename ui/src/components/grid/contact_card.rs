use leptos::prelude::*;

use crate::brand::links::{EMAIL, GITHUB_URL, LINKEDIN_URL, mailto};
use crate::components::button::{ButtonSize, glass_button};
use crate::components::icons::{Icon, IconKind};
use crate::components::tilt_card::{TiltCard, TiltIntensity};

#[component]
pub fn ContactCard(#[prop(default = 1)] col_span: u8, #[prop(default = 1)] row_span: u8) -> impl IntoView {
    view! {
        <TiltCard
            class="flex h-full flex-col justify-center p-8 lg:p-10"
            col_span
            row_span
            hover_brightness=true
            tilt_intensity=TiltIntensity::Subtle
        >
            <div class="text-center">
                <div class="mb-4">
                    <Icon kind=IconKind::MessageCircle class="mx-auto h-12 w-12 text-white/80"/>
                </div>
                <h3 class="mb-2 font-semibold text-sm text-white/70">"Contact"</h3>
                <h2 class="mb-4 font-bold text-white text-xl tracking-tight">"Get In Touch"</h2>
                <p class="mb-6 text-sm text-white/80 leading-relaxed">
                    "Available for part-time work, full-time work in the summer, and interesting projects."
                </p>

                <div class="space-y-3">
                    <a class=glass_button(ButtonSize::Sm, "w-full") href=mailto(EMAIL)>
                        <Icon kind=IconKind::Mail class="mr-2 h-4 w-4"/>
                        "Email"
                    </a>
                    <a
                        class=glass_button(
                            ButtonSize::Sm,
                            "w-full border-blue-400/30 bg-blue-500/10 text-blue-200 hover:bg-blue-500/20",
                        )
                        href=LINKEDIN_URL
                        rel="noopener noreferrer"
                        target="_blank"
                    >
                        <Icon kind=IconKind::Linkedin class="mr-2 h-4 w-4"/>
                        "LinkedIn"
                    </a>
                    <a
                        class=glass_button(
                            ButtonSize::Sm,
                            "w-full border-gray-400/30 bg-gray-500/10 text-gray-200 hover:bg-gray-500/20",
                        )
                        href=GITHUB_URL
                        rel="noopener noreferrer"
                        target="_blank"
                    >
                        <Icon kind=IconKind::Github class="mr-2 h-4 w-4"/>
                        "GitHub"
                    </a>
                </div>
            </div>
        </TiltCard>
    }
}
