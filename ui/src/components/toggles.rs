use leptos::prelude::*;

use super::button::{ButtonSize, glass_button};
use super::icons::{Icon, IconKind};
use crate::animation::use_animation;
use crate::brand::theme::use_theme;

fn switch_track(checked: bool) -> &'static str {
    if checked {
        "relative inline-flex h-5 w-9 shrink-0 items-center rounded-full bg-white/20 transition-colors"
    } else {
        "relative inline-flex h-5 w-9 shrink-0 items-center rounded-full bg-white/10 transition-colors"
    }
}

fn switch_thumb(checked: bool) -> &'static str {
    if checked {
        "pointer-events-none block h-4 w-4 translate-x-4 rounded-full bg-white shadow transition-transform"
    } else {
        "pointer-events-none block h-4 w-4 translate-x-0.5 rounded-full bg-white/70 shadow transition-transform"
    }
}

/// Accessible on/off switch.
#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            aria-checked=move || checked.get().to_string()
            aria-label=label
            class=move || switch_track(checked.get())
            on:click=move |ev| {
                // the switch lives inside menu items that close on click
                ev.stop_propagation();
                on_change.run(!checked.get_untracked());
            }
        >
            <span class=move || switch_thumb(checked.get())></span>
        </button>
    }
}

/// Desktop button flipping the animation preference.
#[component]
pub fn AnimationToggle() -> impl IntoView {
    let animation = use_animation();

    let title = move || {
        if animation.is_enabled() {
            "Disable animations"
        } else {
            "Enable animations"
        }
    };

    view! {
        <button
            type="button"
            class=move || {
                glass_button(
                    ButtonSize::Icon,
                    if animation.is_enabled() { "" } else { "opacity-50" },
                )
            }
            aria-label=title
            title=title
            aria-pressed=move || animation.is_enabled().to_string()
            on:click=move |_| animation.toggle()
        >
            <Icon kind=IconKind::Zap class="h-4 w-4"/>
        </button>
    }
}

/// Cycles dark → light → auto.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class=glass_button(ButtonSize::Icon, "")
            aria-label=move || format!("Theme: {}", theme.theme().label())
            title=move || format!("Theme: {}", theme.theme().label())
            on:click=move |_| theme.set_theme(theme.theme().next())
        >
            <Icon kind=IconKind::Moon class="h-4 w-4"/>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_reflects_state() {
        assert!(switch_track(true).contains("bg-white/20"));
        assert!(switch_thumb(true).contains("translate-x-4"));
        assert!(switch_thumb(false).contains("translate-x-0.5"));
    }
}
