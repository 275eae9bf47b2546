use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::*;
use leptos_use::use_media_query;

const STORAGE_KEY: &str = "portfolio.animations";

/// Site-wide switch for motion effects (tilt, transitions).
#[derive(Clone, Copy)]
pub struct AnimationContext {
    enabled: RwSignal<bool>,
}

impl AnimationContext {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: RwSignal::new(enabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn is_enabled_untracked(&self) -> bool {
        self.enabled.get_untracked()
    }

    pub fn signal(&self) -> Signal<bool> {
        self.enabled.into()
    }

    pub fn set(&self, on: bool) {
        self.enabled.set(on);
    }

    pub fn toggle(&self) {
        self.enabled.update(|on| *on = !*on);
    }
}

/// Parses the stored flag; anything unexpected counts as "no preference".
pub fn parse_preference(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_preference() -> Option<bool> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    parse_preference(&raw)
}

fn store_preference(on: bool) {
    let Some(store) = storage() else { return };
    if store.set_item(STORAGE_KEY, &on.to_string()).is_err() {
        console_warn("could not persist animation preference");
    }
}

/// Installs the context, seeded from storage or the OS reduced-motion hint,
/// and writes every change back to storage.
pub fn provide_animation_context() -> AnimationContext {
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let initial = load_preference().unwrap_or_else(|| !reduced_motion.get_untracked());

    let ctx = AnimationContext::new(initial);
    let enabled = ctx.enabled;
    Effect::new(move |prev: Option<bool>| {
        let on = enabled.get();
        if prev.is_some_and(|p| p != on) {
            store_preference(on);
        }
        on
    });

    provide_context(ctx);
    ctx
}

pub fn use_animation() -> AnimationContext {
    expect_context::<AnimationContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_preference() {
        let owner = Owner::new();
        owner.set();

        for start in [true, false] {
            let ctx = AnimationContext::new(start);
            ctx.toggle();
            assert_eq!(ctx.is_enabled_untracked(), !start);
            ctx.toggle();
            assert_eq!(ctx.is_enabled_untracked(), start);
        }
    }

    #[test]
    fn set_overrides() {
        let owner = Owner::new();
        owner.set();

        let ctx = AnimationContext::new(true);
        ctx.set(false);
        assert!(!ctx.is_enabled_untracked());
    }

    #[test]
    fn stored_values() {
        assert_eq!(parse_preference("true"), Some(true));
        assert_eq!(parse_preference(" false\n"), Some(false));
        assert_eq!(parse_preference("off"), Some(false));
        assert_eq!(parse_preference("maybe"), None);
        assert_eq!(parse_preference(""), None);
    }
}
