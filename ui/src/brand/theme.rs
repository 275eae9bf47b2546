use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follow `prefers-color-scheme`.
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::Auto if prefers_dark => ResolvedTheme::Dark,
            Theme::Auto => ResolvedTheme::Light,
        }
    }

    /// Dark -> Light -> Auto -> Dark.
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Auto,
            Theme::Auto => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Auto => "Auto",
        }
    }
}

impl ResolvedTheme {
    /// Class set on the root so `dark:` variants apply.
    pub fn class(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    prefers_dark: Signal<bool>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.theme.get().resolve(self.prefers_dark.get())
    }
}

pub fn provide_theme_context(initial: Theme) -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(initial),
        prefers_dark: use_preferred_dark(),
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_themes_ignore_os_hint() {
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn auto_follows_os_hint() {
        assert_eq!(Theme::Auto.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::Auto.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn cycling_visits_every_theme() {
        let start = Theme::Dark;
        assert_eq!(start.next(), Theme::Light);
        assert_eq!(start.next().next(), Theme::Auto);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default().resolve(false), ResolvedTheme::Dark);
    }
}
