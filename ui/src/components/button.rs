use crate::brand::logo::join_classes;

const GLASS: &str = "inline-flex items-center justify-center gap-0 whitespace-nowrap rounded-md \
                     border border-white/20 bg-white/10 font-medium text-sm text-white \
                     backdrop-blur-sm transition-colors hover:bg-white/20 \
                     focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-white/40 \
                     cursor-pointer";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Icon,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2",
            ButtonSize::Sm => "h-8 px-3 text-xs",
            ButtonSize::Icon => "h-9 w-9",
        }
    }
}

/// Classes for the translucent "glass" button look, used on both
/// `<button>`s and links styled as buttons.
pub fn glass_button(size: ButtonSize, extra: &str) -> String {
    join_classes(&[GLASS, size.classes(), extra])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_extra_are_appended() {
        let cls = glass_button(ButtonSize::Icon, "ml-2");
        assert!(cls.starts_with("inline-flex"));
        assert!(cls.contains("h-9 w-9"));
        assert!(cls.ends_with("ml-2"));
    }

    #[test]
    fn empty_extra_leaves_no_trailing_space() {
        assert!(!glass_button(ButtonSize::Default, "").ends_with(' '));
    }
}
