use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::{GetUntracked, NodeRef};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

/// Offset (px) past which the header switches to its compact look.
pub const SCROLL_THRESHOLD: i32 = 50;
/// Fixed navbar height subtracted from section offsets.
pub const NAVBAR_HEIGHT_OFFSET: i32 = 120;
/// Lets entrance animations and layout settle before measuring.
pub const SCROLL_ANIMATION_DELAY_MS: u32 = 300;

/// The element that actually scrolls; the window itself never does.
#[derive(Clone, Copy)]
pub struct ScrollContainer(pub NodeRef<html::Main>);

pub fn is_scrolled(scroll_top: i32) -> bool {
    scroll_top > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPlan {
    /// Smooth-scroll the container to `top`.
    Container { top: f64 },
    /// Only the target was found, let the browser pick the ancestor.
    IntoView,
    Nothing,
}

pub fn plan_scroll(target_offset_top: Option<i32>, has_container: bool) -> ScrollPlan {
    match (target_offset_top, has_container) {
        (Some(offset), true) => ScrollPlan::Container {
            top: f64::from(offset - NAVBAR_HEIGHT_OFFSET),
        },
        (Some(_), false) => ScrollPlan::IntoView,
        (None, _) => ScrollPlan::Nothing,
    }
}

/// Smooth-scrolls to the element with `section_id` once the delay elapses.
///
/// Fire-and-forget: repeated calls each schedule their own timer.
pub fn scroll_to_section(container: ScrollContainer, section_id: &str) {
    let id = section_id.to_owned();
    Timeout::new(SCROLL_ANIMATION_DELAY_MS, move || {
        scroll_now(container.0.get_untracked(), &id)
    })
    .forget();
}

fn scroll_now(container: Option<HtmlElement>, section_id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    // forces layout so offset_top is current
    if let Some(el) = &target {
        el.get_bounding_client_rect();
    }

    match (
        plan_scroll(target.as_ref().map(|el| el.offset_top()), container.is_some()),
        target,
        container,
    ) {
        (ScrollPlan::Container { top }, _, Some(main)) => {
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            main.scroll_to_with_scroll_to_options(&opts);
        }
        (ScrollPlan::IntoView, Some(el), _) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert!(!is_scrolled(0));
        assert!(!is_scrolled(49));
        assert!(!is_scrolled(50));
        assert!(is_scrolled(51));
        assert!(is_scrolled(5_000));
    }

    #[test]
    fn negative_overscroll_is_not_scrolled() {
        assert!(!is_scrolled(-30));
    }

    #[test]
    fn existing_target_subtracts_navbar_height() {
        assert_eq!(
            plan_scroll(Some(900), true),
            ScrollPlan::Container { top: 780.0 }
        );
        // sections near the top scroll to a negative offset, which the browser clamps
        assert_eq!(
            plan_scroll(Some(40), true),
            ScrollPlan::Container { top: -80.0 }
        );
    }

    #[test]
    fn missing_container_falls_back_to_into_view() {
        assert_eq!(plan_scroll(Some(900), false), ScrollPlan::IntoView);
    }

    #[test]
    fn missing_target_does_nothing() {
        assert_eq!(plan_scroll(None, true), ScrollPlan::Nothing);
        assert_eq!(plan_scroll(None, false), ScrollPlan::Nothing);
    }
}
