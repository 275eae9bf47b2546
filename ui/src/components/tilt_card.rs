use leptos::html;
use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::animation::use_animation;
use crate::brand::logo::join_classes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TiltIntensity {
    Subtle,
    #[default]
    Normal,
}

impl TiltIntensity {
    pub fn max_degrees(self) -> f64 {
        match self {
            TiltIntensity::Subtle => 4.0,
            TiltIntensity::Normal => 8.0,
        }
    }
}

/// Rotation (x, y) in degrees for a pointer at (`x`, `y`) inside a
/// `width`×`height` box. The edge under the pointer tips toward the viewer.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64, max_degrees: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (x / width).clamp(0.0, 1.0) - 0.5;
    let ny = (y / height).clamp(0.0, 1.0) - 0.5;
    (-ny * 2.0 * max_degrees, nx * 2.0 * max_degrees)
}

pub fn transform_style(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "transform: perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg);"
    )
}

/// Grid placement; out-of-range spans fall back to 1.
pub fn span_classes(col_span: u8, row_span: u8) -> &'static str {
    match (col_span, row_span) {
        (2, 2) => "col-span-1 md:col-span-2 row-span-2",
        (2, _) => "col-span-1 md:col-span-2 row-span-1",
        (3, 2) => "col-span-1 md:col-span-2 lg:col-span-3 row-span-2",
        (3, _) => "col-span-1 md:col-span-2 lg:col-span-3 row-span-1",
        (_, 2) => "col-span-1 row-span-2",
        _ => "col-span-1 row-span-1",
    }
}

#[component]
pub fn TiltCard(
    #[prop(default = 1)] col_span: u8,
    #[prop(default = 1)] row_span: u8,
    #[prop(optional)] tilt_intensity: TiltIntensity,
    #[prop(optional)] hover_brightness: bool,
    #[prop(optional)] clickable: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let animation = use_animation();
    let card: NodeRef<html::Div> = NodeRef::new();
    let tilt = RwSignal::new((0.0_f64, 0.0_f64));

    let on_move = move |ev: PointerEvent| {
        if !animation.is_enabled_untracked() {
            return;
        }
        let Some(el) = card.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        tilt.set(tilt_angles(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
            rect.width(),
            rect.height(),
            tilt_intensity.max_degrees(),
        ));
    };

    let style = move || {
        let (rx, ry) = tilt.get();
        if animation.is_enabled() && (rx, ry) != (0.0, 0.0) {
            transform_style(rx, ry)
        } else {
            String::new()
        }
    };

    let classes = join_classes(&[
        "glass-card relative overflow-hidden rounded-2xl border border-white/10 bg-white/5 \
         backdrop-blur-sm transition-transform duration-200 ease-out",
        span_classes(col_span, row_span),
        if hover_brightness { "hover:brightness-110" } else { "" },
        if clickable { "cursor-pointer" } else { "" },
        &class,
    ]);

    view! {
        <div
            node_ref=card
            class=classes
            style=style
            on:pointermove=on_move
            on:pointerleave=move |_| tilt.set((0.0, 0.0))
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt_angles(50.0, 50.0, 100.0, 100.0, 8.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_max() {
        // top-left: top edge tips forward (+x), left side back (-y)
        assert_eq!(tilt_angles(0.0, 0.0, 200.0, 100.0, 4.0), (4.0, -4.0));
        assert_eq!(tilt_angles(200.0, 100.0, 200.0, 100.0, 4.0), (-4.0, 4.0));
    }

    #[test]
    fn pointer_outside_is_clamped() {
        assert_eq!(tilt_angles(-40.0, 500.0, 100.0, 100.0, 8.0), (-8.0, -8.0));
    }

    #[test]
    fn degenerate_box_is_flat() {
        assert_eq!(tilt_angles(10.0, 10.0, 0.0, 100.0, 8.0), (0.0, 0.0));
    }

    #[test]
    fn spans() {
        assert_eq!(span_classes(1, 1), "col-span-1 row-span-1");
        assert_eq!(span_classes(2, 1), "col-span-1 md:col-span-2 row-span-1");
        assert_eq!(span_classes(3, 2), "col-span-1 md:col-span-2 lg:col-span-3 row-span-2");
        assert_eq!(span_classes(9, 9), "col-span-1 row-span-1");
    }

    #[test]
    fn intensities() {
        assert!(TiltIntensity::Subtle.max_degrees() < TiltIntensity::Normal.max_degrees());
        assert_eq!(TiltIntensity::default(), TiltIntensity::Normal);
    }

    #[test]
    fn transform_is_formatted() {
        assert_eq!(
            transform_style(1.0, -2.5),
            "transform: perspective(1000px) rotateX(1.00deg) rotateY(-2.50deg);"
        );
    }
}
