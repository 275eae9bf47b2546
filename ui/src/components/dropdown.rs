use leptos::html;
use leptos::prelude::*;
use leptos_use::on_click_outside;

use super::button::{ButtonSize, glass_button};
use super::icons::{Icon, IconKind};
use crate::brand::logo::join_classes;

#[derive(Clone, Copy)]
struct DropdownOpen(RwSignal<bool>);

/// Menu behind an icon trigger. Closes on outside click or once an item
/// is chosen.
#[component]
pub fn DropdownMenu(
    #[prop(into)] label: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let root: NodeRef<html::Div> = NodeRef::new();

    let _ = on_click_outside(root, move |_| open.set(false));
    provide_context(DropdownOpen(open));

    view! {
        <div node_ref=root class="relative">
            <button
                type="button"
                class=glass_button(ButtonSize::Icon, "")
                aria-label=label
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Icon kind=IconKind::Menu class="h-4 w-4"/>
            </button>
            <div
                role="menu"
                class=join_classes(&["absolute right-0 z-50 mt-2 rounded-md p-1 shadow-lg", &class])
                class:hidden=move || !open.get()
            >
                {children()}
            </div>
        </div>
    }
}

/// Row inside a [`DropdownMenu`]. `on_select` runs before the menu closes.
#[component]
pub fn DropdownMenuItem(
    #[prop(optional)] on_select: Option<Callback<()>>,
    /// Keeps the menu open, for rows hosting their own control.
    #[prop(optional)]
    keep_open: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let open = use_context::<DropdownOpen>();

    view! {
        <div
            role="menuitem"
            class=join_classes(&["rounded-sm px-2 py-1.5 text-sm outline-none hover:bg-white/10", &class])
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.run(());
                }
                if let (Some(DropdownOpen(open)), false) = (open, keep_open) {
                    open.set(false);
                }
            }
        >
            {children()}
        </div>
    }
}
