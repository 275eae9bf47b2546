use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::animation::provide_animation_context;
use crate::brand::links::{OWNER_NAME, TAGLINE};
use crate::brand::theme::{Theme, provide_theme_context};
use crate::components::header::Header;
use crate::routes::RoutesMenu;
use crate::scroll::ScrollContainer;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = provide_theme_context(Theme::Dark);
    provide_animation_context();

    // <main> scrolls, not the window; the header listens to it
    let main_ref: NodeRef<html::Main> = NodeRef::new();
    provide_context(ScrollContainer(main_ref));

    view! {
      <Title text=format!("{OWNER_NAME} – {TAGLINE}")/>
      <Meta name="description" content="Portfolio, projects and contact details."/>

      <Router>
        <div class=move || format!("flex h-screen flex-col bg-black text-white {}", theme.resolved_theme().class())>
          <Header/>
          <main node_ref=main_ref class="flex-1 overflow-y-auto">
            <RoutesMenu/>
          </main>
        </div>
      </Router>
    }
}
