use leptos::mount::mount_to_body;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod animation;
pub mod api;
pub mod app;
pub mod brand;
pub mod components;
pub mod pages;
pub mod routes;
pub mod scroll;

pub use crate::app::App;
