#![allow(non_snake_case)]

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

mod components;
mod pages;
pub mod utils;

use components::nav_bar::Navbar;
use components::overlay_host::OverlayHost;
use pages::demo::Demo;
use pages::home::Home;

#[wasm_bindgen(start)]
pub fn run_app() {
    utils::init_tracing();
    tracing::info!("starting app");
    launch(App);
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Home {},
    #[route("/demo")]
    Demo {},
}

/// Lives for the whole page load, so the welcome cover only shows once even when
/// navigating between pages.
#[component]
fn Wrapper() -> Element {
    rsx! {
        style { { include_str!("css/site.css") } }
        OverlayHost {
            Navbar {}
            Outlet::<Route> {}
        }
    }
}

fn App() -> Element {
    rsx!(Router::<Route> {})
}
