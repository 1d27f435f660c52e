#![allow(non_snake_case)]

use crate::client::Route;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let on_demo = matches!(route, Route::Demo {});

    rsx! {
        nav {
            class: "site-nav",
            ul {
                li {
                    Link {
                        to: Route::Home {},
                        class: if !on_demo { "active" } else { "" },
                        "Home"
                    }
                }
                li {
                    Link {
                        to: Route::Demo {},
                        class: if on_demo { "active" } else { "" },
                        "Demo"
                    }
                }
            }
        }
    }
}
