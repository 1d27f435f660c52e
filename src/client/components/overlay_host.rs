#![allow(non_snake_case)]

use crate::client::components::splash_overlay::SplashOverlay;
use crate::common::{HostState, CONFIG};
use dioxus::prelude::*;

/// Shows the welcome cover once per page load on top of `children`.
///
/// The children are rendered from the start, the cover only sits on top of them.
#[component]
pub fn OverlayHost(children: Element) -> Element {
    let mut host = use_signal(HostState::default);
    let cover = &CONFIG.cover;

    rsx! {
        if host().shows_overlay() {
            SplashOverlay {
                welcome_text: cover.welcome_text().to_string(),
                background: cover.background.clone(),
                timings: cover.timings,
                on_finish_loading: move |_| {
                    if host.write().overlay_finished() {
                        tracing::info!("welcome cover finished");
                    }
                },
            }
        }
        { children }
    }
}
