#![allow(non_snake_case)]

use crate::client::utils::{self, ClickSubscription};
use crate::common::{BackgroundMedia, Cover, CoverEvent, CoverTimings};
use dioxus::prelude::*;
use futures_util::StreamExt;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Full screen welcome cover.
///
/// Types out `welcome_text` over the background, and on the first click anywhere on the
/// page plays a ripple, fades out, leaves the tree and finally calls `on_finish_loading`.
#[component]
pub fn SplashOverlay(
    welcome_text: ReadOnlySignal<String>,
    #[props(default)] background: BackgroundMedia,
    #[props(default)] timings: CoverTimings,
    #[props(default)] on_finish_loading: EventHandler<()>,
) -> Element {
    let mut cover = use_signal(|| Cover::new(&welcome_text.peek(), timings));

    // Reruns, and so restarts the reveal, whenever the welcome text changes.
    let _reveal = use_resource(move || async move {
        let text = welcome_text();
        if cover.write().restart_reveal(&text) {
            tracing::debug!("welcome text changed, restarting reveal");
        }

        let tick = cover.peek().timings().tick();
        loop {
            gloo_timers::future::sleep(tick).await;
            if !cover.write().tick() {
                break;
            }
        }

        tracing::debug!("welcome text fully revealed");
    });

    let subscription: Rc<RefCell<Option<ClickSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let dismissal = use_coroutine({
        let subscription = subscription.clone();
        move |mut clicks: UnboundedReceiver<(f64, f64)>| async move {
            let Some((x, y)) = clicks.next().await else {
                return;
            };

            // Only the first click counts.
            subscription.borrow_mut().take();
            drop(clicks);

            let started = cover.write().click(x, y, utils::now_millis());
            if !started {
                return;
            }
            tracing::info!("dismissing welcome cover");

            loop {
                let next = cover.peek().next_deadline();
                let Some(deadline) = next else {
                    break;
                };

                let wait = deadline.saturating_sub(utils::now_millis());
                gloo_timers::future::sleep(Duration::from_millis(wait)).await;

                let events = cover.write().advance(utils::now_millis());
                for event in events {
                    match event {
                        CoverEvent::Hidden => tracing::info!("welcome cover hidden"),
                        CoverEvent::Finished => on_finish_loading.call(()),
                    }
                }
            }
        }
    });

    use_hook({
        let subscription = subscription.clone();
        move || {
            let tx = dismissal.tx();
            let sub = ClickSubscription::on_body(move |x, y| {
                // Fails once the dismissal has taken its click, which is fine.
                let _ = tx.unbounded_send((x, y));
            });

            if sub.is_none() {
                tracing::warn!("welcome cover can't listen for clicks");
            }
            *subscription.borrow_mut() = sub;
        }
    });

    let scroll_locked = use_memo(move || cover.read().scroll_locked());
    use_effect(move || utils::set_scroll_locked(scroll_locked()));

    use_drop(move || {
        subscription.borrow_mut().take();
        if let Ok(mut cover) = cover.try_write() {
            cover.unmount();
        }
        utils::set_scroll_locked(false);
    });

    let state = cover.read();
    if !state.is_visible() {
        return None;
    }

    let container_class = if state.is_dismissing() {
        "welcome page-clicked"
    } else {
        "welcome"
    };
    let revealed = state.revealed().to_string();
    let fade_millis = timings.fade_millis;
    let ripple_millis = timings.ripple_millis;
    let ripples: Vec<(String, f64, f64)> = state
        .ripples()
        .map(|ripple| (ripple.id.to_string(), ripple.left(), ripple.top()))
        .collect();

    rsx! {
        style { { include_str!("css/cover.css") } }
        div {
            class: container_class,
            id: "pageContainer",
            transition: "opacity {fade_millis}ms ease",

            { background_media(&background) }

            div {
                class: "welcome-text",
                id: "welcomeText",
                "{revealed}"
                span { class: "type-cursor", "|" }
            }

            for (id, left, top) in ripples {
                div {
                    key: "{id}",
                    class: "ripple",
                    left: "{left}px",
                    top: "{top}px",
                    animation_duration: "{ripple_millis}ms",
                }
            }
        }
    }
}

fn background_media(media: &BackgroundMedia) -> Element {
    match media.clone() {
        BackgroundMedia::Image { src } => {
            let failed = src.clone();
            rsx! {
                img {
                    class: "welcome-bg",
                    src: "{src}",
                    alt: "welcome background",
                    draggable: "false",
                    onerror: move |_| tracing::warn!("failed to load background image {}", failed),
                }
            }
        }
        BackgroundMedia::Video { src, poster } => {
            let failed = src.clone();
            let poster = poster.unwrap_or_default();
            rsx! {
                video {
                    class: "welcome-bg",
                    src: "{src}",
                    poster: "{poster}",
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                    playsinline: true,
                    onmounted: move |event: MountedEvent| async move {
                        if let Some(element) = event.data().downcast::<web_sys::Element>().cloned() {
                            utils::ensure_playing(element).await;
                        }
                    },
                    onerror: move |_| tracing::warn!("failed to load background video {}", failed),
                }
            }
        }
    }
}
