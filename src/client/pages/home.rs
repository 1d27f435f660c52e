#![allow(non_snake_case)]

use crate::client::Route;
use crate::common::{CoverTimings, CONFIG};
use dioxus::prelude::*;

/// When each step of the welcome cover happens, in ms after the dismissal click.
fn cover_timeline(timings: &CoverTimings) -> [(u64, &'static str); 4] {
    let hidden = timings.hide_delay_millis;
    [
        (0, "ripple and fade start"),
        (timings.ripple_millis, "ripple gone"),
        (hidden, "cover leaves the page"),
        (hidden + timings.finish_delay_millis, "page takes over"),
    ]
}

#[component]
pub fn Home() -> Element {
    let title = &CONFIG.site.title;
    let cover = &CONFIG.cover;
    let welcome = cover.welcome_text();
    let tick_millis = cover.timings.tick_millis;
    let timeline = cover_timeline(&cover.timings);

    rsx! {
        style { { include_str!("css/home.css") } }
        main {
            class: "home",

            section {
                class: "home-hero",
                h1 { "{title}" }
                p { class: "home-welcome", "{welcome}" }
                Link {
                    to: Route::Demo {},
                    class: "home-cta",
                    "Open the demo page"
                }
            }

            section {
                class: "home-notes",
                h2 { "The welcome cover" }
                p { "The greeting above was typed out one character every {tick_millis} ms. A click anywhere sent the cover away:" }
                ol {
                    for (at, step) in timeline {
                        li {
                            key: "{at}",
                            span { class: "home-at", "+{at} ms" }
                            "{step}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_follows_timings() {
        let timeline = cover_timeline(&CoverTimings::default());
        let times: Vec<u64> = timeline.iter().map(|(at, _)| *at).collect();
        assert_eq!(times, vec![0, 1000, 1200, 1800]);

        let timings = CoverTimings {
            hide_delay_millis: 300,
            finish_delay_millis: 50,
            ..CoverTimings::default()
        };
        assert_eq!(cover_timeline(&timings)[3].0, 350);
    }
}
