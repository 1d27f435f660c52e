use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::AppearanceConfig;

/// Theme used when the visitor hasn't stored a preference.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    /// Dark when the OS prefers it or the current hour is inside the dark window.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Stored `localStorage.darkMode` values meaning dark, any other stored value means light.
pub const DARK_STORED: [&str; 2] = ["true", "dark"];

/// What the browser tells us before first paint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment<'a> {
    /// Raw `localStorage.darkMode` value.
    pub stored: Option<&'a str>,
    pub prefers_dark: bool,
    pub hour: u8,
}

/// Whether `hour` falls in `[start, end)`, wrapping past midnight when start > end.
///
/// Only a wrapping window like the default `[18, 6]` matches the old `_document.js`
/// behaviour, which always checked `hour >= start || hour < end`. A non-wrapping window
/// such as `[8, 10]` is a plain range here, and equal bounds are an empty window.
pub fn in_dark_window(hour: u8, [start, end]: [u8; 2]) -> bool {
    if start > end {
        hour >= start || hour < end
    } else {
        hour >= start && hour < end
    }
}

impl AppearanceConfig {
    pub fn resolve(&self, env: Environment<'_>) -> Theme {
        let dark = match env.stored {
            Some(stored) => DARK_STORED.contains(&stored),
            None => match self.default {
                Appearance::Dark => true,
                Appearance::Light => false,
                Appearance::Auto => env.prefers_dark || in_dark_window(env.hour, self.dark_time),
            },
        };

        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether the page goes dark with nothing stored, indexed by
    /// `[prefers_dark as usize][hour]`.
    pub fn dark_by_hour(&self) -> [[bool; 24]; 2] {
        let mut table = [[false; 24]; 2];
        for (prefers_dark, row) in [false, true].into_iter().zip(table.iter_mut()) {
            for (hour, cell) in (0u8..).zip(row.iter_mut()) {
                let env = Environment {
                    stored: None,
                    prefers_dark,
                    hour,
                };
                *cell = self.resolve(env) == Theme::Dark;
            }
        }
        table
    }

    /// Inline script run before the first paint. It puts the theme class on the root
    /// element so the page never flashes the wrong theme.
    ///
    /// The script does no deciding of its own: the stored values and the per-hour table
    /// are both rendered from [`Self::resolve`].
    pub fn pre_hydration_script(&self) -> String {
        tracing::debug!("rendering dark mode script, default appearance {}", self.default);

        // serde_json gives us correctly quoted js string literals.
        let dark_stored =
            serde_json::to_string(&DARK_STORED).unwrap_or_else(|_| "[]".to_string());
        let dark_by_hour = self
            .dark_by_hour()
            .iter()
            .map(|row| {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|dark| if *dark { "true" } else { "false" })
                    .collect();
                format!("[{}]", cells.join(","))
            })
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"(function() {{
  var stored = null;
  try {{ stored = localStorage.getItem('darkMode'); }} catch (e) {{}}
  var prefersDark = !!(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches);
  var darkStored = {dark_stored};
  var darkByHour = [{dark_by_hour}];
  var shouldBeDark = stored !== null
    ? darkStored.indexOf(stored) !== -1
    : darkByHour[prefersDark ? 1 : 0][new Date().getHours()];
  document.documentElement.classList.add(shouldBeDark ? 'dark' : 'light');
}})();"#
        )
    }
}
