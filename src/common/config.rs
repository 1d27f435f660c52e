use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::Appearance;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("falling back to default config: {}", e);
        Config::default()
    });
    Arc::new(config)
});

/// Shown by the welcome cover when `cover.welcome_text` is missing or blank.
pub const DEFAULT_WELCOME_TEXT: &str = "欢迎来到我们的网站！";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid url for `{field}`: {source}")]
    InvalidUrl {
        field: &'static str,
        source: http::uri::InvalidUri,
    },
    #[error("dark time hours must be below 24, got {0:?}")]
    InvalidDarkTime([u8; 2]),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub cover: CoverConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Loads the config file.
    ///
    /// The frontend can't reach the file system, so there the config is packaged into the
    /// binary with include_str. `build.rs` makes sure the file exists, an empty file gives
    /// the default config.
    ///
    /// The server reads it from disk, writing out the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(feature = "server"))]
        let config_str = include_str!("../../config.toml").to_string();
        #[cfg(feature = "server")]
        let config_str = {
            let config_path = std::path::PathBuf::from("config.toml");
            if !config_path.exists() {
                let s: String = toml::to_string(&Self::default())?;
                std::fs::write(&config_path, s.as_bytes())?;
            }
            std::fs::read_to_string(&config_path)?
        };

        Self::parse(&config_str)
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.site.font_awesome {
            url.parse::<http::Uri>()
                .map_err(|source| ConfigError::InvalidUrl {
                    field: "site.font_awesome",
                    source,
                })?;
        }

        let [start, end] = self.appearance.dark_time;
        if start > 23 || end > 23 {
            return Err(ConfigError::InvalidDarkTime(self.appearance.dark_time));
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Font Awesome stylesheet, preloaded by the html shell when set.
    #[serde(default)]
    pub font_awesome: Option<String>,
}

fn default_title() -> String {
    "QWER".to_string()
}

fn default_lang() -> String {
    "zh-CN".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang: default_lang(),
            font_awesome: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CoverConfig {
    #[serde(default)]
    pub welcome_text: Option<String>,
    #[serde(default)]
    pub background: BackgroundMedia,
    #[serde(default)]
    pub timings: CoverTimings,
}

impl CoverConfig {
    pub fn welcome_text(&self) -> &str {
        match self.welcome_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => DEFAULT_WELCOME_TEXT,
        }
    }
}

/// What sits behind the welcome text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackgroundMedia {
    Image {
        src: String,
    },
    /// Autoplaying, looped, muted and inline.
    Video {
        src: String,
        #[serde(default)]
        poster: Option<String>,
    },
}

impl Default for BackgroundMedia {
    fn default() -> Self {
        Self::Image {
            src: "/images/ark-image-generate.jpeg".to_string(),
        }
    }
}

/// Delays driving the welcome cover, all in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverTimings {
    /// Interval between two revealed characters.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Lifetime of a ripple spawned by the dismissal click.
    #[serde(default = "default_ripple_millis")]
    pub ripple_millis: u64,
    /// Length of the opacity transition once dismissal starts.
    #[serde(default = "default_fade_millis")]
    pub fade_millis: u64,
    /// From the dismissal click until the cover leaves the tree.
    #[serde(default = "default_hide_delay_millis")]
    pub hide_delay_millis: u64,
    /// From hiding until the owner is notified.
    #[serde(default = "default_finish_delay_millis")]
    pub finish_delay_millis: u64,
}

fn default_tick_millis() -> u64 {
    120
}

fn default_ripple_millis() -> u64 {
    1000
}

fn default_fade_millis() -> u64 {
    600
}

fn default_hide_delay_millis() -> u64 {
    1200
}

fn default_finish_delay_millis() -> u64 {
    600
}

impl CoverTimings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Default for CoverTimings {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            ripple_millis: default_ripple_millis(),
            fade_millis: default_fade_millis(),
            hide_delay_millis: default_hide_delay_millis(),
            finish_delay_millis: default_finish_delay_millis(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub default: Appearance,
    /// Start and end hour of the dark window used by [`Appearance::Auto`].
    ///
    /// `[start, end)`, wrapping past midnight only when start > end. See
    /// [`super::in_dark_window`] for how this differs from the old site script.
    #[serde(default = "default_dark_time")]
    pub dark_time: [u8; 2],
}

fn default_dark_time() -> [u8; 2] {
    [18, 6]
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default: Appearance::default(),
            dark_time: default_dark_time(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    /// Directory holding the bundled frontend and the site's static assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_static_dir() -> String {
    "dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            static_dir: default_static_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cover.timings.tick_millis, 120);
        assert_eq!(config.cover.timings.hide_delay_millis, 1200);
        assert_eq!(config.cover.timings.finish_delay_millis, 600);
        assert_eq!(config.appearance.dark_time, [18, 6]);
    }

    #[test]
    fn test_missing_welcome_text_falls_back() {
        let config = Config::parse("[cover]\n").unwrap();
        assert_eq!(config.cover.welcome_text(), DEFAULT_WELCOME_TEXT);

        let config = Config::parse("[cover]\nwelcome_text = \"   \"\n").unwrap();
        assert_eq!(config.cover.welcome_text(), DEFAULT_WELCOME_TEXT);

        let config = Config::parse("[cover]\nwelcome_text = \"hi there\"\n").unwrap();
        assert_eq!(config.cover.welcome_text(), "hi there");
    }

    #[test]
    fn test_background_variants() {
        let config = Config::parse(
            r#"
            [cover]
            background = { kind = "video", src = "/videos/bg.mp4", poster = "/p.jpg" }
            "#,
        )
        .unwrap();

        assert_eq!(
            config.cover.background,
            BackgroundMedia::Video {
                src: "/videos/bg.mp4".into(),
                poster: Some("/p.jpg".into()),
            }
        );

        let config = Config::parse(
            r#"
            [cover]
            background = { kind = "video", src = "/videos/bg.mp4" }
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.cover.background,
            BackgroundMedia::Video { poster: None, .. }
        ));
    }

    #[test]
    fn test_partial_timings() {
        let config = Config::parse("[cover.timings]\ntick_millis = 50\n").unwrap();
        assert_eq!(config.cover.timings.tick_millis, 50);
        assert_eq!(config.cover.timings.ripple_millis, 1000);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let res = Config::parse("[appearance]\ndark_time = [25, 6]\n");
        assert!(matches!(res, Err(ConfigError::InvalidDarkTime([25, 6]))));

        let res = Config::parse("[site]\nfont_awesome = \"not a url with spaces\"\n");
        assert!(matches!(res, Err(ConfigError::InvalidUrl { .. })));

        let res = Config::parse("[cover]\nbackground = { kind = \"canvas\" }\n");
        assert!(matches!(res, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_checked_in_config_parses() {
        let config = Config::parse(include_str!("../../config.toml")).unwrap();
        assert!(!config.cover.welcome_text().is_empty());
    }
}
