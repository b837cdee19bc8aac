//! Layered configuration: built-in defaults, an optional TOML file and `WORDLENS_` environment
//! variables, in increasing order of precedence.

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::trace;
use wordlens_core::DisplayOptions;
use wordlens_core::consts::{HTTP_TIMEOUT, PROBE_TIMEOUT};

use crate::Error;

/// The prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "WORDLENS_";

/// The path of the configuration file when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "wordlens.toml";

/// Application configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// User preferences
    pub settings: Settings,
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// User preferences for lookups and how results are shown.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// The language to translate from, or `auto` to let the service detect it.
    pub source_lang: String,
    /// The language to translate to.
    pub target_lang: String,
    /// Offer audio recordings.
    pub enable_pronunciation: bool,
    /// Play the primary recording as soon as a result is shown.
    pub auto_play_audio: bool,
    /// Show phonetic transcriptions.
    pub show_phonetic: bool,
    /// Playback volume, from 0.0 to 1.0.
    pub volume: f32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Maximum duration of a single request
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Maximum duration of a single audio existence probe
    #[serde(with = "humantime_serde")]
    pub probe_timeout: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Enable OTLP export
    pub enabled: bool,
    /// Format of log lines written to stderr
    pub format: LogFormat,
}

/// The format of log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line, abbreviated output.
    #[default]
    Compact,
    /// Multi-line, human-oriented output.
    Pretty,
    /// Newline-delimited JSON objects.
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_lang: String::from(wordlens_core::google::AUTO_DETECT),
            target_lang: String::from("vi"),
            enable_pronunciation: true,
            auto_play_audio: false,
            show_phonetic: true,
            volume: 1.0,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout: HTTP_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

impl Settings {
    /// Returns the display preferences of these settings, with the volume clamped to 0.0..=1.0.
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_phonetic: self.show_phonetic,
            enable_pronunciation: self.enable_pronunciation,
            auto_play_audio: self.auto_play_audio,
            volume: self.volume.clamp(0.0, 1.0),
        }
    }
}

impl Config {
    /// Returns the figment that [`Config::load`] extracts from.
    ///
    /// A missing file at `path` is not an error.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads the configuration with the TOML file at `path` layered on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a value is malformed or has the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        let path = path.as_ref();

        trace!(?path, "loading config");

        let config: Config = Config::figment(path)
            .extract()
            .map_err(|err| Error::Config(Box::new(err)))?;

        trace!(?config, "loaded config");

        Ok(config)
    }
}
