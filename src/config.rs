//! Layered configuration for displaying dates.
//!
//! Sources, highest priority first:
//!
//! 1. Environment variables (`LUACH_*` prefix, `__` as section separator,
//!    e.g. `LUACH_DISPLAY__INCLUDE_YEAR=false`)
//! 2. An explicitly given file ([`Config::load_from`])
//! 3. Project-level `./luach.toml`
//! 4. User-level `~/.config/luach/config.toml`
//! 5. Built-in defaults
//!
//! ```toml
//! [display]
//! include_year = true
//! numerals = "hebrew"   # or "arabic"
//! language = "english"  # or "hebrew"
//! geresh = true
//! punctuate = true
//!
//! [logging]
//! enabled = false
//! ```

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::gematriya;
use crate::hebrew::fmt::{Language, Numerals, Style};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// An explicitly requested file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_true() -> bool {
    true
}

/// How dates are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Whether the year follows day and month.
    #[serde(default = "default_true")]
    pub include_year: bool,

    #[serde(default)]
    pub numerals: Numerals,

    /// Language of month names.
    #[serde(default)]
    pub language: Language,

    /// Punctuate Hebrew numerals with geresh/gershayim rather than ASCII
    /// quotes. Has no effect unless `punctuate` is set.
    #[serde(default = "default_true")]
    pub geresh: bool,

    #[serde(default = "default_true")]
    pub punctuate: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            include_year: true,
            numerals: Numerals::default(),
            language: Language::default(),
            geresh: true,
            punctuate: true,
        }
    }
}

impl DisplayConfig {
    /// The formatting style described by this configuration.
    pub fn style(&self) -> Style {
        Style {
            language: self.language,
            numerals: self.numerals,
            gematriya: gematriya::Options {
                geresh: self.punctuate && self.geresh,
                punctuate: self.punctuate,
                ..gematriya::Options::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log at `info` level when no verbosity is requested explicitly.
    #[serde(default)]
    pub enabled: bool,
}

impl Config {
    /// Load configuration from the default files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Like [`load`](Self::load), with `path` layered above the default
    /// files.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_owned()));
        }
        Ok(Self::figment_with(Some(path)).extract()?)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("luach.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("LUACH_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("luach").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = Config::default();
        assert!(config.display.include_year);
        assert!(config.display.geresh);
        assert!(config.display.punctuate);
        assert_eq!(Numerals::Hebrew, config.display.numerals);
        assert_eq!(Language::Hebrew, config.display.language);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn default_style_matches_formatter_default() {
        assert_eq!(Style::default(), DisplayConfig::default().style());
    }

    #[test]
    fn style_carries_punctuation() {
        let display = DisplayConfig {
            geresh: false,
            language: Language::English,
            ..DisplayConfig::default()
        };
        let style = display.style();
        assert!(!style.gematriya.geresh);
        assert!(style.gematriya.punctuate);
        assert_eq!(Language::English, style.language);
    }

    #[test]
    fn missing_explicit_file() {
        let path = Path::new("/nonexistent/luach.toml");
        assert!(matches!(
            Config::load_from(path),
            Err(ConfigError::NotFound(p)) if p == path
        ));
    }
}
