//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the roster can be replaced at
//! deploy time through the `LESSCHESS_ROSTER` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use lesschess::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     let roster = config.roster()?;
//!     println!("tracking {} players", roster.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::chesscom::ApiConfig;
use crate::domain::{Roster, TimeClass};
use crate::error::{ConfigError, Result};

/// Environment variable holding a comma-separated roster override.
pub const ROSTER_ENV: &str = "LESSCHESS_ROSTER";

/// Snapshot cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Freshness window in seconds, shared by every resource kind.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

const fn default_ttl_secs() -> u64 {
    10
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracked identities, in display and tie-break order.
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,

    /// Which stats sub-object feeds ratings and records.
    #[serde(default)]
    pub time_class: TimeClass,

    /// chess.com API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_roster() -> Vec<String> {
    ["pinghedm", "weo_af", "dabbledthings", "stinkoperson"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            time_class: TimeClass::default(),
            api: ApiConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// A non-empty `LESSCHESS_ROSTER` replaces the configured roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_roster_override(std::env::var(ROSTER_ENV).ok().as_deref());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Replace the roster with a comma-separated list, if one is given.
    ///
    /// Blank input leaves the configured roster alone. Entries are trimmed;
    /// empty entries are dropped.
    pub fn apply_roster_override(&mut self, raw: Option<&str>) {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return;
        };
        self.roster = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    /// The validated roster.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for blank or duplicate entries.
    pub fn roster(&self) -> Result<Roster> {
        if self.roster.is_empty() {
            return Err(ConfigError::MissingField { field: "roster" }.into());
        }
        Roster::try_new(self.roster.iter().map(String::as_str)).map_err(|err| {
            ConfigError::InvalidValue {
                field: "roster",
                reason: err.to_string(),
            }
            .into()
        })
    }

    /// Cache freshness window.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.roster()?;

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ttl_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(err) = Url::parse(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: err.to_string(),
            }
            .into());
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
