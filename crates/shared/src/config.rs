//! Application configuration management.

use std::str::FromStr;

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Calendar configuration.
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Amount display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Calendar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA time zone used to turn timestamps into local calendar days.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl CalendarConfig {
    /// Parses the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz, AppError> {
        Tz::from_str(&self.timezone)
            .map_err(|_| AppError::Config(format!("unknown time zone: {}", self.timezone)))
    }
}

/// Amount display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Separator inserted between groups of three digits.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    /// Magnitude from which calendar cells abbreviate amounts.
    #[serde(default = "default_abbreviate_from")]
    pub abbreviate_from: Decimal,
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_abbreviate_from() -> Decimal {
    Decimal::ONE_THOUSAND
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: default_thousands_separator(),
            abbreviate_from: default_abbreviate_from(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "ledgerview=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERVIEW").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
