//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `calendar`: Google Calendar credentials and endpoint
//! - `scheduling`: business hours and slot policy

mod calendar;
mod scheduling;
mod server;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use calendar::CalendarAppConfig;
pub use scheduling::SchedulingConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed validation, verbose errors
    #[default]
    Development,
    /// Production environment - strict validation
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Calendar backend configuration
    #[serde(default)]
    pub calendar: CalendarAppConfig,

    /// Scheduling policy configuration
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let builder = ::config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("calendar.calendar_id", "primary")?
            // Load from file if exists
            .add_source(::config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SLOTWISE_SERVER_PORT)
            .add_source(
                ::config::Environment::with_prefix("SLOTWISE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
