//! Infrastructure layer - Configuration
//!
//! Loads and validates the application configuration from defaults, an
//! optional `config` file, and `SLOTWISE_*` environment variables.

pub mod config;

pub use config::{AppConfig, CalendarAppConfig, Environment, SchedulingConfig, ServerConfig};
