//! Calendar port for application layer
//!
//! Defines the interface to the external calendar collaborator. Implemented
//! by adapters in the integration layer. The core only ever needs busy
//! intervals and event creation; everything else about the provider stays
//! behind this boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::TimeWindow;
use thiserror::Error;

/// Calendar port errors
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Calendar service unavailable")]
    ServiceUnavailable,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Invalid date/time from provider: {0}")]
    InvalidDateTime(String),
}

/// Calendar port trait
///
/// Adapters return intervals ordered by start time; they may be clipped or
/// unclipped, since the slot computation re-clips either way.
#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// List busy intervals between `time_min` and `time_max`
    async fn list_busy_intervals(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<TimeWindow>, CalendarError>;

    /// Create an event and return a link to it
    ///
    /// Callers invoke this only after finding the window free (zero busy
    /// intervals inside it).
    async fn create_event(
        &self,
        summary: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String, CalendarError>;

    /// Check if the calendar service is reachable
    async fn is_available(&self) -> bool;
}
