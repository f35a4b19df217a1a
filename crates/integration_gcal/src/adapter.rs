//! Calendar port adapter
//!
//! Bridges the REST client into the application layer's [`CalendarPort`]:
//! event resources become plain busy `TimeWindow`s, provider errors become
//! `CalendarError`s.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use application::ports::{CalendarError, CalendarPort};
use domain::TimeWindow;

use crate::client::{EventResource, GcalError, GoogleCalendarClient};

/// `CalendarPort` implementation backed by Google Calendar
#[derive(Debug, Clone)]
pub struct GoogleCalendarAdapter {
    client: GoogleCalendarClient,
}

impl GoogleCalendarAdapter {
    /// Wrap a configured client
    #[must_use]
    pub fn new(client: GoogleCalendarClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CalendarPort for GoogleCalendarAdapter {
    async fn list_busy_intervals(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<TimeWindow>, CalendarError> {
        let events = self
            .client
            .list_events(time_min, time_max)
            .await
            .map_err(map_error)?;

        let mut intervals: Vec<TimeWindow> =
            events.iter().filter_map(event_to_window).collect();
        // The port contract promises ascending starts regardless of what
        // the provider returned
        intervals.sort_by_key(TimeWindow::start);
        Ok(intervals)
    }

    async fn create_event(
        &self,
        summary: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String, CalendarError> {
        let event = self
            .client
            .insert_event(summary, start, end)
            .await
            .map_err(map_error)?;
        Ok(event.html_link.unwrap_or_default())
    }

    async fn is_available(&self) -> bool {
        self.client.is_available().await
    }
}

/// Convert an event resource into a busy interval
///
/// All-day events (date without dateTime) and resources with unparseable
/// or inverted times yield `None` and are skipped with a warning.
fn event_to_window(event: &EventResource) -> Option<TimeWindow> {
    let start = parse_instant(event.start.date_time.as_deref()?)?;
    let end = parse_instant(event.end.date_time.as_deref()?)?;
    match TimeWindow::new(start, end) {
        Ok(window) => Some(window),
        Err(_) => {
            warn!(event_id = ?event.id, "Skipping event with inverted times");
            None
        },
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(_) => {
            warn!(raw, "Skipping unparseable event time");
            None
        },
    }
}

/// Map client errors to port errors
fn map_error(err: GcalError) -> CalendarError {
    match err {
        GcalError::Request(e) => {
            warn!(error = %e, "Calendar request failed");
            CalendarError::ServiceUnavailable
        },
        GcalError::Api {
            code: 401 | 403, ..
        } => CalendarError::AuthenticationFailed,
        GcalError::Api { code, message } => {
            CalendarError::OperationFailed(format!("calendar API error {code}: {message}"))
        },
        GcalError::Configuration(msg) => CalendarError::OperationFailed(msg),
    }
}
