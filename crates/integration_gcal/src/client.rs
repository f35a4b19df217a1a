//! Google Calendar REST client
//!
//! Talks to the Calendar v3 API with a pre-obtained OAuth bearer token.
//! The base URL is configurable so tests can point the client at a mock
//! server.

use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API errors
#[derive(Debug, Error)]
pub enum GcalError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {code} - {message}")]
    Api { code: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct GcalConfig {
    /// API base URL (overridable for tests)
    pub base_url: String,
    /// Calendar to operate on
    pub calendar_id: String,
    /// OAuth bearer token
    pub access_token: SecretString,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GcalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            calendar_id: "primary".to_string(),
            access_token: SecretString::from(String::new()),
            timeout_secs: 30,
        }
    }
}

/// Google Calendar client
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    client: Client,
    config: GcalConfig,
}

/// Event start/end time as the API represents it
///
/// Timed events carry `dateTime`; all-day events carry `date` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    fn utc(instant: DateTime<Utc>) -> Self {
        Self {
            date_time: Some(instant.to_rfc3339()),
            date: None,
            time_zone: Some("UTC".to_string()),
        }
    }
}

/// A calendar event resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
    #[serde(rename = "htmlLink", default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

/// Response for the events list endpoint
#[derive(Debug, Deserialize)]
struct EventsListResponse {
    #[serde(default)]
    items: Vec<EventResource>,
}

/// Event insert request body
#[derive(Debug, Serialize)]
struct InsertEventRequest {
    summary: String,
    start: EventTime,
    end: EventTime,
}

/// API error envelope
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: u16,
    message: String,
}

impl GoogleCalendarClient {
    /// Create a new client
    pub fn new(config: GcalConfig) -> Result<Self, GcalError> {
        if config.access_token.expose_secret().is_empty() {
            return Err(GcalError::Configuration(
                "access_token is required".to_string(),
            ));
        }
        if config.calendar_id.is_empty() {
            return Err(GcalError::Configuration(
                "calendar_id is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// The calendar this client operates on
    #[must_use]
    pub fn calendar_id(&self) -> &str {
        &self.config.calendar_id
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            self.config.base_url, self.config.calendar_id
        )
    }

    /// List events overlapping `[time_min, time_max]`, expanded to single
    /// instances and ordered by start time
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<EventResource>, GcalError> {
        let response = self
            .client
            .get(self.events_url())
            .bearer_auth(self.config.access_token.expose_secret())
            .query(&[
                ("timeMin", time_min.to_rfc3339()),
                ("timeMax", time_max.to_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            let list: EventsListResponse = response.json().await?;
            debug!(count = list.items.len(), "Listed calendar events");
            Ok(list.items)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Insert a timed event and return the created resource
    #[instrument(skip(self, summary))]
    pub async fn insert_event(
        &self,
        summary: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<EventResource, GcalError> {
        let request = InsertEventRequest {
            summary: summary.to_string(),
            start: EventTime::utc(start),
            end: EventTime::utc(end),
        };

        let response = self
            .client
            .post(self.events_url())
            .bearer_auth(self.config.access_token.expose_secret())
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let event: EventResource = response.json().await?;
            debug!(event_id = ?event.id, "Inserted calendar event");
            Ok(event)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Check if the calendar API is reachable with the configured
    /// credentials
    ///
    /// Reads the calendar metadata, a cheap side-effect-free probe.
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        self.client
            .get(format!(
                "{}/calendars/{}",
                self.config.base_url, self.config.calendar_id
            ))
            .bearer_auth(self.config.access_token.expose_secret())
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }

    async fn api_error(response: reqwest::Response) -> GcalError {
        let status = response.status().as_u16();
        match response.json::<ApiErrorResponse>().await {
            Ok(body) => GcalError::Api {
                code: body.error.code,
                message: body.error.message,
            },
            Err(_) => GcalError::Api {
                code: status,
                message: "unparseable error response".to_string(),
            },
        }
    }
}
