//! Availability handler

use axum::{Json, extract::Query, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::state::AppState;

/// Availability query parameters
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    /// Date in human language ("today", "tomorrow", "Monday",
    /// "2025-06-29"). Absent means tomorrow.
    pub date: Option<String>,
}

/// Availability response body
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    /// Free slots rendered as `HH:MM–HH:MM UTC`
    pub available_slots: Vec<String>,
    /// Human-readable summary
    pub message: String,
}

/// List free slots for the requested day
///
/// Always answers 200 with a message: an empty slot list is a valid
/// outcome, and calendar failures are reported inside the body.
#[instrument(skip(state))]
pub async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailabilityResponse> {
    let day = state
        .booking_service
        .availability_for(query.date.as_deref(), Utc::now())
        .await;

    let response = match day {
        Ok(day) if day.slots.is_empty() => AvailabilityResponse {
            available_slots: Vec::new(),
            message: format!("\u{274c} No free slots found for {}.", day.date),
        },
        Ok(day) => AvailabilityResponse {
            available_slots: day.slots.iter().map(ToString::to_string).collect(),
            message: format!("\u{2705} Free slots found for {}.", day.date),
        },
        Err(e) => {
            warn!(error = %e, "Availability request failed");
            AvailabilityResponse {
                available_slots: Vec::new(),
                message: format!("\u{274c} Error: {e}"),
            }
        },
    };

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_with_date() {
        let query: AvailabilityQuery = serde_json::from_str(r#"{"date": "tomorrow"}"#).unwrap();
        assert_eq!(query.date.as_deref(), Some("tomorrow"));
    }

    #[test]
    fn query_without_date() {
        let query: AvailabilityQuery = serde_json::from_str("{}").unwrap();
        assert!(query.date.is_none());
    }

    #[test]
    fn response_serialization() {
        let response = AvailabilityResponse {
            available_slots: vec!["09:00\u{2013}10:00 UTC".to_string()],
            message: "\u{2705} Free slots found for 2024-01-02.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("available_slots"));
        assert!(json.contains("09:00"));
        assert!(json.contains("message"));
    }

    #[test]
    fn empty_response_serialization() {
        let response = AvailabilityResponse {
            available_slots: Vec::new(),
            message: "\u{274c} No free slots found for 2024-01-02.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"available_slots\":[]"));
    }
}
