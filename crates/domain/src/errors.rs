//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Request text was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A time window violated the `start < end` invariant
    #[error("Invalid time window: start {start} is not before end {end}")]
    InvalidTimeWindow { start: String, end: String },

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Business-hours policy is malformed (e.g. start >= end)
    #[error("Invalid business hours: {0}")]
    InvalidBusinessHours(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_error_message() {
        let err = DomainError::InvalidInput("empty message".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty message");
    }

    #[test]
    fn invalid_time_window_error_message() {
        let err = DomainError::InvalidTimeWindow {
            start: "2024-01-02T14:00:00Z".to_string(),
            end: "2024-01-02T13:00:00Z".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid time window: start 2024-01-02T14:00:00Z is not before end 2024-01-02T13:00:00Z"
        );
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
    }

    #[test]
    fn invalid_business_hours_error_message() {
        let err = DomainError::InvalidBusinessHours("start 18 >= end 9".to_string());
        assert_eq!(err.to_string(), "Invalid business hours: start 18 >= end 9");
    }
}
