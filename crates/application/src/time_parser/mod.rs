//! Natural language time-expression resolution
//!
//! Turns free text like "book a meeting tomorrow between 2-4pm" into a
//! concrete UTC time window. Split into two focused sub-modules:
//! - [`date_rules`]: priority-ordered rule table resolving the calendar date
//! - [`time_of_day`]: regex cascade resolving the hour window
//!
//! Both are pure functions of `(text, now)`; the reference instant is always
//! passed explicitly so resolution is deterministic and testable without
//! clock mocking. Unmatched input never errors: it degrades to defaults
//! (tomorrow, 10:00-11:00) and the resolver always produces a best-guess
//! window.

mod date_rules;
mod time_of_day;

use chrono::{DateTime, NaiveDate, Utc};
use domain::{BusinessHours, DomainError, TimeWindow, hour_on};
use tracing::debug;

pub use date_rules::resolve_date;

/// Resolve free text into a bookable window on a concrete date
///
/// The hour window is clamped into the business-hours policy, so the result
/// always lies within `[start_hour, end_hour)` and has at least one hour of
/// duration.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] for empty or whitespace-only text.
/// All other input resolves; unrecognized phrases fall back to defaults.
pub fn resolve(
    text: &str,
    now: DateTime<Utc>,
    hours: &BusinessHours,
) -> Result<TimeWindow, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidInput(
            "request text must not be empty".to_string(),
        ));
    }

    let date = resolve_date(text, now);
    let (start_hour, end_hour) = time_of_day::resolve_hours(text);

    let start_hour = hours.clamp_start_hour(start_hour);
    let end_hour = hours.clamp_end_hour(start_hour, end_hour);
    debug!(%date, start_hour, end_hour, "Resolved request window");

    TimeWindow::new(hour_on(date, start_hour), hour_on(date, end_hour))
}

/// Date-only resolution with the tomorrow fallback applied to blank input
///
/// Used by the availability endpoint, where an absent query parameter means
/// "tomorrow".
#[must_use]
pub fn resolve_date_or_default(text: Option<&str>, now: DateTime<Utc>) -> NaiveDate {
    text.map_or_else(
        || now.date_naive() + chrono::Duration::days(1),
        |t| resolve_date(t, now),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// 2024-01-01 is a Monday
    fn monday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn hours() -> BusinessHours {
        BusinessHours::default()
    }

    fn assert_window(window: &TimeWindow, start: &str, end: &str) {
        assert_eq!(window.start().to_rfc3339(), start);
        assert_eq!(window.end().to_rfc3339(), end);
    }

    #[test]
    fn range_with_pm_on_tomorrow() {
        let window = resolve("let's meet between 2-4pm tomorrow", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-01-02T14:00:00+00:00",
            "2024-01-02T16:00:00+00:00",
        );
    }

    #[test]
    fn default_window_is_ten_to_eleven_tomorrow() {
        let window = resolve("book me a meeting", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-01-02T10:00:00+00:00",
            "2024-01-02T11:00:00+00:00",
        );
    }

    #[test]
    fn early_start_clamps_to_business_open() {
        let window = resolve("meeting at 7am today", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-01-01T09:00:00+00:00",
            "2024-01-01T10:00:00+00:00",
        );
    }

    #[test]
    fn late_start_clamps_to_last_bookable_hour() {
        let window = resolve("meeting at 8pm today", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-01-01T17:00:00+00:00",
            "2024-01-01T18:00:00+00:00",
        );
    }

    #[test]
    fn single_time_with_minutes_keeps_hour_granularity() {
        let window = resolve("tomorrow at 3:30pm", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-01-02T15:00:00+00:00",
            "2024-01-02T16:00:00+00:00",
        );
    }

    #[test]
    fn weekday_on_same_weekday_is_next_week() {
        let window = resolve("monday at 10am", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-01-08T10:00:00+00:00",
            "2024-01-08T11:00:00+00:00",
        );
    }

    #[test]
    fn explicit_date_overrides_keywords() {
        let window = resolve("tomorrow 2024-02-20 at 11am", monday_noon(), &hours()).unwrap();
        assert_window(
            &window,
            "2024-02-20T11:00:00+00:00",
            "2024-02-20T12:00:00+00:00",
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            resolve("", monday_noon(), &hours()),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve("   ", monday_noon(), &hours()),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn resolve_is_deterministic_for_fixed_now() {
        let a = resolve("friday between 9-11am", monday_noon(), &hours()).unwrap();
        let b = resolve("friday between 9-11am", monday_noon(), &hours()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_date_text_defaults_to_tomorrow() {
        let date = resolve_date_or_default(None, monday_noon());
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn present_date_text_is_resolved() {
        let date = resolve_date_or_default(Some("today"), monday_noon());
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
