//! Time-of-day resolution
//!
//! Extracts an hour window from request text via a regex cascade, tried in
//! order of specificity:
//!
//! 1. a range: `between 2-4pm`, `between 9 - 11`
//! 2. a clock time: `3:30pm` (minutes are parsed but discarded; slot
//!    boundaries are hour-granular)
//! 3. a bare hour: `9am`, `4 pm`
//!
//! No match leaves the default `[10, 11)` window standing. The returned
//! hours are raw; the caller clamps them into business hours.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Default hour window when the text names no time
pub const DEFAULT_START_HOUR: u32 = 10;

/// End of the default hour window
pub const DEFAULT_END_HOUR: u32 = 11;

/// Compiled patterns for time-of-day expressions
struct TimePatterns {
    /// `between 2-4pm`, `between 10 – 12` (hyphen or en dash)
    range: Regex,
    /// `3:30pm`, `11:15 am`
    clock: Regex,
    /// `9am`, `4 pm`
    bare: Regex,
}

impl TimePatterns {
    #[allow(clippy::unwrap_used)]
    fn new() -> Self {
        Self {
            range: Regex::new(r"between\s+(\d{1,2})\s*[-\u{2013}]\s*(\d{1,2})\s*(am|pm)?").unwrap(),
            clock: Regex::new(r"(\d{1,2}):(\d{2})\s*(am|pm)").unwrap(),
            bare: Regex::new(r"(\d{1,2})\s*(am|pm)").unwrap(),
        }
    }
}

fn patterns() -> &'static TimePatterns {
    static PATTERNS: OnceLock<TimePatterns> = OnceLock::new();
    PATTERNS.get_or_init(TimePatterns::new)
}

/// Resolve the `(start_hour, end_hour)` pair a request asks for
///
/// Hours are returned unclamped; impossible values (e.g. `between 20-22`)
/// are the clamp's problem, not ours.
#[must_use]
pub fn resolve_hours(text: &str) -> (u32, u32) {
    let lower = text.to_lowercase();
    let patterns = patterns();

    if let Some(caps) = patterns.range.captures(&lower) {
        let start = parse_hour(&caps[1]);
        let end = parse_hour(&caps[2]);
        let suffix = caps.get(3).map(|m| m.as_str());
        // A trailing "pm" shifts both bounds independently
        let start = shift_for_suffix(start, suffix);
        let end = shift_for_suffix(end, suffix);
        debug!(start, end, "Matched hour range");
        return (start, end);
    }

    if let Some(caps) = patterns.clock.captures(&lower) {
        let hour = shift_for_suffix(parse_hour(&caps[1]), Some(&caps[3]));
        debug!(hour, minutes = &caps[2], "Matched clock time, using hour only");
        return (hour, hour + 1);
    }

    if let Some(caps) = patterns.bare.captures(&lower) {
        let hour = shift_for_suffix(parse_hour(&caps[1]), Some(&caps[2]));
        debug!(hour, "Matched bare hour");
        return (hour, hour + 1);
    }

    (DEFAULT_START_HOUR, DEFAULT_END_HOUR)
}

/// Parse a captured one- or two-digit hour
fn parse_hour(capture: &str) -> u32 {
    // The pattern only admits \d{1,2}, which always fits u32
    capture.parse().unwrap_or(DEFAULT_START_HOUR)
}

/// Apply the 12-hour clock shift: a "pm" suffix moves hours below 12
/// into the afternoon; "am" and absent suffixes leave the hour as-is
fn shift_for_suffix(hour: u32, suffix: Option<&str>) -> u32 {
    if suffix == Some("pm") && hour < 12 {
        hour + 12
    } else {
        hour
    }
}
