//! Date resolution rules
//!
//! The source of a request's calendar date is decided by an ordered rule
//! table, evaluated top to bottom with first match winning:
//!
//! 1. explicit `YYYY-MM-DD` / `YYYY/MM/DD`
//! 2. weekday name (always a future occurrence, never today)
//! 3. "today" / "tomorrow"
//! 4. "next week"
//! 5. default: tomorrow
//!
//! The fallback is tomorrow rather than today so that an unparseable
//! request can never target a window that is already in the past.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Weekday names in the fixed scan order, index = days from Monday
const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// A date-resolution rule: a name for diagnostics plus an extractor
struct DateRule {
    name: &'static str,
    apply: fn(&str, NaiveDate) -> Option<NaiveDate>,
}

/// The rule table, highest precedence first
const RULES: [DateRule; 4] = [
    DateRule {
        name: "explicit_date",
        apply: explicit_date,
    },
    DateRule {
        name: "weekday",
        apply: weekday,
    },
    DateRule {
        name: "today_or_tomorrow",
        apply: today_or_tomorrow,
    },
    DateRule {
        name: "next_week",
        apply: next_week,
    },
];

fn explicit_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(build_explicit_date_pattern)
}

#[allow(clippy::unwrap_used)]
fn build_explicit_date_pattern() -> Regex {
    Regex::new(r"(\d{4})[-/](\d{2})[-/](\d{2})").unwrap()
}

/// Resolve the calendar date a request refers to
///
/// Never fails: text without any recognizable date expression resolves to
/// tomorrow.
#[must_use]
pub fn resolve_date(text: &str, now: DateTime<Utc>) -> NaiveDate {
    let lower = text.to_lowercase();
    let today = now.date_naive();

    for rule in &RULES {
        if let Some(date) = (rule.apply)(&lower, today) {
            debug!(rule = rule.name, %date, "Resolved date");
            return date;
        }
    }

    debug!("No date expression matched, defaulting to tomorrow");
    today + Duration::days(1)
}

/// Rule 1: a literal `YYYY-MM-DD` or `YYYY/MM/DD` anywhere in the text
///
/// An arithmetically impossible combination (month 13, day 32) does not
/// match and falls through to the lower-precedence rules.
fn explicit_date(lower: &str, _today: NaiveDate) -> Option<NaiveDate> {
    let caps = explicit_date_pattern().captures(lower)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Rule 2: the first weekday name found in the fixed Monday..Sunday order
///
/// A weekday always refers to a future occurrence: saying "Monday" on a
/// Monday means next Monday, never today.
fn weekday(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    let position = WEEKDAYS.iter().position(|day| lower.contains(day))?;
    let index = u32::try_from(position).ok()?;
    let mut offset = (7 + index - today.weekday().num_days_from_monday()) % 7;
    if offset == 0 {
        offset = 7;
    }
    Some(today + Duration::days(i64::from(offset)))
}

/// Rule 3: relative keywords "today" and "tomorrow"
fn today_or_tomorrow(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    if lower.contains("today") {
        Some(today)
    } else if lower.contains("tomorrow") {
        Some(today + Duration::days(1))
    } else {
        None
    }
}

/// Rule 4: "next week" means seven days out
fn next_week(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    lower
        .contains("next week")
        .then(|| today + Duration::days(7))
}
