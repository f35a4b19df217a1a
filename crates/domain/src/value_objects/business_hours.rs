//! Business hours value object
//!
//! The scheduling day is bounded by a `[start_hour, end_hour)` policy,
//! 09:00–18:00 UTC by default. Requested windows are clamped into it and
//! free slots are only ever computed inside it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::TimeWindow;

/// Default first bookable hour of the day
pub const DEFAULT_START_HOUR: u32 = 9;

/// Default end of the bookable day (exclusive)
pub const DEFAULT_END_HOUR: u32 = 18;

/// Bookable hours of a calendar day, `[start_hour, end_hour)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    start_hour: u32,
    end_hour: u32,
}

impl BusinessHours {
    /// Create a business-hours policy
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBusinessHours`] unless
    /// `start_hour < end_hour <= 24`.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, DomainError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(DomainError::InvalidBusinessHours(format!(
                "expected start < end <= 24, got [{start_hour}, {end_hour})"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// First bookable hour
    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// End of the bookable day (exclusive)
    #[must_use]
    pub const fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Clamp a requested start hour so a one-hour meeting still fits
    /// before the end of the day
    #[must_use]
    pub fn clamp_start_hour(&self, hour: u32) -> u32 {
        hour.clamp(self.start_hour, self.end_hour - 1)
    }

    /// Clamp a requested end hour to `[start + 1, end_hour]`, guaranteeing
    /// positive duration
    #[must_use]
    pub fn clamp_end_hour(&self, start_hour: u32, hour: u32) -> u32 {
        hour.clamp(start_hour + 1, self.end_hour)
    }

    /// The full bookable window of `date`
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn day_window(&self, date: NaiveDate) -> TimeWindow {
        // Both hours are validated <= 24 with start < end, so the window
        // construction cannot fail.
        TimeWindow::new(hour_on(date, self.start_hour), hour_on(date, self.end_hour)).unwrap()
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

/// The instant `date` at `hour`:00:00 UTC; hour 24 rolls into the next day
#[must_use]
pub fn hour_on(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    let date = date + chrono::Duration::days(i64::from(hour / 24));
    let time = chrono::NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or_default();
    date.and_time(time).and_utc()
}
