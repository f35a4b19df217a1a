//! Time window value object
//!
//! A half-open UTC interval `[start, end)`. This is the shared currency of
//! the scheduler: requested meeting windows, busy intervals reported by the
//! calendar, and computed free slots are all `TimeWindow`s. Equality is
//! structural; windows carry no identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A half-open UTC interval `[start, end)` with the invariant `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a new time window
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimeWindow`] when `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeWindow {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Window start (inclusive)
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window end (exclusive)
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whole minutes between start and end
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Check whether two windows share any instant
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Truncate this window to lie within `bounds`
    ///
    /// Returns `None` when nothing remains after clipping (the window lies
    /// entirely outside the bounds, or degenerates to an empty interval).
    #[must_use]
    pub fn clip_to(&self, bounds: &Self) -> Option<Self> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        (start < end).then_some(Self { start, end })
    }

    /// Check whether this window lies entirely within `bounds`
    #[must_use]
    pub fn contained_in(&self, bounds: &Self) -> bool {
        self.start >= bounds.start && self.end <= bounds.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{2013}{} UTC",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
