//! Value objects - Immutable domain primitives with validation

mod business_hours;
mod time_window;

pub use business_hours::{BusinessHours, DEFAULT_END_HOUR, DEFAULT_START_HOUR, hour_on};
pub use time_window::TimeWindow;
