//! Scheduling policy configuration.

use serde::{Deserialize, Serialize};

use application::SchedulingPolicy;
use domain::{BusinessHours, DomainError};

/// Scheduling policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// First bookable hour of the day (UTC)
    #[serde(default = "default_start_hour")]
    pub business_start_hour: u32,

    /// End of the bookable day, exclusive (UTC)
    #[serde(default = "default_end_hour")]
    pub business_end_hour: u32,

    /// Minimum length of an offered free slot
    #[serde(default = "default_min_slot_minutes")]
    pub min_slot_minutes: i64,

    /// Summary used for booked events
    #[serde(default = "default_event_summary")]
    pub event_summary: String,
}

const fn default_start_hour() -> u32 {
    domain::DEFAULT_START_HOUR
}

const fn default_end_hour() -> u32 {
    domain::DEFAULT_END_HOUR
}

const fn default_min_slot_minutes() -> i64 {
    application::DEFAULT_MIN_SLOT_MINUTES
}

fn default_event_summary() -> String {
    "Meeting with AI Assistant".to_string()
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            business_start_hour: default_start_hour(),
            business_end_hour: default_end_hour(),
            min_slot_minutes: default_min_slot_minutes(),
            event_summary: default_event_summary(),
        }
    }
}

impl SchedulingConfig {
    /// Validate the configured hours into a business-hours policy
    pub fn business_hours(&self) -> Result<BusinessHours, DomainError> {
        BusinessHours::new(self.business_start_hour, self.business_end_hour)
    }

    /// Convert into the application layer's scheduling policy
    pub fn to_policy(&self) -> Result<SchedulingPolicy, DomainError> {
        Ok(SchedulingPolicy {
            business_hours: self.business_hours()?,
            min_slot_minutes: self.min_slot_minutes,
            event_summary: self.event_summary.clone(),
        })
    }
}
