//! Application services

mod booking_service;

pub use booking_service::{BookingService, DayAvailability, SchedulingPolicy};
