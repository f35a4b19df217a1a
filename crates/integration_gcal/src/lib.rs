//! Google Calendar integration
//!
//! A thin REST client for the Google Calendar v3 API plus the adapter that
//! exposes it to the application layer as a [`application::CalendarPort`].

pub mod adapter;
pub mod client;

pub use adapter::GoogleCalendarAdapter;
pub use client::{DEFAULT_BASE_URL, EventResource, GcalConfig, GcalError, GoogleCalendarClient};
