//! Ports - Interfaces implemented by adapters outside the application core

mod calendar_port;

pub use calendar_port::{CalendarError, CalendarPort};
