//! Application layer - Use cases and orchestration
//!
//! Contains the pure scheduling core (time-expression resolution and
//! free-slot computation), the chat command parser, port definitions, and
//! the booking service that composes them with the calendar adapter.

pub mod command_parser;
pub mod error;
pub mod ports;
pub mod scheduling;
pub mod services;
pub mod time_parser;

pub use command_parser::CommandParser;
pub use error::ApplicationError;
pub use ports::*;
pub use scheduling::{DEFAULT_MIN_SLOT_MINUTES, compute_free_slots};
pub use services::*;
pub use time_parser::{resolve, resolve_date};
