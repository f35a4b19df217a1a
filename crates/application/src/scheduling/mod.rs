//! Free-slot computation over a bounded day window

mod free_slots;

pub use free_slots::{DEFAULT_MIN_SLOT_MINUTES, compute_free_slots};
