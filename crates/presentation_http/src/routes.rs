//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Scheduling API (v1)
        .route("/v1/chat", post(handlers::chat::chat))
        .route("/v1/availability", get(handlers::availability::availability))
        // Attach state
        .with_state(state)
}
