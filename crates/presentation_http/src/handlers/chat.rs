//! Chat handler

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use application::ApplicationError;

use crate::{error::ApiError, state::AppState};

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message
    pub user_message: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant reply
    pub response: String,
}

/// Handle a chat request
///
/// Invalid input is a client error; calendar failures are rendered into
/// the reply body as the assistant's error message.
#[instrument(skip(state, request), fields(message_len = request.user_message.len()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.user_message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let reply = match state
        .booking_service
        .handle_message(&request.user_message, Utc::now())
        .await
    {
        Ok(reply) => reply,
        Err(ApplicationError::Domain(e)) => return Err(ApiError::BadRequest(e.to_string())),
        Err(e) => {
            warn!(error = %e, "Chat request failed");
            format!("\u{274c} Error processing request: {e}")
        },
    };

    Ok(Json(ChatResponse { response: reply }))
}
