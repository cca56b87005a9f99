//! Axum route handler for the chat endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /chat
///
/// Forwards the message to the agent executor and returns its final text.
/// A missing, empty, or unparseable message is a 400 without ever touching
/// the agent; any agent failure is logged and collapsed into a generic 500.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Option<Json<ChatRequest>>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = body.and_then(|Json(b)| b.message).unwrap_or_default();

    if message.trim().is_empty() {
        return Err(AppError::Validation("Missing input message".to_string()));
    }

    let response = state.agent.invoke(&message).await?;

    Ok(Json(ChatResponse { response }))
}
