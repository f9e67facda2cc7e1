use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

use crate::comparison::models::{interpolate, PromptRequest};
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, DEFAULT_MODEL};
use crate::state::AppState;

/// GET /
pub async fn handle_greeting() -> &'static str {
    "Hello, this is the root of the ChatGPT server."
}

/// POST /
/// Forwards the message as a single system prompt and returns the first choice.
pub async fn handle_prompt(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    let content = interpolate(request.message.as_ref());

    let choice = state
        .llm
        .complete(vec![ChatMessage::system(content)], DEFAULT_MODEL)
        .await?;

    Ok(Json(json!({ "completion": choice })))
}
