//! Axum route handlers for the comparison API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

use crate::comparison::models::{ComparisonRequest, ComparisonResult};
use crate::comparison::prompts::build_comparison_prompt;
use crate::comparison::rating::classify_ratings;
use crate::comparison::store::persist_comparison;
use crate::comparison::validation::{has_required_shape, is_parsable_json};
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::models::record::StoredRecord;
use crate::state::AppState;

/// POST /compare
///
/// Asks the model to judge three answers, labels its ratings, stores the
/// outcome and echoes the model's JSON back with `result` attached.
pub async fn handle_compare(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    let prompt = build_comparison_prompt(&request.message, &request.model);
    let choice = state
        .llm
        .complete(vec![ChatMessage::system(prompt)], &request.model)
        .await?;

    let raw = choice.message.content;
    if !is_parsable_json(&raw) {
        return Err(AppError::MalformedCompletion(
            "Incomplete JSON response".to_string(),
        ));
    }
    let mut response: Value = serde_json::from_str(&raw)
        .map_err(|e| AppError::MalformedCompletion(e.to_string()))?;

    if !has_required_shape(&response) {
        return Err(AppError::MalformedCompletion(
            "Invalid response structure".to_string(),
        ));
    }
    let comparison = ComparisonResult::from_value(&response)?;

    let verdict = classify_ratings(comparison.ratings());
    if let (Some(verdict), Some(obj)) = (verdict, response.as_object_mut()) {
        obj.insert("result".to_string(), json!(verdict));
    }

    let record = StoredRecord::from_comparison(&comparison, verdict);
    persist_comparison(state.store.as_ref(), &record).await;

    Ok(Json(json!({ "completion": response })))
}

/// GET /api/results
///
/// Returns every stored comparison row.
pub async fn handle_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredRecord>>, AppError> {
    let records = state.store.fetch_all().await?;
    Ok(Json(records))
}
