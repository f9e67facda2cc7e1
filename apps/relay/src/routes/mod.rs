pub mod root;

use axum::{
    routing::{get, post},
    Router,
};

use crate::comparison::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::handle_greeting).post(root::handle_prompt))
        .route("/compare", post(handlers::handle_compare))
        .route("/api/results", get(handlers::handle_results))
        .with_state(state)
}
