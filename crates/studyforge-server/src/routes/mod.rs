//! HTTP route handlers.

pub mod generate;
pub mod notes;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(generate::routes())
        .merge(notes::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<serde_json::Value> {
    let notes = state.store.count_notes().unwrap_or(0);
    Json(serde_json::json!({
        "status": "healthy",
        "service": "studyforge",
        "notes": notes,
    }))
}
