//! Note CRUD routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::state::AppState;
use studyforge_store::NewNote;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notes/save", post(save_note))
        .route("/notes", get(list_notes))
        .route("/notes/{id}", get(get_note).delete(delete_note))
}

async fn save_note(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewNote>,
) -> impl IntoResponse {
    match state.store.save_note(&payload) {
        Ok(detail) => (StatusCode::CREATED, Json(serde_json::json!(detail))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": format!("Error saving note: {}", e) })),
        ),
    }
}

async fn list_notes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.list_notes() {
        Ok(briefs) => (StatusCode::OK, Json(serde_json::json!(briefs))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get_note(id) {
        Ok(Some(detail)) => (StatusCode::OK, Json(serde_json::json!(detail))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Note not found" })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.delete_note(id) {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "deleted", "id": id })),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Note not found" })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}
