//! Artifact generation endpoint.
//!
//! Delegates to the configured LLM when one is available; any delegation
//! failure falls back to the local pipeline so the endpoint never 5xxs
//! for well-formed input.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use crate::state::AppState;
use studyforge_nlp::ArtifactBundle;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/process-text", post(process_text))
}

#[derive(Deserialize)]
struct TextInput {
    text: String,
}

async fn process_text(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> Json<ArtifactBundle> {
    let text = input.text.trim();
    if text.is_empty() {
        return Json(ArtifactBundle::empty());
    }

    let llm_config = state.llm_config.read().clone();
    if llm_config.is_configured() {
        match studyforge_llm::generate_bundle(&state.http, &llm_config, text).await {
            Ok(bundle) => return Json(bundle),
            Err(e) => {
                warn!("LLM generation failed, using local pipeline: {}", e);
            }
        }
    }

    Json(state.pipeline.generate(text))
}
