//! StudyForge: study-notes generation and storage server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use studyforge_server::{build_router, AppState};

fn resolve_data_dir() -> PathBuf {
    std::env::var("STUDYFORGE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = studyforge_core::StudyForgeConfig::from_env(&data_dir)?;
    let port = config.port;

    let store = studyforge_store::NoteStore::open(&config.data_paths.db)
        .map_err(|e| anyhow::anyhow!("Failed to open note store: {}", e))?;

    // The pipeline and its vocabulary tables are process-wide, read-only
    // resources; building them here means a problem aborts startup
    // instead of failing individual requests.
    let pipeline = studyforge_nlp::Pipeline::new();

    let state = Arc::new(AppState::new(config, store, pipeline));

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("StudyForge server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
