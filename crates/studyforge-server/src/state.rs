//! Shared application state.

use parking_lot::RwLock;
use studyforge_core::StudyForgeConfig;
use studyforge_llm::LlmConfig;
use studyforge_nlp::Pipeline;
use studyforge_store::NoteStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: StudyForgeConfig,
    pub store: NoteStore,
    pub pipeline: Pipeline,
    pub llm_config: RwLock<LlmConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: StudyForgeConfig, store: NoteStore, pipeline: Pipeline) -> Self {
        let llm_config = LlmConfig::load(&config.data_paths.llm_config_file);

        Self {
            config,
            store,
            pipeline,
            llm_config: RwLock::new(llm_config),
            http: reqwest::Client::new(),
        }
    }
}
