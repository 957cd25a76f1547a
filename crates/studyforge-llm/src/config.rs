//! LLM configuration persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/";

/// Stored LLM configuration (persisted to llm-config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_model() -> String {
    DEFAULT_MODEL.into()
}
fn default_temperature() -> f64 {
    0.7
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            temperature: 0.7,
            config_path: PathBuf::new(),
        }
    }
}

impl LlmConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config: LlmConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        config.config_path = config_path.to_path_buf();

        if config.api_key.is_none() {
            config.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = url;
        }

        config
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved LLM config to {}", self.config_path.display());
        Ok(())
    }

    /// Whether delegation is usable at all.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llm-config.json");

        let mut config = LlmConfig::load(&path);
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_MODEL);

        config.api_key = Some("sk-test".into());
        config.model = "gemini-2.5-pro".into();
        config.save().unwrap();

        let reloaded = LlmConfig::load(&path);
        assert_eq!(reloaded.api_key.as_deref(), Some("sk-test"));
        assert_eq!(reloaded.model, "gemini-2.5-pro");
        assert_eq!(reloaded.config_path, path);
        assert!(reloaded.is_configured());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LlmConfig::load(&dir.path().join("absent.json"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.temperature, 0.7);
    }
}
