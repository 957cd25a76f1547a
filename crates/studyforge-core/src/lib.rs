//! Shared types for StudyForge: errors and configuration.

pub mod config;
pub mod error;

pub use config::{DataPaths, StudyForgeConfig};
pub use error::{Error, Result};
