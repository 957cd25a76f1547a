//! LLM delegation path.
//!
//! An alternative artifact-generation strategy: forward the raw text to
//! an OpenAI-compatible chat-completions endpoint and parse its JSON
//! reply into an [`ArtifactBundle`]. Any failure surfaces as an error so
//! the caller can fall back to the local pipeline.

pub mod client;
pub mod config;

pub use client::generate_bundle;
pub use config::LlmConfig;
