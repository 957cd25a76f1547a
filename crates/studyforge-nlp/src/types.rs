//! Artifact types produced by the pipeline.
//!
//! Field names match the wire contract consumed by the frontend and the
//! note store: `summary`, `key_points`, `quiz`, `mcqs`.

use serde::{Deserialize, Serialize};

/// A fill-in-the-blank quiz item: one keyword in a source sentence is
/// replaced with a blank marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankItem {
    pub question: String,
    pub answer: String,
}

/// A multiple-choice question with one correct answer and distractors.
///
/// `options` normally holds exactly 4 entries (1 correct + 3 distractors)
/// but may degrade to fewer when the source vocabulary is too small to
/// form 3 distractors even after filler fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

/// The full set of learning artifacts generated from one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub summary: String,
    pub key_points: Vec<String>,
    pub quiz: Vec<FillBlankItem>,
    pub mcqs: Vec<McqItem>,
}

impl ArtifactBundle {
    /// The empty bundle returned for degenerate (empty/whitespace) input.
    pub fn empty() -> Self {
        Self::default()
    }
}
