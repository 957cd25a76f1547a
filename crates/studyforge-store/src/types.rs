//! Note store request and response types.

use serde::{Deserialize, Serialize};

/// A fill-blank quiz row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizFill {
    pub question: String,
    pub answer: String,
}

/// One MCQ option row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    pub option_text: String,
    pub is_correct: bool,
}

/// An MCQ with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqQuestion {
    pub question: String,
    #[serde(default)]
    pub explanation: String,
    pub options: Vec<McqOption>,
}

/// Payload for saving a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
    pub original_text: String,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub quiz: Vec<QuizFill>,
    #[serde(default)]
    pub mcqs: Vec<McqQuestion>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Listing row: identifier, summary, tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteBrief {
    pub id: i64,
    pub summary: String,
    pub tags: Vec<String>,
    pub updated_at: String,
}

/// A fully hydrated note with all owned sub-artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDetail {
    pub id: i64,
    pub original_text: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub quiz: Vec<QuizFill>,
    pub mcqs: Vec<McqQuestion>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}
