//! Deterministic NLP extraction and quiz-synthesis pipeline.
//!
//! Takes free-form study text and derives an extractive summary, key
//! points, fill-in-the-blank quiz items, and multiple-choice questions
//! with domain-aware distractors. No I/O, no model downloads: sentence
//! segmentation, keyword ranking, and distractor pools are all built
//! from heuristics and fixed vocabulary tables loaded once per process.

pub mod annotate;
pub mod blank;
pub mod domain;
pub mod keywords;
pub mod mcq;
pub mod pipeline;
pub mod segment;
pub mod types;

pub use annotate::{Annotator, HeuristicAnnotator, PosTag, Token};
pub use pipeline::Pipeline;
pub use segment::{default_segmenter, SentenceSegmenter};
pub use types::{ArtifactBundle, FillBlankItem, McqItem};
