//! Pipeline orchestrator: runs normalization, segmentation, and the two
//! quiz generators in sequence to produce the final artifact bundle.

use rand::Rng;
use tracing::debug;

use crate::annotate::{self, Annotator, HeuristicAnnotator};
use crate::blank;
use crate::mcq;
use crate::segment::{default_segmenter, SentenceSegmenter};
use crate::types::ArtifactBundle;

/// Summary keeps at most this many leading sentences.
const SUMMARY_SENTENCES: usize = 3;
/// Key points keep at most this many leading sentences.
const KEY_POINT_SENTENCES: usize = 5;
/// Fill-in-blank items per bundle.
const MAX_FILL_BLANKS: usize = 3;
/// MCQ items per bundle.
const MAX_MCQS: usize = 3;

/// The study-artifact pipeline. Stateless across calls; safe to share
/// between request handlers.
pub struct Pipeline {
    annotator: Box<dyn Annotator>,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl Pipeline {
    /// Build the default pipeline. Vocabulary tables are forced resident
    /// here so a table problem surfaces at startup, not per request.
    pub fn new() -> Self {
        crate::domain::warm_tables();
        Self {
            annotator: Box::new(HeuristicAnnotator::new()),
            segmenter: default_segmenter(),
        }
    }

    /// Build a pipeline with injected capabilities (used in tests and by
    /// callers with their own annotator).
    pub fn with_parts(
        annotator: Box<dyn Annotator>,
        segmenter: Box<dyn SentenceSegmenter>,
    ) -> Self {
        crate::domain::warm_tables();
        Self { annotator, segmenter }
    }

    /// Generate the full artifact bundle for `raw` text.
    ///
    /// Never panics for any string input. Empty or whitespace-only input
    /// short-circuits to the empty bundle.
    pub fn generate(&self, raw: &str) -> ArtifactBundle {
        self.generate_with_rng(raw, &mut rand::thread_rng())
    }

    /// Like [`generate`](Self::generate) but with a caller-supplied RNG,
    /// so MCQ option order can be made reproducible.
    pub fn generate_with_rng<R: Rng>(&self, raw: &str, rng: &mut R) -> ArtifactBundle {
        let text = annotate::normalize(raw);
        if text.is_empty() {
            return ArtifactBundle::empty();
        }

        let sentences = self.segmenter.segment(&text);
        let summary = sentences
            .iter()
            .take(SUMMARY_SENTENCES)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let key_points: Vec<String> =
            sentences.iter().take(KEY_POINT_SENTENCES).cloned().collect();

        let quiz = blank::fill_blanks(
            self.annotator.as_ref(),
            self.segmenter.as_ref(),
            &text,
            MAX_FILL_BLANKS,
        );
        let mcqs = mcq::mcqs(
            self.annotator.as_ref(),
            self.segmenter.as_ref(),
            &text,
            MAX_MCQS,
            rng,
        );

        debug!(
            sentences = sentences.len(),
            quiz = quiz.len(),
            mcqs = mcqs.len(),
            "generated artifact bundle"
        );

        ArtifactBundle {
            summary,
            key_points,
            quiz,
            mcqs,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_fast_path() {
        let pipeline = Pipeline::new();
        for input in ["", "   ", "\n\t  \n"] {
            let bundle = pipeline.generate(input);
            assert_eq!(bundle, ArtifactBundle::empty());
        }
    }

    #[test]
    fn test_summary_and_key_points_are_leading_sentences() {
        let pipeline = Pipeline::new();
        let text = "One fact here. Two facts here. Three facts here. \
                    Four facts here. Five facts here. Six facts here.";
        let bundle = pipeline.generate(text);
        assert_eq!(
            bundle.summary,
            "One fact here. Two facts here. Three facts here."
        );
        assert_eq!(bundle.key_points.len(), 5);
        assert_eq!(bundle.key_points[0], "One fact here.");
        assert_eq!(bundle.key_points[4], "Five facts here.");
    }

    #[test]
    fn test_short_input_truncates_gracefully() {
        let pipeline = Pipeline::new();
        let bundle = pipeline.generate("Only one sentence about photosynthesis.");
        assert_eq!(bundle.summary, "Only one sentence about photosynthesis.");
        assert_eq!(bundle.key_points.len(), 1);
    }

    #[test]
    fn test_deterministic_fields_idempotent() {
        let pipeline = Pipeline::new();
        let text = "The chloroplast contains chlorophyll. Chlorophyll absorbs light. \
                    Plants release oxygen during photosynthesis.";
        let a = pipeline.generate(text);
        let b = pipeline.generate(text);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.key_points, b.key_points);
        assert_eq!(a.quiz, b.quiz);
        // MCQ option order may differ between runs; answers and the
        // option sets may not.
        assert_eq!(a.mcqs.len(), b.mcqs.len());
        for (x, y) in a.mcqs.iter().zip(b.mcqs.iter()) {
            assert_eq!(x.answer, y.answer);
            let mut xs = x.options.clone();
            let mut ys = y.options.clone();
            xs.sort();
            ys.sort();
            assert_eq!(xs, ys);
        }
    }

    #[test]
    fn test_never_panics_on_odd_input() {
        let pipeline = Pipeline::new();
        let inputs: Vec<String> = vec![
            "....!!??..".to_string(),
            "τὰ πάντα ῥεῖ καὶ οὐδὲν μένει".to_string(),
            "a".repeat(10_000),
            " \u{00a0} \u{2003} ".to_string(),
            "No punctuation at all just words drifting on and on".to_string(),
        ];
        for input in inputs {
            let _ = pipeline.generate(&input);
        }
    }
}
