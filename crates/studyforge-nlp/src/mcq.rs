//! Multiple-choice question generation: fill-in-blank questions extended
//! with distractor synthesis, option shuffling, and explanation text.
//!
//! Distractor candidates come from three pools in priority order: the
//! domain vocabulary, the ranked keywords, and the document-noun pool.
//! A fixed filler vocabulary backstops texts too small to yield three
//! distractors of their own.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::annotate::Annotator;
use crate::blank::mask_first;
use crate::domain;
use crate::keywords::{self, NOUN_POOL_LIMIT, QUIZ_TOP_K};
use crate::segment::SentenceSegmenter;
use crate::types::McqItem;

/// Generic filler terms used when the text cannot supply 3 distractors.
pub static FILLER_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["context", "process", "system", "element", "factor", "structure"]
});

const QUESTION_PREFIX: &str = "Fill in the blank: ";

/// Assemble up to 3 distractors for `answer` from the candidate pools.
///
/// Selection is deterministic: the first 3 unique candidates in pool
/// priority order. Randomness is confined to the final option shuffle.
fn pick_distractors(
    answer: &str,
    domain_pool: &[String],
    ranked: &[String],
    nouns: &[String],
) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for term in domain_pool.iter().chain(ranked.iter()).chain(nouns.iter()) {
        if candidates.len() >= 3 {
            break;
        }
        if term.eq_ignore_ascii_case(answer) {
            continue;
        }
        if seen.insert(term.to_lowercase()) {
            candidates.push(term.clone());
        }
    }

    if candidates.len() < 3 {
        for filler in FILLER_TERMS.iter() {
            if candidates.len() >= 3 {
                break;
            }
            if filler.eq_ignore_ascii_case(answer)
                || candidates.iter().any(|c| c.eq_ignore_ascii_case(filler))
            {
                continue;
            }
            candidates.push(filler.to_string());
        }
    }

    candidates
}

/// Generate up to `n_mcq` multiple-choice questions from `text`.
///
/// Deterministic except for option order, which is shuffled with `rng`;
/// callers wanting reproducible output supply a seeded generator.
pub fn mcqs<R: Rng>(
    annotator: &dyn Annotator,
    segmenter: &dyn SentenceSegmenter,
    text: &str,
    n_mcq: usize,
    rng: &mut R,
) -> Vec<McqItem> {
    let sentences = segmenter.segment(text);
    let ranked = keywords::ranked_keywords(annotator, text, QUIZ_TOP_K);
    let nouns = keywords::document_nouns(annotator, text, NOUN_POOL_LIMIT);
    let pool = domain::domain_pool(text);

    let mut used: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for sentence in &sentences {
        if items.len() >= n_mcq {
            break;
        }
        let Some((answer, masked)) = ranked.iter().find_map(|kw| {
            if used.contains(kw.as_str()) {
                return None;
            }
            mask_first(sentence, kw).map(|masked| (kw.clone(), masked))
        }) else {
            continue;
        };
        used.insert(answer.clone());

        let mut options = pick_distractors(&answer, &pool, &ranked, &nouns);
        options.push(answer.clone());
        options.shuffle(rng);

        items.push(McqItem {
            question: format!("{}{}", QUESTION_PREFIX, masked),
            explanation: format!(
                "\"{}\" is the term used here: \"{}\"",
                answer, sentence
            ),
            options,
            answer,
        });
    }

    items
}
