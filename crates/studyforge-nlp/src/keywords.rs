//! Keyword salience ranking.
//!
//! Candidate content words are noun/proper-noun lemmas, alphabetic,
//! non-stop, at least 4 characters. Ranking is frequency-first with
//! lemma length as the tie-break (longer terms are usually more
//! specific). A second extraction keeps first-occurrence order instead,
//! used as a distractor source pool.

use std::collections::HashMap;

use crate::annotate::{Annotator, PosTag, Token};

/// Top-k used when feeding the quiz generators.
pub const QUIZ_TOP_K: usize = 30;
/// Cap on the first-occurrence document-noun pool.
pub const NOUN_POOL_LIMIT: usize = 30;

fn qualifies(token: &Token) -> bool {
    token.is_alpha
        && !token.is_stop
        && matches!(token.pos, PosTag::Noun | PosTag::ProperNoun)
        && token.lemma.len() >= 4
}

/// Top `top_k` lemmas ranked by (frequency, lemma length) descending.
///
/// The sort is stable over first-occurrence order, so full ties resolve
/// deterministically by position in the text.
pub fn ranked_keywords(annotator: &dyn Annotator, text: &str, top_k: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in annotator.annotate(text) {
        if !qualifies(&token) {
            continue;
        }
        let entry = counts.entry(token.lemma.clone()).or_insert(0);
        if *entry == 0 {
            order.push(token.lemma);
        }
        *entry += 1;
    }

    order.sort_by(|a, b| {
        counts[b]
            .cmp(&counts[a])
            .then_with(|| b.len().cmp(&a.len()))
    });
    order.truncate(top_k);
    order
}

/// Qualifying noun lemmas in first-occurrence order, deduplicated,
/// capped at `limit`.
pub fn document_nouns(annotator: &dyn Annotator, text: &str, limit: usize) -> Vec<String> {
    let mut seen: HashMap<String, ()> = HashMap::new();
    let mut nouns = Vec::new();

    for token in annotator.annotate(text) {
        if nouns.len() >= limit {
            break;
        }
        if !qualifies(&token) {
            continue;
        }
        if seen.insert(token.lemma.clone(), ()).is_none() {
            nouns.push(token.lemma);
        }
    }
    nouns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HeuristicAnnotator;

    #[test]
    fn test_frequency_ranks_first() {
        let annotator = HeuristicAnnotator::new();
        let text = "The chloroplast contains chlorophyll. Chlorophyll absorbs light \
                    in the chloroplast. Chlorophyll drives photosynthesis.";
        let keywords = ranked_keywords(&annotator, text, 10);
        assert_eq!(keywords[0], "chlorophyll"); // freq 3
        assert_eq!(keywords[1], "chloroplast"); // freq 2
    }

    #[test]
    fn test_length_breaks_frequency_ties() {
        let annotator = HeuristicAnnotator::new();
        // "photosynthesis" and "leaf" both appear once.
        let text = "Photosynthesis happens inside every leaf.";
        let keywords = ranked_keywords(&annotator, text, 10);
        let photo = keywords.iter().position(|k| k == "photosynthesis").unwrap();
        let leaf = keywords.iter().position(|k| k == "leaf").unwrap();
        assert!(photo < leaf);
    }

    #[test]
    fn test_short_and_stop_words_excluded() {
        let annotator = HeuristicAnnotator::new();
        let keywords = ranked_keywords(&annotator, "The sun is a star with gas.", 10);
        assert!(!keywords.iter().any(|k| k == "sun" || k == "the" || k == "gas"));
        assert!(keywords.iter().any(|k| k == "star"));
    }

    #[test]
    fn test_document_nouns_first_occurrence_order() {
        let annotator = HeuristicAnnotator::new();
        let text = "Mitochondria help cells. Cells need mitochondria and glucose.";
        let nouns = document_nouns(&annotator, text, 30);
        assert_eq!(nouns[0], "mitochondria");
        assert_eq!(nouns[1], "cell");
        assert_eq!(nouns[2], "glucose");
        // Deduplicated despite repeats.
        assert_eq!(nouns.iter().filter(|n| *n == "mitochondria").count(), 1);
    }

    #[test]
    fn test_noun_pool_cap() {
        let annotator = HeuristicAnnotator::new();
        let text = (0..40u8)
            .map(|i| {
                format!(
                    "Specimen{}{} appears here.",
                    (b'a' + i / 26) as char,
                    (b'a' + i % 26) as char
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        let nouns = document_nouns(&annotator, &text, NOUN_POOL_LIMIT);
        assert_eq!(nouns.len(), NOUN_POOL_LIMIT);
    }
}
