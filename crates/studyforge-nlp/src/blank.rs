//! Fill-in-the-blank generation: pair sentences with the keywords they
//! contain, mask the keyword, one use per keyword.

use std::collections::HashSet;

use regex::Regex;

use crate::annotate::Annotator;
use crate::keywords::{self, QUIZ_TOP_K};
use crate::segment::SentenceSegmenter;
use crate::types::FillBlankItem;

/// Marker substituted for the masked keyword.
pub const BLANK_MARKER: &str = "_____";

/// Whole-word matcher for a keyword, case-insensitive, tolerating a
/// trailing "s" (heuristic plural handling, nothing more).
pub(crate) fn keyword_regex(keyword: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}s?\b", regex::escape(keyword))).ok()
}

/// Mask the first occurrence of `keyword` in `sentence`, or None if the
/// keyword does not occur as a whole word.
pub(crate) fn mask_first(sentence: &str, keyword: &str) -> Option<String> {
    let re = keyword_regex(keyword)?;
    if !re.is_match(sentence) {
        return None;
    }
    Some(re.replace(sentence, BLANK_MARKER).into_owned())
}

/// Generate up to `max_questions` fill-in-the-blank items.
///
/// Sentences are visited in order; each takes the highest-ranked keyword
/// it contains that has not been used yet. Sentences matching no unused
/// keyword are skipped.
pub fn fill_blanks(
    annotator: &dyn Annotator,
    segmenter: &dyn SentenceSegmenter,
    text: &str,
    max_questions: usize,
) -> Vec<FillBlankItem> {
    let sentences = segmenter.segment(text);
    let keywords = keywords::ranked_keywords(annotator, text, QUIZ_TOP_K);

    let mut used: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for sentence in &sentences {
        if items.len() >= max_questions {
            break;
        }
        let Some((keyword, question)) = keywords.iter().find_map(|kw| {
            if used.contains(kw.as_str()) {
                return None;
            }
            mask_first(sentence, kw).map(|masked| (kw.clone(), masked))
        }) else {
            continue;
        };

        used.insert(keyword.clone());
        items.push(FillBlankItem {
            question,
            answer: keyword,
        });
    }

    items
}
