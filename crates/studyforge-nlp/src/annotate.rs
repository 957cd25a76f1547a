//! Linguistic annotation: tokenization, part-of-speech tagging, and
//! lemmatization behind a trait so the pipeline stays agnostic to the
//! implementation.
//!
//! The shipped annotator is heuristic: a fixed stop-word table,
//! capitalization-based proper-noun detection, and suffix rules limited
//! to noun singularization. Lemmas stay within a trailing-s edit of the
//! surface form so downstream word-boundary matching can recover them.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Normalize raw input: collapse whitespace runs to a single space, trim.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Coarse part-of-speech classes the pipeline cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Other,
}

/// A single annotated token.
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface form as it appears in the text.
    pub text: String,
    /// Lower-cased lemma (nouns singularized).
    pub lemma: String,
    pub pos: PosTag,
    pub is_alpha: bool,
    pub is_stop: bool,
}

/// Annotation capability consumed by the extraction stages.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<Token>;
}

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
        "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
        "below", "between", "both", "but", "by", "can", "could", "did", "do", "does",
        "doing", "down", "during", "each", "every", "few", "for", "from", "further", "had",
        "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
        "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me",
        "might", "more", "most", "must", "my", "no", "nor", "not", "now", "of", "off",
        "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
        "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
        "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
        "through", "to", "too", "under", "until", "up", "upon", "us", "very", "was",
        "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
        "will", "with", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

// Frequent verb/adjective lemmas that survive the stop-word filter but
// should never rank as content nouns.
static NON_NOUN_LEMMAS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "absorb", "allow", "become", "begin", "build", "call", "carry", "cause",
        "change", "come", "contain", "convert", "create", "describe", "develop",
        "explain", "find", "follow", "form", "give", "grow", "happen", "help",
        "hold", "include", "involve", "keep", "know", "learn", "live", "look",
        "make", "mean", "move", "need", "occur", "perform", "produce", "provide",
        "release", "remain", "require", "seem", "show", "store", "take", "turn",
        "understand", "use", "work", "write",
        "able", "common", "different", "early", "general", "high", "important",
        "large", "long", "main", "many", "much", "new", "several", "small", "various",
    ]
    .into_iter()
    .collect()
});

/// Singularize a lower-cased word using trailing-s family rules only.
///
/// Deliberately not a full stemmer: the result must stay recoverable from
/// the surface form by a word-boundary match with optional trailing "s".
fn singularize(word: &str) -> String {
    let n = word.len();
    if n <= 3 || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if n > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..n - 3]);
    }
    // Lexical -ves plurals only; "drives" and friends fall through to
    // the plain -s rule.
    const VES_PLURALS: &[&str] = &[
        "leaves", "wolves", "knives", "shelves", "halves", "calves", "loaves",
        "scarves", "thieves", "hooves", "lives", "selves",
    ];
    if VES_PLURALS.contains(&word) {
        return format!("{}f", &word[..n - 3]);
    }
    for suffix in ["ches", "shes", "xes", "zes", "ses", "oes"] {
        if n > suffix.len() + 1 && word.ends_with(suffix) {
            return word[..n - 2].to_string();
        }
    }
    if word.ends_with('s') {
        return word[..n - 1].to_string();
    }
    word.to_string()
}

/// Heuristic annotator backed by static vocabulary tables.
#[derive(Debug, Default)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    pub fn new() -> Self {
        // Force the vocabulary tables so they are resident before the
        // first request.
        Lazy::force(&STOP_WORDS);
        Lazy::force(&NON_NOUN_LEMMAS);
        Self
    }
}

impl Annotator for HeuristicAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut sentence_start = true;
        let mut token_starts_sentence = true;

        fn flush(current: &mut String, starts_sentence: bool, out: &mut Vec<Token>) {
            if current.is_empty() {
                return;
            }
            let text = std::mem::take(current);
            let is_alpha = text.chars().all(|c| c.is_alphabetic());
            let lower = text.to_lowercase();
            let is_stop = STOP_WORDS.contains(lower.as_str());
            let lemma = if is_alpha { singularize(&lower) } else { lower };

            let pos = if !is_alpha || is_stop {
                PosTag::Other
            } else if !starts_sentence
                && text.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
            {
                PosTag::ProperNoun
            } else if text.ends_with("ly") || NON_NOUN_LEMMAS.contains(lemma.as_str()) {
                PosTag::Other
            } else {
                PosTag::Noun
            };

            out.push(Token {
                text,
                lemma,
                pos,
                is_alpha,
                is_stop,
            });
        }

        for ch in text.chars() {
            if ch.is_alphanumeric() {
                if current.is_empty() {
                    token_starts_sentence = sentence_start;
                    sentence_start = false;
                }
                current.push(ch);
            } else {
                flush(&mut current, token_starts_sentence, &mut tokens);
                if matches!(ch, '.' | '!' | '?') {
                    sentence_start = true;
                }
            }
        }
        flush(&mut current, token_starts_sentence, &mut tokens);

        tokens
    }
}
