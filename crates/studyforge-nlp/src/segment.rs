//! Sentence segmentation with a primary rule-based detector and a regex
//! fallback. Both variants honor the same contract: sentences come back
//! trimmed, non-empty, and in source order, so downstream stages never
//! care which one ran.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence boundary detection capability.
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

// Tokens before a period that do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "fig", "al",
    "e.g", "i.e", "no", "vol",
];

/// Rule-based boundary scanner: splits on `.`, `!`, `?` followed by
/// whitespace, skipping known abbreviations and single-letter initials.
#[derive(Debug, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// The lower-cased word immediately preceding byte `i` in `text`.
    fn preceding_word(text: &str, i: usize) -> String {
        let head = &text.as_bytes()[..i];
        let start = head
            .iter()
            .rposition(|b| b.is_ascii_whitespace())
            .map(|p| p + 1)
            .unwrap_or(0);
        text[start..i].trim_end_matches('.').to_lowercase()
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let bytes = text.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if (b == b'.' || b == b'!' || b == b'?')
                && i + 1 < bytes.len()
                && bytes[i + 1].is_ascii_whitespace()
            {
                if b == b'.' {
                    let word = Self::preceding_word(text, i);
                    if ABBREVIATIONS.contains(&word.as_str())
                        || (word.len() == 1 && word.chars().all(|c| c.is_alphabetic()))
                    {
                        continue;
                    }
                }
                let s = text[start..=i].trim();
                if !s.is_empty() {
                    sentences.push(s.to_string());
                }
                start = i + 1;
            }
        }
        let s = text[start..].trim();
        if !s.is_empty() {
            sentences.push(s.to_string());
        }
        sentences
    }
}

static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Regex fallback: split on runs of `.`, `!`, `?` followed by whitespace.
#[derive(Debug, Default)]
pub struct RegexSegmenter;

impl SentenceSegmenter for RegexSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        BOUNDARY_RE
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Primary detector with the regex fallback wired behind it. The fallback
/// only runs when the primary produces nothing for non-empty input.
#[derive(Debug, Default)]
pub struct FallbackSegmenter {
    primary: RuleSegmenter,
    fallback: RegexSegmenter,
}

impl SentenceSegmenter for FallbackSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let sentences = self.primary.segment(text);
        if sentences.is_empty() && !text.trim().is_empty() {
            return self.fallback.segment(text);
        }
        sentences
    }
}

/// The segmenter used by default: rule-based with regex fallback.
pub fn default_segmenter() -> Box<dyn SentenceSegmenter> {
    Lazy::force(&BOUNDARY_RE);
    Box::new(FallbackSegmenter::default())
}
