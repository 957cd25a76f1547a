//! Domain-aware distractor vocabulary.
//!
//! A fixed rule table, not classification: if the text mentions any
//! trigger term for a known domain, its curated vocabulary seeds the
//! MCQ distractor pool. Unknown domains get an empty pool and the MCQ
//! generator falls back to keywords extracted from the text itself.

use once_cell::sync::Lazy;

static BIOLOGY_TRIGGERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "photosynthesis", "chlorophyll", "chloroplast", "plant", "leaf", "leaves",
        "stomata", "pigment", "botany", "cellular respiration",
    ]
});

static PIGMENT_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "chlorophyll", "carotene", "xanthophyll", "anthocyanin", "phycobilin",
    ]
});

static PHOTOSYNTHESIS_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "glucose", "oxygen", "carbon dioxide", "water", "sunlight", "stomata",
        "thylakoid", "chloroplast", "calvin cycle",
    ]
});

static COMPUTING_TRIGGERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "computer", "software", "algorithm", "programming", "database", "network",
        "processor", "compiler", "operating system",
    ]
});

static COMPUTING_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "compiler", "algorithm", "protocol", "kernel", "database", "bandwidth",
        "encryption", "processor", "cache", "firmware",
    ]
});

/// Force all vocabulary tables resident. Called once at pipeline setup.
pub(crate) fn warm_tables() {
    Lazy::force(&BIOLOGY_TRIGGERS);
    Lazy::force(&PIGMENT_TERMS);
    Lazy::force(&PHOTOSYNTHESIS_TERMS);
    Lazy::force(&COMPUTING_TRIGGERS);
    Lazy::force(&COMPUTING_TERMS);
}

fn contains_any(text_lower: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| text_lower.contains(t))
}

/// Select the distractor vocabulary pool for `text`, or empty if no
/// domain trigger matches. Biology wins over computing when both match.
pub fn domain_pool(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    if contains_any(&text_lower, &BIOLOGY_TRIGGERS) {
        let mut pool: Vec<String> = Vec::new();
        for term in PIGMENT_TERMS.iter().chain(PHOTOSYNTHESIS_TERMS.iter()) {
            if !pool.iter().any(|p| p.eq_ignore_ascii_case(term)) {
                pool.push(term.to_string());
            }
        }
        return pool;
    }

    if contains_any(&text_lower, &COMPUTING_TRIGGERS) {
        return COMPUTING_TERMS.iter().map(|t| t.to_string()).collect();
    }

    Vec::new()
}
