//! Structural signals shared by the scorer and the gap generator.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::jargon::{extract_jargon_words, DEFAULT_MAX_JARGON};
use crate::text::{safe_trim, word_count};

static EXAMPLE_CUES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(for example|e\.g\.|like|such as|imagine|say)\b").expect("valid regex")
});
static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid regex"));
static CAUSAL_CUES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(because|therefore|so that|which means|as a result)\b").expect("valid regex")
});
static VAGUE_CUES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(stuff|things|basically|just|somehow|kind of|sort of)\b").expect("valid regex")
});

/// Signals derived from one explanation, computed once per card build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationSignals {
    /// Space-separated word count after whitespace normalization.
    pub word_count: usize,
    /// Character count after whitespace normalization.
    pub char_count: usize,
    /// Whether the text names an example: a phrase cue or any digit.
    pub has_example: bool,
    /// Whether the text carries causal connectives.
    pub has_because: bool,
    /// Whether the text leans on vague filler words.
    pub vague: bool,
    /// Detected jargon words in first-seen order.
    pub jargon: Vec<String>,
}

impl ExplanationSignals {
    /// Analyzes an explanation. Pattern cues are matched against the
    /// lowercased text; jargon is extracted from the original casing.
    #[must_use]
    pub fn analyze(v1: &str) -> Self {
        let lower = v1.to_lowercase();
        Self {
            word_count: word_count(v1),
            char_count: safe_trim(v1).chars().count(),
            has_example: EXAMPLE_CUES.is_match(&lower) || ANY_DIGIT.is_match(&lower),
            has_because: CAUSAL_CUES.is_match(&lower),
            vague: VAGUE_CUES.is_match(&lower),
            jargon: extract_jargon_words(v1, DEFAULT_MAX_JARGON),
        }
    }
}
