//! Whitespace normalization and sentence splitting primitives.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses every run of Unicode whitespace to a single ASCII space and
/// trims the ends. Idempotent: re-trimming an already trimmed string is a
/// no-op.
#[must_use]
pub fn safe_trim(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Counts space-separated words after normalization. Empty or
/// whitespace-only input counts zero.
#[must_use]
pub fn word_count(s: &str) -> usize {
    let trimmed = safe_trim(s);
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split(' ').count()
    }
}

/// Splits text into rough sentences at terminal punctuation followed by
/// whitespace. The punctuation stays with its sentence; a trailing fragment
/// without terminal punctuation is its own piece. Pieces of four characters
/// or fewer are discarded.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = safe_trim(text);
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = normalized.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek() == Some(&' ') {
            chars.next();
            pieces.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| s.chars().count() > 4)
        .collect()
}
