//! Lexical jargon detection.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::safe_trim;

/// Default cap on the number of jargon words returned.
pub const DEFAULT_MAX_JARGON: usize = 8;

static EDGE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^A-Za-z0-9]+|[^A-Za-z0-9]+$").expect("valid regex"));
static ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2,}$").expect("valid regex"));
static TWO_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z].*[A-Z]").expect("valid regex"));

/// Flags tokens that look like unexplained terminology: long words,
/// acronyms, and CamelCase identifiers. Leading/trailing punctuation is
/// stripped before classification, duplicates are dropped, and first-seen
/// order is preserved up to `max` entries.
#[must_use]
pub fn extract_jargon_words(text: &str, max: usize) -> Vec<String> {
    let mut jargon: IndexSet<String> = IndexSet::new();
    for word in safe_trim(text).split(' ').filter(|w| !w.is_empty()) {
        let clean = EDGE_PUNCT.replace_all(word, "").into_owned();
        if clean.is_empty() {
            continue;
        }
        if clean.chars().count() >= 12 || ALL_CAPS.is_match(&clean) || TWO_CAPS.is_match(&clean) {
            jargon.insert(clean);
        }
    }
    jargon.into_iter().take(max).collect()
}
