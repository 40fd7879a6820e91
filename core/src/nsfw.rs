//! NSFW topic heuristic shared with the calling layers.

use once_cell::sync::Lazy;
use regex::Regex;

static BANNED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(porn|xxx|nude|nudes|onlyfans|hardcore|hentai|blowjob|sex tape)\b")
        .expect("valid regex")
});

/// Lexical screen for topics the coach should refuse. Callers run this
/// before building a card; the card builder itself never filters.
#[must_use]
pub fn is_likely_nsfw(text: &str) -> bool {
    BANNED.is_match(&text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_banned_words_in_any_case() {
        assert!(is_likely_nsfw("PORN"));
        assert!(is_likely_nsfw("a sex tape story"));
    }

    #[test]
    fn matches_whole_words_only() {
        // Boundary-anchored, so embedded fragments pass.
        assert!(!is_likely_nsfw("pornography in renaissance art"));
        assert!(!is_likely_nsfw("the Essex coastline"));
    }

    #[test]
    fn ordinary_topics_pass() {
        assert!(!is_likely_nsfw("Neural networks and osmosis"));
    }
}
