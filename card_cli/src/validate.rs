//! Submission gate applied before the card engine runs.
//!
//! The engine itself accepts anything; this is the demo page's validation,
//! applied in its original order so rejection messages match.

use feymantec_core::{is_likely_nsfw, word_count};
use thiserror::Error;

/// Minimum explanation length, in words, before coaching is worthwhile.
pub const MIN_EXPLANATION_WORDS: usize = 12;

/// Reasons a submission is rejected before the card builder runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No concept given.
    #[error("Add a concept first.")]
    EmptyConcept,
    /// No explanation given.
    #[error("Add your explanation (v1) first.")]
    EmptyExplanation,
    /// Concept or explanation matched the NSFW screen.
    #[error("NSFW topics are not supported.")]
    Nsfw,
    /// Explanation too short to coach.
    #[error("Write at least a few sentences so the coach can find gaps.")]
    TooShort,
}

impl ValidationError {
    /// Stable machine-readable label, used in telemetry fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyConcept => "empty_concept",
            Self::EmptyExplanation => "empty_explanation",
            Self::Nsfw => "nsfw",
            Self::TooShort => "too_short",
        }
    }
}

/// Checks a whitespace-normalized submission pair.
pub fn validate_submission(concept: &str, v1: &str) -> Result<(), ValidationError> {
    if concept.is_empty() {
        return Err(ValidationError::EmptyConcept);
    }
    if v1.is_empty() {
        return Err(ValidationError::EmptyExplanation);
    }
    if is_likely_nsfw(&format!("{concept} {v1}")) {
        return Err(ValidationError::Nsfw);
    }
    if word_count(v1) < MIN_EXPLANATION_WORDS {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_TEXT: &str = "Water moves across a membrane toward the saltier side because of pressure.";

    #[test]
    fn accepts_a_reasonable_submission() {
        assert_eq!(validate_submission("Osmosis", OK_TEXT), Ok(()));
    }

    #[test]
    fn rejects_missing_concept_first() {
        assert_eq!(validate_submission("", ""), Err(ValidationError::EmptyConcept));
    }

    #[test]
    fn rejects_missing_explanation() {
        assert_eq!(
            validate_submission("Osmosis", ""),
            Err(ValidationError::EmptyExplanation)
        );
    }

    #[test]
    fn rejects_nsfw_topics_across_both_fields() {
        assert_eq!(
            validate_submission("porn", OK_TEXT),
            Err(ValidationError::Nsfw)
        );
        assert_eq!(
            validate_submission("Osmosis", "a nude statue story told twelve different ways here"),
            Err(ValidationError::Nsfw)
        );
    }

    #[test]
    fn rejects_explanations_under_twelve_words() {
        assert_eq!(
            validate_submission("Osmosis", "Water moves toward salt."),
            Err(ValidationError::TooShort)
        );
    }
}
