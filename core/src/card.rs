//! Preview card assembly.

use serde::{Deserialize, Serialize};

use crate::{
    analogy::pick_analogy,
    gaps::build_gaps,
    quiz::{build_quiz, QuizItem},
    score::clarity_score,
    signals::ExplanationSignals,
    simple::build_simple_version,
    text::safe_trim,
};

/// Immutable coaching card derived from a `(concept, explanation)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewCard {
    /// Caller-supplied topic name, used verbatim in templated text.
    pub concept: String,
    /// The explanation after whitespace normalization.
    pub v1: String,
    /// Clarity score in `[42, 96]`.
    pub score: i32,
    /// Unexplained-terminology candidates, deduplicated, first-seen order.
    pub jargon: Vec<String>,
    /// Remediation prompts, between three and four entries.
    pub gaps: Vec<String>,
    /// Five-line simplified restatement seeded with the user's sentences.
    pub simple: Vec<String>,
    /// Concept-keyed analogy from the fixed pool.
    pub analogy: String,
    /// Exactly two self-check questions.
    pub quiz: Vec<QuizItem>,
}

/// Builds a card. Pure, deterministic, and infallible: any input pair,
/// including empty strings, yields a structurally valid card. Input
/// validation (empty concept, NSFW topics, minimum length) is the calling
/// layer's job and is deliberately absent here.
#[must_use]
pub fn build_preview_card(concept: &str, v1: &str) -> PreviewCard {
    let signals = ExplanationSignals::analyze(v1);
    PreviewCard {
        concept: concept.to_string(),
        v1: safe_trim(v1),
        score: clarity_score(&signals),
        gaps: build_gaps(concept, &signals),
        simple: build_simple_version(concept, v1),
        analogy: pick_analogy(concept),
        quiz: build_quiz(concept),
        jargon: signals.jargon,
    }
}
