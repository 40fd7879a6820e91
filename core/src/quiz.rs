//! Self-check quiz templates.

use serde::{Deserialize, Serialize};

/// One self-check question with guidance on what a good answer covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// Question shown to the learner.
    pub q: String,
    /// What a good answer looks like.
    pub a: String,
}

/// Builds the two fixed self-check questions for a concept.
#[must_use]
pub fn build_quiz(concept: &str) -> Vec<QuizItem> {
    vec![
        QuizItem {
            q: format!(
                "If you had to explain {concept} to a 12-year-old in one sentence, what would you say?"
            ),
            a: format!(
                "A single sentence that captures the core mechanism of {concept} without jargon."
            ),
        },
        QuizItem {
            q: format!(
                "What's one thing that would NOT happen if {concept} didn't exist or didn't work?"
            ),
            a: format!("Name a specific real-world consequence that depends on {concept}."),
        },
    ]
}
