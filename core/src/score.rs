//! Clarity scoring: a fixed linear-penalty model over structural signals.

use crate::signals::ExplanationSignals;

/// Lowest score the model can emit.
pub const MIN_SCORE: i32 = 42;
/// Highest score the model can emit.
pub const MAX_SCORE: i32 = 96;

/// Scores an explanation from its signals. The arithmetic is a fixed set of
/// penalties from a base of 86, clamped to `[MIN_SCORE, MAX_SCORE]`; callers
/// relying on golden fixtures depend on this exact sequence.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn clarity_score(signals: &ExplanationSignals) -> i32 {
    let mut score = 86;
    score -= (signals.jargon.len() as i32 * 2).clamp(0, 14);
    if !signals.has_example {
        score -= 8;
    }
    if !signals.has_because {
        score -= 4;
    }
    if signals.vague {
        score -= 5;
    }
    if signals.word_count < 25 {
        score -= 8;
    }
    if signals.word_count > 180 {
        score -= 6;
    }
    if signals.char_count < 60 {
        score -= 6;
    }
    score.clamp(MIN_SCORE, MAX_SCORE)
}
