//! The five-line "simpler version" template.

use crate::text::split_sentences;

const TARGET_LINES: usize = 5;
const MAX_USER_SENTENCES: usize = 3;

/// Builds the simplified restatement: a seed line naming the concept, up to
/// three of the user's own sentences verbatim, then coaching nudges in fixed
/// order until five lines are reached.
#[must_use]
pub fn build_simple_version(concept: &str, v1: &str) -> Vec<String> {
    let mut simple = vec![format!("In plain terms: {concept} works like this.")];
    simple.extend(split_sentences(v1).into_iter().take(MAX_USER_SENTENCES));
    let nudges = [
        format!("If you can explain {concept} with one example, you probably get it."),
        "Try saying this out loud in under 30 seconds.".to_string(),
        "Strip any word a 12-year-old wouldn't know and re-read it.".to_string(),
        "Ask: what would break if this weren't true?".to_string(),
        format!("Now remove every sentence that doesn't help someone else understand {concept}."),
    ];
    for nudge in nudges {
        if simple.len() >= TARGET_LINES {
            break;
        }
        simple.push(nudge);
    }
    simple
}
