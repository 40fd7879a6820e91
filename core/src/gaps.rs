//! Remediation prompt generation.

use crate::signals::ExplanationSignals;

const MIN_GAPS: usize = 3;
const MAX_GAPS: usize = 4;

/// Builds the ordered list of remediation prompts for one explanation.
/// Every triggered condition appends independently, in a fixed priority
/// order; the list is padded to three entries with a filler prompt and
/// capped at four.
#[must_use]
pub fn build_gaps(concept: &str, signals: &ExplanationSignals) -> Vec<String> {
    let mut gaps = Vec::new();
    if let Some(first) = signals.jargon.first() {
        gaps.push(format!(
            "Define \"{first}\" in one sentence a 12-year-old would understand."
        ));
    }
    if !signals.has_example {
        gaps.push(format!(
            "Give a concrete example of {concept} with numbers or a real situation."
        ));
    }
    if !signals.has_because {
        gaps.push(format!(
            "Add the missing 'because': what causes what in {concept}, step-by-step?"
        ));
    }
    if signals.vague {
        gaps.push(
            "Replace vague words (stuff/things/basically/just) with a specific mechanism."
                .to_string(),
        );
    }
    while gaps.len() < MIN_GAPS {
        gaps.push(format!(
            "What is the smallest true statement you can make about {concept}?"
        ));
    }
    gaps.truncate(MAX_GAPS);
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggered_conditions_append_in_priority_order() {
        let signals = ExplanationSignals::analyze(
            "Neural networks are basically models that use backpropagation because they adjust weights.",
        );
        let gaps = build_gaps("Neural networks", &signals);
        assert_eq!(
            gaps,
            vec![
                "Define \"backpropagation\" in one sentence a 12-year-old would understand.",
                "Give a concrete example of Neural networks with numbers or a real situation.",
                "Replace vague words (stuff/things/basically/just) with a specific mechanism.",
            ]
        );
    }

    #[test]
    fn filler_pads_to_three_without_dedup() {
        let signals = ExplanationSignals {
            word_count: 30,
            char_count: 100,
            has_example: true,
            has_because: true,
            vague: false,
            jargon: Vec::new(),
        };
        let gaps = build_gaps("osmosis", &signals);
        let filler = "What is the smallest true statement you can make about osmosis?";
        assert_eq!(gaps, vec![filler, filler, filler]);
    }

    #[test]
    fn four_triggers_fill_the_list_without_filler() {
        let signals = ExplanationSignals {
            word_count: 30,
            char_count: 100,
            has_example: false,
            has_because: false,
            vague: true,
            jargon: vec!["backpropagation".to_string()],
        };
        let gaps = build_gaps("osmosis", &signals);
        assert_eq!(gaps.len(), 4);
        assert!(!gaps.iter().any(|g| g.contains("smallest true statement")));
    }

    #[test]
    fn length_is_always_between_three_and_four() {
        for text in ["", "because 42", "stuff and things basically"] {
            let gaps = build_gaps("gravity", &ExplanationSignals::analyze(text));
            assert!((3..=4).contains(&gaps.len()), "got {gaps:?}");
        }
    }
}
