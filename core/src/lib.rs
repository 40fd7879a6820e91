#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Deterministic coaching-card engine for the Feynman-technique workflow.
//!
//! Everything in this crate is a pure function over string inputs: given a
//! `(concept, explanation)` pair, [`build_preview_card`] derives a clarity
//! score, jargon candidates, remediation prompts, a simplified restatement,
//! an analogy, and a two-question self-check quiz. There is no I/O, no
//! randomness, and no shared state, so identical inputs always produce a
//! deep-equal card.

pub mod analogy;
pub mod card;
pub mod gaps;
pub mod jargon;
pub mod nsfw;
pub mod quiz;
pub mod score;
pub mod share;
pub mod signals;
pub mod simple;
pub mod text;

pub use analogy::{hash_pick, pick_analogy};
pub use card::{build_preview_card, PreviewCard};
pub use gaps::build_gaps;
pub use jargon::{extract_jargon_words, DEFAULT_MAX_JARGON};
pub use nsfw::is_likely_nsfw;
pub use quiz::{build_quiz, QuizItem};
pub use score::{clarity_score, MAX_SCORE, MIN_SCORE};
pub use share::{ShareDecodeError, SharePayload, SHARE_V1_LIMIT};
pub use signals::ExplanationSignals;
pub use simple::build_simple_version;
pub use text::{safe_trim, split_sentences, word_count};
