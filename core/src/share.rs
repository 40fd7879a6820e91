//! Share-link payload and wire codec.
//!
//! The share page receives a card as a base64url token in the URL fragment.
//! The payload is a trimmed projection of the card: the jargon list never
//! travels, and the explanation is truncated so links stay short.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::PreviewCard;
use crate::quiz::QuizItem;

/// Longest explanation prefix carried in a share link, in characters.
pub const SHARE_V1_LIMIT: usize = 700;

/// Errors from decoding a share token.
#[derive(Debug, Error)]
pub enum ShareDecodeError {
    /// The token is not valid base64url.
    #[error("invalid share token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),
    /// The decoded bytes are not a valid payload document.
    #[error("invalid share payload JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Card projection serialized into share links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Topic name.
    pub concept: String,
    /// Clarity score.
    pub score: i32,
    /// Explanation, truncated to [`SHARE_V1_LIMIT`] characters.
    pub v1: String,
    /// Remediation prompts.
    pub gaps: Vec<String>,
    /// Simplified restatement.
    pub simple: Vec<String>,
    /// Analogy line.
    pub analogy: String,
    /// Self-check questions.
    pub quiz: Vec<QuizItem>,
}

impl SharePayload {
    /// Projects a card into its shareable form.
    #[must_use]
    pub fn from_card(card: &PreviewCard) -> Self {
        Self {
            concept: card.concept.clone(),
            score: card.score,
            v1: card.v1.chars().take(SHARE_V1_LIMIT).collect(),
            gaps: card.gaps.clone(),
            simple: card.simple.clone(),
            analogy: card.analogy.clone(),
            quiz: card.quiz.clone(),
        }
    }

    /// Encodes the payload as an unpadded base64url token.
    #[must_use]
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).expect("payload serializes");
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decodes a token produced by [`SharePayload::encode`]. Padded tokens
    /// from older clients are accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`ShareDecodeError`] when the token is not base64url or the
    /// decoded bytes are not a payload document.
    pub fn decode(token: &str) -> Result<Self, ShareDecodeError> {
        let cleaned = token.trim().trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD.decode(cleaned)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Builds the `share/index.html#card=<token>` fragment the web share
    /// page reads.
    #[must_use]
    pub fn share_fragment(&self) -> String {
        format!("share/index.html#card={}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::build_preview_card;

    #[test]
    fn payload_drops_the_jargon_field() {
        let card = build_preview_card("DNS", "The DNS resolves names because maps need numbers.");
        assert!(!card.jargon.is_empty());
        let json = serde_json::to_value(SharePayload::from_card(&card)).unwrap();
        assert!(json.get("jargon").is_none());
        assert!(json.get("score").is_some());
    }

    #[test]
    fn long_explanations_are_truncated_for_sharing() {
        let long = "a".repeat(900);
        let card = build_preview_card("Limits", &long);
        assert_eq!(card.v1.len(), 900);
        let payload = SharePayload::from_card(&card);
        assert_eq!(payload.v1.len(), SHARE_V1_LIMIT);
    }

    #[test]
    fn tokens_round_trip() {
        let card = build_preview_card("Osmosis", "Water moves across a membrane toward salt.");
        let payload = SharePayload::from_card(&card);
        let decoded = SharePayload::decode(&payload.encode()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn padded_tokens_are_accepted() {
        let card = build_preview_card("Osmosis", "Water moves across a membrane toward salt.");
        let payload = SharePayload::from_card(&card);
        let padded = format!("{}==", payload.encode());
        assert_eq!(SharePayload::decode(&padded).unwrap(), payload);
    }

    #[test]
    fn garbage_tokens_fail_to_decode() {
        assert!(matches!(
            SharePayload::decode("!!not-base64!!"),
            Err(ShareDecodeError::Encoding(_))
        ));
        // Valid base64url, but not a payload document.
        let token = URL_SAFE_NO_PAD.encode(b"[1, 2, 3]");
        assert!(matches!(
            SharePayload::decode(&token),
            Err(ShareDecodeError::Payload(_))
        ));
    }

    #[test]
    fn fragment_embeds_the_token() {
        let card = build_preview_card("Osmosis", "Water moves across a membrane toward salt.");
        let payload = SharePayload::from_card(&card);
        let fragment = payload.share_fragment();
        assert!(fragment.starts_with("share/index.html#card="));
        let token = fragment.trim_start_matches("share/index.html#card=");
        assert_eq!(SharePayload::decode(token).unwrap(), payload);
    }
}
