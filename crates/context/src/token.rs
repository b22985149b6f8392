//! Token counting.
//!
//! The assembler treats token counting as an external collaborator behind
//! the [`TokenCounter`] trait: real deployments plug in a tokenizer for
//! their target model, and a counter may refuse a model it has no encoding
//! for. The bundled [`HeuristicCounter`] uses a character-based estimate:
//! ~4 characters per token, accurate within ~10% for BPE tokenizers on
//! English text.

use turnwise_core::{Message, TokenError};

/// Counts tokens for a message list against a named model encoding.
///
/// Implementations must be deterministic: identical inputs yield identical
/// counts, so assembly stays a pure function.
pub trait TokenCounter {
    /// Total token count for `messages` under `model`'s encoding.
    ///
    /// Returns [`TokenError::UnsupportedModel`] when the counter has no
    /// encoding for `model`.
    fn count(&self, messages: &[Message], model: &str) -> Result<usize, TokenError>;
}

/// Character-based estimator that scores any model.
///
/// Heuristic: 1 token ≈ 4 characters, rounded up, plus a 4-token
/// per-message overhead for role name and delimiters in the wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCounter;

impl HeuristicCounter {
    /// Estimate the token count for a string.
    pub fn estimate_text(text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        text.len().div_ceil(4)
    }

    /// Estimate tokens for a single message including per-message overhead.
    pub fn estimate_message(message: &Message) -> usize {
        let overhead = 4;
        overhead + Self::estimate_text(&message.content)
    }
}

impl TokenCounter for HeuristicCounter {
    fn count(&self, messages: &[Message], _model: &str) -> Result<usize, TokenError> {
        Ok(messages.iter().map(Self::estimate_message).sum())
    }
}
