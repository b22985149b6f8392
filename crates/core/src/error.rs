//! Error types for the turnwise domain.
//!
//! Uses `thiserror` for ergonomic error definitions. The assembler itself
//! performs no I/O; every failure mode here is either a caller error or a
//! collaborator (token counter, summarizer, retrieval source) refusing to
//! cooperate.

use thiserror::Error;

/// The top-level error type for all turnwise operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller error: `assemble` must never be called with zero dialogue
    /// messages.
    #[error("conversation has no dialogue messages; append the user turn first")]
    EmptyConversation,

    // --- Token counting ---
    #[error("token counter error: {0}")]
    Token(#[from] TokenError),

    // --- External summarizer ---
    #[error("summarizer failed: {0}")]
    Summarizer(String),

    // --- Retrieval sources ---
    #[error("retrieval failed: {0}")]
    Retrieval(String),

    // --- Serialization ---
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from a token counter.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// The counter has no encoding for the target model. The assembler
    /// treats this as a signal to fail closed onto the fixed-window policy.
    #[error("no token encoding available for model: {model}")]
    UnsupportedModel { model: String },
}
