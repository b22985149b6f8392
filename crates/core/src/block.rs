//! The ContextBlock — synthesized reference context for one turn.
//!
//! A ContextBlock holds concatenated retrieved or background document
//! text, presented to the model as a single system-role message ahead of
//! the dialogue. It is recomputed per turn and never persisted.

use crate::message::Message;
use serde::{Deserialize, Serialize};

/// One retrieval hit: a document id plus its text content.
///
/// The id is kept so callers can list which documents backed an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    /// Source document identifier (filename, URL, collection id).
    pub id: String,
    /// The text content of the document.
    pub content: String,
}

impl RetrievedDocument {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Synthesized system-role content carrying retrieved or background
/// reference text. May be empty, in which case the assembler emits no
/// system entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    content: String,
}

impl ContextBlock {
    /// An empty block: the assembler will present dialogue only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A block from pre-rendered reference text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Build a block from retrieved documents, concatenating their text
    /// behind a fixed preamble. An empty slice yields an empty block.
    pub fn from_documents(documents: &[RetrievedDocument]) -> Self {
        if documents.is_empty() {
            return Self::empty();
        }
        let joined = documents
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            content: format!("Here is relevant information: {joined}"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render this block as the system message the model will see.
    pub fn to_message(&self) -> Message {
        Message::system(self.content.clone())
    }
}
