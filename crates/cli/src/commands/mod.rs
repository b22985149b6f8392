pub mod assemble;
pub mod tokens;

use anyhow::Context;
use std::path::Path;
use turnwise_core::{Conversation, Message};

/// Read a conversation from a JSON file holding an array of
/// `{role, content}` objects, in insertion order.
pub fn read_conversation(path: &Path) -> anyhow::Result<Conversation> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading conversation file {}", path.display()))?;
    let messages: Vec<Message> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing conversation file {}", path.display()))?;

    let mut conv = Conversation::new();
    for msg in messages {
        conv.push(msg);
    }
    Ok(conv)
}
