//! `turnwise tokens` — estimate the token count of a conversation file.

use std::path::Path;
use turnwise_context::{HeuristicCounter, TokenCounter};

pub fn run(conversation: &Path, model: &str) -> anyhow::Result<()> {
    let conv = super::read_conversation(conversation)?;
    let total = HeuristicCounter.count(&conv.messages, model)?;
    println!(
        "{} messages, ~{} tokens ({})",
        conv.messages.len(),
        total,
        model
    );
    Ok(())
}
