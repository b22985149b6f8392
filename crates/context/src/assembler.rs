//! The context assembler — the core of the crate.
//!
//! Given the conversation so far (including the just-added user turn) and
//! the turn's ContextBlock, produce the exact message list to submit to
//! the model, trimmed under the configured [`MemoryPolicy`].
//!
//! # Guarantees
//!
//! - The result is never empty: at minimum the latest user message is
//!   present.
//! - The ContextBlock, when non-empty, is always the first entry; the rest
//!   is a contiguous chronological suffix of the dialogue.
//! - Assembly is deterministic: identical inputs and parameters always
//!   produce identical output. The assembler holds no state of its own;
//!   the rolling summary lives in the caller's [`SummaryCache`].
//! - If the token counter cannot score the target model, the assembler
//!   fails closed onto the fixed-window policy with the default window
//!   rather than submitting an unbounded payload.

use tracing::{debug, warn};
use turnwise_core::{ContextBlock, Conversation, Error, Message, Result, TokenError};

use crate::policy::{DEFAULT_WINDOW, MemoryPolicy};
use crate::summarizer::{Summarizer, SummaryCache};
use crate::token::TokenCounter;

/// Stateless assembler: one conversation turn in, one bounded message
/// list out. Create one per session (or share; it holds only references
/// to its collaborators).
pub struct ContextAssembler<'a> {
    policy: MemoryPolicy,
    counter: &'a dyn TokenCounter,
    summarizer: &'a dyn Summarizer,
}

impl<'a> ContextAssembler<'a> {
    pub fn new(
        policy: MemoryPolicy,
        counter: &'a dyn TokenCounter,
        summarizer: &'a dyn Summarizer,
    ) -> Self {
        Self {
            policy,
            counter,
            summarizer,
        }
    }

    pub fn policy(&self) -> &MemoryPolicy {
        &self.policy
    }

    /// Assemble the message list for this turn.
    ///
    /// `conversation` must already contain the current user message.
    /// `cache` carries the rolling summary across turns; only the
    /// summary-replacement policy reads or writes it.
    pub fn assemble(
        &self,
        conversation: &Conversation,
        block: &ContextBlock,
        cache: &mut SummaryCache,
    ) -> Result<Vec<Message>> {
        let dialogue = conversation.dialogue();
        if dialogue.is_empty() {
            return Err(Error::EmptyConversation);
        }

        match &self.policy {
            MemoryPolicy::FixedWindow { window } => {
                Ok(Self::fixed_window(&dialogue, block, *window))
            }
            MemoryPolicy::SummaryReplacement => self.summary_replacement(&dialogue, block, cache),
            MemoryPolicy::TokenBudget { max_tokens, model } => {
                self.token_budget(&dialogue, block, *max_tokens, model)
            }
        }
    }

    /// ContextBlock + the most recent `window` dialogue messages.
    ///
    /// A window of zero is clamped to one: the output must never be empty.
    fn fixed_window(dialogue: &[&Message], block: &ContextBlock, window: usize) -> Vec<Message> {
        let window = window.max(1);
        let start = dialogue.len().saturating_sub(window);
        if start > 0 {
            debug!(dropped = start, kept = dialogue.len() - start, "Fixed window trimmed dialogue");
        }

        let mut out = Vec::with_capacity(dialogue.len() - start + 1);
        if !block.is_empty() {
            out.push(block.to_message());
        }
        out.extend(dialogue[start..].iter().map(|m| (*m).clone()));
        out
    }

    /// ContextBlock + summary-as-system-message + the most recent user
    /// message. All earlier turn detail is discarded once summarized.
    fn summary_replacement(
        &self,
        dialogue: &[&Message],
        block: &ContextBlock,
        cache: &mut SummaryCache,
    ) -> Result<Vec<Message>> {
        let owned: Vec<Message> = dialogue.iter().map(|m| (*m).clone()).collect();
        let summary = self.summarizer.summarize(&owned)?;
        cache.replace(summary.clone());

        // The just-added user turn; if the caller somehow ended on an
        // assistant turn, keep the newest message so output stays non-empty.
        let latest = dialogue
            .iter()
            .rev()
            .find(|m| m.role == turnwise_core::Role::User)
            .copied()
            .unwrap_or_else(|| dialogue[dialogue.len() - 1]);

        debug!(collapsed = dialogue.len(), "Replaced dialogue with rolling summary");

        let mut out = Vec::with_capacity(3);
        if !block.is_empty() {
            out.push(block.to_message());
        }
        out.push(Message::system(format!("Conversation summary: {summary}")));
        out.push(latest.clone());
        Ok(out)
    }

    /// Drop the oldest dialogue message while the counted total exceeds the
    /// ceiling; the ContextBlock is never a drop candidate. Falls back to
    /// the fixed-window policy if the counter has no encoding for `model`.
    fn token_budget(
        &self,
        dialogue: &[&Message],
        block: &ContextBlock,
        max_tokens: usize,
        model: &str,
    ) -> Result<Vec<Message>> {
        let mut start = 0;
        loop {
            let mut candidate: Vec<Message> = Vec::with_capacity(dialogue.len() - start + 1);
            if !block.is_empty() {
                candidate.push(block.to_message());
            }
            candidate.extend(dialogue[start..].iter().map(|m| (*m).clone()));

            let total = match self.counter.count(&candidate, model) {
                Ok(total) => total,
                Err(TokenError::UnsupportedModel { model }) => {
                    warn!(model, "No token encoding; falling back to fixed window");
                    return Ok(Self::fixed_window(dialogue, block, DEFAULT_WINDOW));
                }
            };

            if total <= max_tokens || dialogue.len() - start <= 1 {
                if start > 0 {
                    debug!(
                        dropped = start,
                        total_tokens = total,
                        budget = max_tokens,
                        "Token budget trimmed dialogue"
                    );
                }
                return Ok(candidate);
            }
            start += 1;
        }
    }
}
