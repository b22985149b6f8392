//! Dialogue summarization.
//!
//! Under the summary-replacement policy, the entire dialogue so far is
//! collapsed into one synthesized statement. Producing that statement is an
//! external collaborator's job (typically an auxiliary completion call);
//! the [`Summarizer`] trait is the seam. The rolling summary is the only
//! state the policy carries between turns, and it lives in a caller-owned
//! [`SummaryCache`] passed in and out explicitly — the assembler keeps
//! nothing.

use turnwise_core::{Error, Message, Result, Role};

/// The instruction an LLM-backed summarizer should lead with.
pub const SUMMARY_PROMPT: &str = "Summarize the key points of this conversation concisely:";

/// Collapses a dialogue into a single synthesized summary string.
pub trait Summarizer {
    fn summarize(&self, messages: &[Message]) -> Result<String>;
}

/// The rolling summary for one session. Owned by the caller; replaced on
/// every summary-policy turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCache {
    text: Option<String>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current rolling summary, if one has been produced.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the rolling summary. Earlier turn detail is gone for good
    /// once this happens.
    pub fn replace(&mut self, summary: impl Into<String>) {
        self.text = Some(summary.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }
}

/// Render the full request text an LLM-backed summarizer would send:
/// the instruction followed by a `role: content` transcript.
pub fn summary_request_text(messages: &[Message]) -> String {
    let mut out = String::from(SUMMARY_PROMPT);
    for msg in messages {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        out.push_str(&format!("\n{}: {}", role, msg.content));
    }
    out
}

/// Deterministic offline summarizer: renders a compact transcript capped
/// at a character limit, newest turns kept when the cap bites. Useful for
/// tests and for running the summary policy without a model in the loop;
/// production deployments put a completion call behind [`Summarizer`]
/// instead.
#[derive(Debug, Clone)]
pub struct TranscriptSummarizer {
    max_chars: usize,
}

impl TranscriptSummarizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for TranscriptSummarizer {
    fn default() -> Self {
        Self { max_chars: 600 }
    }
}

impl Summarizer for TranscriptSummarizer {
    fn summarize(&self, messages: &[Message]) -> Result<String> {
        if messages.is_empty() {
            return Err(Error::Summarizer("nothing to summarize".into()));
        }

        // Walk newest-first so the cap drops the oldest turns.
        let mut lines: Vec<String> = Vec::new();
        let mut used = 0;
        for msg in messages.iter().rev() {
            let role = match msg.role {
                Role::System => continue,
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            let line = format!("{}: {}", role, msg.content);
            if used + line.len() > self.max_chars && !lines.is_empty() {
                break;
            }
            used += line.len();
            lines.push(line);
        }
        lines.reverse();
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_replace_and_clear() {
        let mut cache = SummaryCache::new();
        assert_eq!(cache.text(), None);

        cache.replace("they discussed club meetings");
        assert_eq!(cache.text(), Some("they discussed club meetings"));

        cache.replace("newer summary");
        assert_eq!(cache.text(), Some("newer summary"));

        cache.clear();
        assert_eq!(cache.text(), None);
    }

    #[test]
    fn request_text_has_prompt_and_transcript() {
        let msgs = vec![Message::user("hi"), Message::assistant("hello")];
        let text = summary_request_text(&msgs);
        assert!(text.starts_with(SUMMARY_PROMPT));
        assert!(text.contains("\nuser: hi"));
        assert!(text.contains("\nassistant: hello"));
    }

    #[test]
    fn transcript_summarizer_keeps_order() {
        let msgs = vec![
            Message::user("what clubs exist?"),
            Message::assistant("robotics and debate"),
            Message::user("when do they meet?"),
        ];
        let summary = TranscriptSummarizer::default().summarize(&msgs).unwrap();
        let first = summary.find("what clubs exist").unwrap();
        let last = summary.find("when do they meet").unwrap();
        assert!(first < last);
    }

    #[test]
    fn transcript_summarizer_caps_at_limit_keeping_newest() {
        let msgs: Vec<Message> = (0..50)
            .map(|i| Message::user(format!("message number {i} with some padding text")))
            .collect();
        let summary = TranscriptSummarizer::new(120).summarize(&msgs).unwrap();
        assert!(summary.len() <= 120 + 40); // at most one line over
        assert!(summary.contains("message number 49"));
        assert!(!summary.contains("message number 0 "));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(TranscriptSummarizer::default().summarize(&[]).is_err());
    }

    #[test]
    fn deterministic() {
        let msgs = vec![Message::user("a"), Message::assistant("b")];
        let s = TranscriptSummarizer::default();
        assert_eq!(s.summarize(&msgs).unwrap(), s.summarize(&msgs).unwrap());
    }
}
