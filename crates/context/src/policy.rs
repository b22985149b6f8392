//! Trimming policies.
//!
//! Mutually exclusive, selected per turn or per configuration. Each policy
//! bounds the dialogue differently; none ever drops the ContextBlock.

use serde::{Deserialize, Serialize};

/// Default fixed-window size: the most recent 5 dialogue messages.
pub const DEFAULT_WINDOW: usize = 5;

/// Default token ceiling for the budget policy.
pub const DEFAULT_TOKEN_BUDGET: usize = 5000;

/// How the dialogue is trimmed before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemoryPolicy {
    /// Keep the ContextBlock plus the most recent `window` dialogue
    /// messages. Older messages are dropped silently.
    FixedWindow { window: usize },

    /// Collapse the entire dialogue into one synthesized summary and
    /// present ContextBlock + summary + the most recent user message.
    /// Irreversible and lossy by design.
    SummaryReplacement,

    /// Drop the oldest dialogue message while the counted total exceeds
    /// `max_tokens`; stop when under budget or one message remains.
    /// `model` names the encoding the token counter should use.
    TokenBudget { max_tokens: usize, model: String },
}

impl MemoryPolicy {
    /// Fixed window with the default size.
    pub fn default_window() -> Self {
        Self::FixedWindow {
            window: DEFAULT_WINDOW,
        }
    }

    /// Token budget with the default ceiling.
    pub fn default_budget(model: impl Into<String>) -> Self {
        Self::TokenBudget {
            max_tokens: DEFAULT_TOKEN_BUDGET,
            model: model.into(),
        }
    }
}

impl Default for MemoryPolicy {
    fn default() -> Self {
        Self::default_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        assert_eq!(
            MemoryPolicy::default(),
            MemoryPolicy::FixedWindow { window: 5 }
        );
        assert_eq!(
            MemoryPolicy::default_budget("gpt-4o-mini"),
            MemoryPolicy::TokenBudget {
                max_tokens: 5000,
                model: "gpt-4o-mini".into()
            }
        );
    }

    #[test]
    fn policy_serialization_is_tagged() {
        let json = serde_json::to_string(&MemoryPolicy::default_window()).unwrap();
        assert!(json.contains("\"kind\":\"fixed_window\""));
        assert!(json.contains("\"window\":5"));

        let parsed: MemoryPolicy =
            serde_json::from_str("{\"kind\":\"summary_replacement\"}").unwrap();
        assert_eq!(parsed, MemoryPolicy::SummaryReplacement);
    }
}
