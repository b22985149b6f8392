//! CLI configuration: policy defaults loaded from a TOML file.
//!
//! Command-line flags override file values; file values override the
//! built-in defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use turnwise_context::{DEFAULT_TOKEN_BUDGET, DEFAULT_WINDOW, MemoryPolicy};

/// Policy defaults for the `assemble` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Which policy to apply: "fixed", "summary", or "budget"
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Fixed-window size
    #[serde(default = "default_window")]
    pub window: usize,

    /// Token ceiling for the budget policy
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Model name for token counting
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_policy() -> String {
    "fixed".into()
}
fn default_window() -> usize {
    DEFAULT_WINDOW
}
fn default_max_tokens() -> usize {
    DEFAULT_TOKEN_BUDGET
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            window: default_window(),
            max_tokens: default_max_tokens(),
            model: default_model(),
        }
    }
}

impl AssemblerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Resolve the effective policy after applying flag overrides.
    pub fn resolve(
        &self,
        policy: Option<&str>,
        window: Option<usize>,
        max_tokens: Option<usize>,
        model: Option<&str>,
    ) -> anyhow::Result<MemoryPolicy> {
        let name = policy.unwrap_or(&self.policy);
        match name {
            "fixed" => Ok(MemoryPolicy::FixedWindow {
                window: window.unwrap_or(self.window),
            }),
            "summary" => Ok(MemoryPolicy::SummaryReplacement),
            "budget" => Ok(MemoryPolicy::TokenBudget {
                max_tokens: max_tokens.unwrap_or(self.max_tokens),
                model: model.unwrap_or(&self.model).to_string(),
            }),
            other => anyhow::bail!("unknown policy '{other}' (expected fixed, summary, or budget)"),
        }
    }
}
