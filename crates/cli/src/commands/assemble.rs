//! `turnwise assemble` — trim a conversation and print the message list.

use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;
use turnwise_context::{ContextAssembler, HeuristicCounter, SummaryCache, TranscriptSummarizer};
use turnwise_core::ContextBlock;

use crate::config::AssemblerConfig;

pub struct Args {
    pub conversation: PathBuf,
    pub context: Option<PathBuf>,
    pub policy: Option<String>,
    pub window: Option<usize>,
    pub max_tokens: Option<usize>,
    pub model: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => AssemblerConfig::load(path)?,
        None => AssemblerConfig::default(),
    };
    let policy = config.resolve(
        args.policy.as_deref(),
        args.window,
        args.max_tokens,
        args.model.as_deref(),
    )?;
    debug!(?policy, "Resolved memory policy");

    let conversation = super::read_conversation(&args.conversation)?;
    let block = match &args.context {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading context file {}", path.display()))?;
            ContextBlock::new(text.trim().to_string())
        }
        None => ContextBlock::empty(),
    };

    let counter = HeuristicCounter;
    let summarizer = TranscriptSummarizer::default();
    let assembler = ContextAssembler::new(policy, &counter, &summarizer);

    let mut cache = SummaryCache::new();
    let messages = assembler.assemble(&conversation, &block, &mut cache)?;

    println!("{}", serde_json::to_string_pretty(&messages)?);
    if let Some(summary) = cache.text() {
        debug!(summary, "Rolling summary after this turn");
    }
    Ok(())
}
