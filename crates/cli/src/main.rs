//! turnwise CLI — the main entry point.
//!
//! Commands:
//! - `assemble` — Trim a conversation file under a memory policy and print
//!   the message list that would go to the model
//! - `tokens`   — Print the estimated token count of a conversation file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "turnwise",
    about = "turnwise — bounded conversation-context assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the bounded message list for the next model call
    Assemble {
        /// JSON file holding the conversation (array of {role, content})
        #[arg(short = 'i', long)]
        conversation: PathBuf,

        /// Text file with retrieved/background context for this turn
        #[arg(short = 'x', long)]
        context: Option<PathBuf>,

        /// Memory policy: fixed, summary, or budget
        #[arg(short, long)]
        policy: Option<String>,

        /// Window size for the fixed policy
        #[arg(short, long)]
        window: Option<usize>,

        /// Token ceiling for the budget policy
        #[arg(short = 't', long)]
        max_tokens: Option<usize>,

        /// Model name for token counting
        #[arg(short, long)]
        model: Option<String>,

        /// TOML config file with policy defaults
        #[arg(short, long, env = "TURNWISE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Estimate the token count of a conversation file
    Tokens {
        /// JSON file holding the conversation (array of {role, content})
        #[arg(short = 'i', long)]
        conversation: PathBuf,

        /// Model name for token counting
        #[arg(short, long, default_value = "gpt-4o-mini")]
        model: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Assemble {
            conversation,
            context,
            policy,
            window,
            max_tokens,
            model,
            config,
        } => commands::assemble::run(commands::assemble::Args {
            conversation,
            context,
            policy,
            window,
            max_tokens,
            model,
            config,
        }),
        Commands::Tokens {
            conversation,
            model,
        } => commands::tokens::run(&conversation, &model),
    }
}
