//! Bounded conversation-context assembly.
//!
//! Given the growing dialogue and an optional block of retrieved context,
//! produce the exact message list to submit to the model this turn, under
//! one of three interchangeable trimming policies:
//!
//! | Policy | Keeps | Trim strategy |
//! |--------|-------|---------------|
//! | Fixed window | ContextBlock + last K messages | Oldest dropped silently |
//! | Summary replacement | ContextBlock + summary + last user turn | Prior detail collapsed, lossy |
//! | Token budget | ContextBlock + newest suffix under budget | Oldest dropped until under ceiling |
//!
//! Assembly is a pure function of (conversation, context block, policy,
//! params): deterministic, synchronous, no hidden state. The only carried
//! state is the rolling summary, owned by the calling session as a
//! [`SummaryCache`] and passed in/out explicitly.

pub mod assembler;
pub mod policy;
pub mod retrieval;
pub mod summarizer;
pub mod token;

pub use assembler::ContextAssembler;
pub use policy::{DEFAULT_TOKEN_BUDGET, DEFAULT_WINDOW, MemoryPolicy};
pub use retrieval::{InMemorySource, RetrievalSource};
pub use summarizer::{Summarizer, SummaryCache, TranscriptSummarizer};
pub use token::{HeuristicCounter, TokenCounter};
