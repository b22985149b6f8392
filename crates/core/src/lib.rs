//! # Turnwise Core
//!
//! Domain types and error definitions for the turnwise context assembler.
//! This crate has **zero framework dependencies** — it defines the value
//! objects that flow through the assembly pipeline.
//!
//! ## Design Philosophy
//!
//! Everything the assembler touches is a plain value: a `Conversation` of
//! `Message`s and an optional `ContextBlock` of retrieved reference text.
//! The assembler is a pure function over these values, so they derive
//! structural equality and the whole pipeline stays deterministic and
//! trivially testable.

pub mod block;
pub mod error;
pub mod message;

// Re-export key types at crate root for ergonomics
pub use block::{ContextBlock, RetrievedDocument};
pub use error::{Error, Result, TokenError};
pub use message::{Conversation, ConversationId, Message, Role};
