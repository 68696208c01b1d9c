//! Error types for the Grok MCP adapter.
//!
//! Every failure carries the source location where it was raised, following
//! the kind + location pattern used across the workspace.

mod grok;

pub use grok::{GrokError, GrokErrorKind, GrokResult};
