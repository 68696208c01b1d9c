//! Error types for MCP tool execution.

use derive_more::{Display, Error, From};
use grok_error::{GrokError, GrokErrorKind};

/// Errors raised while executing an MCP tool.
#[derive(Debug, Display, Error, From)]
pub enum McpError {
    /// Tool arguments failed to decode.
    #[display("Invalid input: {}", _0)]
    #[from(skip)]
    InvalidInput(#[error(not(source))] String),

    /// No tool registered under this name.
    #[display("Tool not found: {}", _0)]
    #[from(skip)]
    ToolNotFound(#[error(not(source))] String),

    /// Tool ran but could not produce a result.
    #[display("Tool execution failed: {}", _0)]
    #[from(skip)]
    ToolExecutionFailed(#[error(not(source))] String),

    /// Error from the Grok client.
    #[display("{}", _0)]
    Grok(GrokError),
}

impl McpError {
    /// True when the caller's arguments were at fault rather than the API.
    pub fn is_invalid_parameters(&self) -> bool {
        match self {
            McpError::InvalidInput(_) => true,
            McpError::Grok(e) => matches!(e.kind, GrokErrorKind::InvalidArgument(_)),
            _ => false,
        }
    }
}

/// Result type for MCP tool execution.
pub type McpResult<T> = Result<T, McpError>;
