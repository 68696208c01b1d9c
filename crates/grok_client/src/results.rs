//! Simplified result shapes returned to tool callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generated images and the prompt the model actually used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGeneration {
    /// Raw image entries (`url` or `b64_json`, plus metadata)
    pub images: Vec<Value>,
    /// First entry's revised prompt, or empty
    pub revised_prompt: String,
}

/// Answer plus the model's reasoning trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningReply {
    /// Final answer
    pub content: String,
    /// Reasoning trace
    pub reasoning_content: String,
    /// Token usage as reported
    pub usage: Value,
}

/// Web-grounded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReply {
    /// Answer
    pub content: String,
    /// Token usage as reported
    pub usage: Value,
    /// Source URLs, when requested and returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Value>,
    /// Number of sources consulted, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_sources_used: Option<Value>,
}

/// Outcome of a server-stored conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatefulReply {
    /// Answer
    pub content: String,
    /// Id to continue this thread with
    pub response_id: Option<String>,
    /// Response status
    pub status: Option<String>,
    /// Model that answered
    pub model: Option<String>,
    /// Token usage as reported
    pub usage: Value,
    /// Date (YYYY-MM-DD) until which the response is assumed stored
    pub stored_until: String,
    /// Id this turn continued from
    pub continued_from: Option<String>,
    /// Reasoning summary, when requested and returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// A previously stored response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResponse {
    /// Response id
    pub response_id: Option<String>,
    /// Model that answered
    pub model: Option<String>,
    /// Creation time (RFC 3339, UTC)
    pub created_at: Option<String>,
    /// Response status
    pub status: Option<String>,
    /// Answer
    pub content: String,
    /// Reasoning summary
    pub reasoning: Option<String>,
    /// Token usage as reported
    pub usage: Value,
    /// Id of the response this one continued from
    pub previous_response_id: Option<String>,
    /// Whether the response is stored
    pub store: bool,
}

/// Acknowledgement of a deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Deleted response id
    pub response_id: Option<String>,
    /// Whether the API reports it deleted
    pub deleted: bool,
    /// Human-readable confirmation
    pub message: String,
}
