//! Data transfer objects for the xAI API.

use crate::output::OutputItem;
use derive_builder::Builder;
use derive_getters::Getters;
use grok_core::{DetailLevel, ReasoningEffort};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Image URL object inside an `image_url` content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireImageUrl {
    /// Remote URL or `data:` URL
    pub url: String,
    /// Detail hint
    pub detail: DetailLevel,
}

/// A content part in the chat completions format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WirePart {
    /// Text span
    Text {
        /// The text
        text: String,
    },
    /// Image reference
    ImageUrl {
        /// Image location and detail
        image_url: WireImageUrl,
    },
}

/// Message content: a bare string or a list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireContent {
    /// Plain text
    Text(String),
    /// Ordered parts
    Parts(Vec<WirePart>),
}

/// A message in the chat completions format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: WireContent,
}

/// Live search settings attached to a chat completion.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SearchParameters {
    /// "on", "off" or "auto"
    mode: String,
    /// Ask for source URLs in the response
    return_citations: bool,
    /// Earliest result date (YYYY-MM-DD)
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    from_date: Option<String>,
    /// Latest result date (YYYY-MM-DD)
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    to_date: Option<String>,
    /// Result cap; omitted when the API default applies
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_search_results: Option<u32>,
    /// Source descriptors
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<Value>>,
}

impl SearchParameters {
    /// Creates a new builder for SearchParameters.
    pub fn builder() -> SearchParametersBuilder {
        SearchParametersBuilder::default()
    }
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<WireMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Nucleus sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    /// Non-reasoning models only
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f64>,
    /// Non-reasoning models only
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f64>,
    /// Non-reasoning models only
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
    /// Reasoning models only
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<ReasoningEffort>,
    /// Live search settings
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    search_parameters: Option<SearchParameters>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for ChatCompletionRequest.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// The message inside a chat completion choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_content: Option<String>,
    #[serde(default)]
    pub citations: Option<Value>,
}

/// A choice in a chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Value>,
    #[serde(default)]
    pub citations: Option<Value>,
}

/// Image generation request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImageGenerationRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u32,
    pub response_format: &'a str,
}

/// Image generation response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// One entry of the model listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ModelEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub owned_by: String,
}

/// Model listing response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelEntry>,
}

/// Reasoning output options for stored responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningOptions {
    /// Extra reasoning fields to return
    pub include: Vec<String>,
}

/// Stored-response creation request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ResponsesRequest {
    /// Model identifier
    model: String,
    /// Input messages for this turn
    input: Vec<WireMessage>,
    /// Keep the response server-side
    store: bool,
    /// Response this turn continues from
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_response_id: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    /// Reasoning output options
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning: Option<ReasoningOptions>,
}

impl ResponsesRequest {
    /// Creates a new builder for ResponsesRequest.
    pub fn builder() -> ResponsesRequestBuilder {
        ResponsesRequestBuilder::default()
    }
}

/// A stored response as returned by create and retrieve.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StoredResponseBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub usage: Option<Value>,
    #[serde(default, deserialize_with = "crate::output::lenient_items")]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub previous_response_id: Option<String>,
    #[serde(default)]
    pub store: Option<bool>,
}

/// Stored-response deletion acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeleteResponseBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}
