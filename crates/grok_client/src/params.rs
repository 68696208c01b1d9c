//! Caller-facing parameters for each operation.
//!
//! Every parameter type can be built in Rust through its builder or decoded
//! from tool-call JSON; both paths apply the same defaults.

use derive_builder::Builder;
use derive_getters::Getters;
use grok_core::DetailLevel;
use serde::Deserialize;
use serde_json::Value;

/// Default model for chat, vision, search and stored-response calls.
pub const DEFAULT_CHAT_MODEL: &str = "grok-4-1-fast-non-reasoning";

/// Default model for reasoning chat.
pub const DEFAULT_REASONING_MODEL: &str = "grok-4-1-fast-reasoning";

/// Default model for image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "grok-2-image-1212";

/// Result cap the API applies when none is sent.
pub const DEFAULT_MAX_SEARCH_RESULTS: u32 = 20;

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

fn default_reasoning_model() -> String {
    DEFAULT_REASONING_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_image_count() -> u32 {
    1
}

fn default_response_format() -> String {
    "url".to_string()
}

fn default_search_mode() -> String {
    "on".to_string()
}

fn default_max_search_results() -> u32 {
    DEFAULT_MAX_SEARCH_RESULTS
}

fn default_true() -> bool {
    true
}

/// Parameters for a basic chat completion.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatParams {
    /// User prompt
    prompt: String,
    /// Model identifier
    #[builder(default = "default_chat_model()")]
    #[serde(default = "default_chat_model")]
    model: String,
    /// System prompt, sent only when no history is replayed
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    system_prompt: Option<String>,
    /// Replay and extend the session's conversation
    #[builder(default)]
    #[serde(default)]
    use_conversation_history: bool,
    /// Sampling temperature
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    max_tokens: Option<u32>,
    /// Nucleus sampling
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    top_p: Option<f64>,
    /// Ignored for reasoning models
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    presence_penalty: Option<f64>,
    /// Ignored for reasoning models
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    frequency_penalty: Option<f64>,
    /// Ignored for reasoning models
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    stop: Option<Vec<String>>,
    /// "low" or "high"; reasoning models only
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    reasoning_effort: Option<String>,
}

impl ChatParams {
    /// Creates a new builder for ChatParams.
    pub fn builder() -> ChatParamsBuilder {
        ChatParamsBuilder::default()
    }
}

/// Parameters for a chat about one or more images.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct VisionParams {
    /// Question or instruction about the images
    prompt: String,
    /// Local image files (jpg, jpeg, png)
    #[builder(default)]
    #[serde(default)]
    image_paths: Vec<String>,
    /// Remote image URLs
    #[builder(default)]
    #[serde(default)]
    image_urls: Vec<String>,
    /// Detail hint applied to every image
    #[builder(default)]
    #[serde(default)]
    detail: DetailLevel,
    /// Model identifier
    #[builder(default = "default_chat_model()")]
    #[serde(default = "default_chat_model")]
    model: String,
}

impl VisionParams {
    /// Creates a new builder for VisionParams.
    pub fn builder() -> VisionParamsBuilder {
        VisionParamsBuilder::default()
    }
}

/// Parameters for image generation.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageParams {
    /// Description of the image
    prompt: String,
    /// Number of images
    #[builder(default = "default_image_count()")]
    #[serde(default = "default_image_count")]
    n: u32,
    /// "url" or "b64_json"
    #[builder(default = "default_response_format()")]
    #[serde(default = "default_response_format")]
    response_format: String,
    /// Model identifier
    #[builder(default = "default_image_model()")]
    #[serde(default = "default_image_model")]
    model: String,
}

impl ImageParams {
    /// Creates a new builder for ImageParams.
    pub fn builder() -> ImageParamsBuilder {
        ImageParamsBuilder::default()
    }
}

/// Parameters for a reasoning chat.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ReasoningParams {
    /// Problem to solve
    prompt: String,
    /// Must be a reasoning model
    #[builder(default = "default_reasoning_model()")]
    #[serde(default = "default_reasoning_model")]
    model: String,
    /// System prompt
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    system_prompt: Option<String>,
    /// "low" or "high"
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    reasoning_effort: Option<String>,
    /// Sampling temperature
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    max_tokens: Option<u32>,
    /// Nucleus sampling
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    top_p: Option<f64>,
}

impl ReasoningParams {
    /// Creates a new builder for ReasoningParams.
    pub fn builder() -> ReasoningParamsBuilder {
        ReasoningParamsBuilder::default()
    }
}

/// Parameters for a web-grounded chat.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SearchParams {
    /// Question or search query
    prompt: String,
    /// Model identifier
    #[builder(default = "default_chat_model()")]
    #[serde(default = "default_chat_model")]
    model: String,
    /// "on" or "off"
    #[builder(default = "default_search_mode()")]
    #[serde(default = "default_search_mode")]
    mode: String,
    /// Return source URLs
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    return_citations: bool,
    /// Earliest result date (YYYY-MM-DD)
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    from_date: Option<String>,
    /// Latest result date (YYYY-MM-DD)
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    to_date: Option<String>,
    /// Number of sources to consult
    #[builder(default = "default_max_search_results()")]
    #[serde(default = "default_max_search_results")]
    max_search_results: u32,
    /// Country code scoping web and news results
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    country: Option<String>,
    /// RSS feeds to include
    #[builder(default)]
    #[serde(default)]
    rss_links: Vec<String>,
    /// Explicit source descriptors; replaces country and RSS synthesis
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    sources: Option<Vec<Value>>,
    /// System prompt
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    system_prompt: Option<String>,
}

impl SearchParams {
    /// Creates a new builder for SearchParams.
    pub fn builder() -> SearchParamsBuilder {
        SearchParamsBuilder::default()
    }
}

/// Parameters for one turn of a server-stored conversation.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StatefulChatParams {
    /// What to say this turn
    prompt: String,
    /// Response to continue from
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    response_id: Option<String>,
    /// Model identifier
    #[builder(default = "default_chat_model()")]
    #[serde(default = "default_chat_model")]
    model: String,
    /// System prompt, honored only when starting a new thread
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    system_prompt: Option<String>,
    /// Ask for a reasoning summary
    #[builder(default)]
    #[serde(default)]
    include_reasoning: bool,
    /// Sampling temperature
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    max_tokens: Option<u32>,
}

impl StatefulChatParams {
    /// Creates a new builder for StatefulChatParams.
    pub fn builder() -> StatefulChatParamsBuilder {
        StatefulChatParamsBuilder::default()
    }
}
