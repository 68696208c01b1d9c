//! Connection settings for the xAI API.

use derive_getters::Getters;
use grok_error::{GrokError, GrokErrorKind, GrokResult};

/// Base URL for stateless endpoints (models, chat, images).
pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";

/// Base URL for stored-response endpoints.
pub const DEFAULT_STATE_BASE_URL: &str = "https://api.x.ai";

/// Configuration for talking to the xAI API.
#[derive(Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct XaiConfig {
    /// Bearer token; checked when the first request is sent
    #[builder(default)]
    api_key: Option<String>,
    /// Base URL for stateless endpoints
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Base URL for stored-response endpoints
    #[builder(default = "DEFAULT_STATE_BASE_URL.to_string()")]
    state_base_url: String,
}

impl XaiConfig {
    /// Returns a builder for XaiConfig.
    pub fn builder() -> XaiConfigBuilder {
        XaiConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `XAI_API_KEY` (required before the first request)
    /// - `XAI_BASE_URL` (default: "https://api.x.ai/v1")
    /// - `XAI_STATE_BASE_URL` (default: "https://api.x.ai")
    pub fn from_env() -> GrokResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> GrokResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = XaiConfigBuilder::default();
        builder.api_key(var("XAI_API_KEY"));
        if let Some(base_url) = var("XAI_BASE_URL") {
            builder.base_url(base_url);
        }
        if let Some(state_base_url) = var("XAI_STATE_BASE_URL") {
            builder.state_base_url(state_base_url);
        }

        builder
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))
    }

    /// Returns true if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for XaiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            state_base_url: DEFAULT_STATE_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for XaiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XaiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("state_base_url", &self.state_base_url)
            .finish()
    }
}
