//! HTTP transport for xAI API calls.

use crate::XaiConfig;
use async_trait::async_trait;
use derive_getters::Getters;
use grok_error::{GrokError, GrokErrorKind, GrokResult};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// HTTP verb of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// Which API base URL a path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ApiBase {
    /// Models, chat completions, image generation
    Stateless,
    /// Stored responses
    Stateful,
}

/// A single outbound API call.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct XaiRequest {
    /// HTTP verb
    method: HttpMethod,
    /// Base URL selector
    base: ApiBase,
    /// Path appended to the base URL, starting with `/`
    path: String,
    /// JSON body, for POST
    body: Option<Value>,
    /// Per-call timeout
    timeout: Duration,
}

impl XaiRequest {
    /// Creates a GET request.
    pub fn get(base: ApiBase, path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: HttpMethod::Get,
            base,
            path: path.into(),
            body: None,
            timeout,
        }
    }

    /// Creates a POST request with a JSON body.
    pub fn post(base: ApiBase, path: impl Into<String>, body: Value, timeout: Duration) -> Self {
        Self {
            method: HttpMethod::Post,
            base,
            path: path.into(),
            body: Some(body),
            timeout,
        }
    }

    /// Creates a DELETE request.
    pub fn delete(base: ApiBase, path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: HttpMethod::Delete,
            base,
            path: path.into(),
            body: None,
            timeout,
        }
    }
}

/// Performs API calls and returns the decoded JSON body.
///
/// Implementations must surface non-2xx statuses as
/// [`GrokErrorKind::Upstream`] and must not retry.
#[async_trait]
pub trait XaiTransport: Send + Sync + std::fmt::Debug {
    /// Sends one request and returns the response body.
    async fn send(&self, request: XaiRequest) -> GrokResult<Value>;
}

/// Transport backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: XaiConfig,
}

impl ReqwestTransport {
    /// Creates a transport for the given configuration.
    pub fn new(config: XaiConfig) -> Self {
        debug!(
            base_url = %config.base_url(),
            state_base_url = %config.state_base_url(),
            has_api_key = config.has_api_key(),
            "Created xAI transport"
        );
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url_for(&self, base: ApiBase, path: &str) -> String {
        let root = match base {
            ApiBase::Stateless => self.config.base_url(),
            ApiBase::Stateful => self.config.state_base_url(),
        };
        format!("{}{}", root.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl XaiTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, base = %request.base, path = %request.path))]
    async fn send(&self, request: XaiRequest) -> GrokResult<Value> {
        let api_key = self
            .config
            .api_key()
            .as_deref()
            .ok_or_else(|| GrokError::new(GrokErrorKind::MissingCredential))?;

        let url = self.url_for(request.base, &request.path);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &url)
            .bearer_auth(api_key)
            .timeout(request.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(url = %url, timeout_secs = request.timeout.as_secs(), "Sending request");

        let response = builder.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            GrokError::new(GrokErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(GrokError::new(GrokErrorKind::Upstream {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GrokError::new(GrokErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(status = %status, "Received response");
        Ok(body)
    }
}
