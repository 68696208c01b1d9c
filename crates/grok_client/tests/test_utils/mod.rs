//! Test utilities for grok_client tests.
//!
//! Provides a transport that records every request and replies with canned
//! JSON, so tests can assert on request bodies without a network.

use async_trait::async_trait;
use grok_client::{GrokClient, XaiRequest, XaiTransport};
use grok_error::{GrokError, GrokErrorKind, GrokResult};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Canned reply for one request.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 2xx with this body
    Json(Value),
    /// Non-2xx with this status and body text
    Status(u16, String),
}

/// Transport that records requests and replays queued replies.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<XaiRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    /// Creates a transport with the given replies queued in order.
    pub fn with_replies(replies: impl IntoIterator<Item = MockReply>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into_iter().collect()),
        })
    }

    /// Creates a transport that answers every call with the same body.
    pub fn always(body: Value) -> Arc<Self> {
        Self::with_replies(std::iter::repeat_n(MockReply::Json(body), 8))
    }

    /// All requests sent so far.
    pub fn requests(&self) -> Vec<XaiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Number of requests sent so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// Body of the most recent request.
    pub fn last_body(&self) -> Value {
        self.requests()
            .last()
            .and_then(|r| r.body().clone())
            .expect("a request with a body was sent")
    }
}

#[async_trait]
impl XaiTransport for RecordingTransport {
    async fn send(&self, request: XaiRequest) -> GrokResult<Value> {
        self.requests.lock().expect("requests lock").push(request);
        let reply = self.replies.lock().expect("replies lock").pop_front();
        match reply {
            Some(MockReply::Json(body)) => Ok(body),
            Some(MockReply::Status(status, message)) => {
                Err(GrokError::new(GrokErrorKind::Upstream { status, message }))
            }
            None => Err(GrokError::new(GrokErrorKind::Http(
                "no canned reply left".to_string(),
            ))),
        }
    }
}

/// Client wired to the given mock transport.
#[allow(dead_code)]
pub fn client_with(transport: &Arc<RecordingTransport>) -> GrokClient {
    GrokClient::with_transport(transport.clone())
}

/// Chat completion body with a single assistant message.
#[allow(dead_code)]
pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8}
    })
}
