//! Test utilities for grok_mcp tests.

use async_trait::async_trait;
use grok_client::{GrokClient, XaiRequest, XaiTransport};
use grok_error::{GrokError, GrokErrorKind, GrokResult};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport that records requests and replays queued bodies.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<XaiRequest>>,
    bodies: Mutex<VecDeque<Value>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    /// Creates a transport that answers with `bodies` in order.
    pub fn new(bodies: impl IntoIterator<Item = Value>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            bodies: Mutex::new(bodies.into_iter().collect()),
        })
    }

    /// Creates a transport with nothing scripted; every call fails with 503.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<XaiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Client over this transport.
    pub fn client(self: &Arc<Self>) -> GrokClient {
        GrokClient::with_transport(self.clone())
    }
}

#[async_trait]
impl XaiTransport for ScriptedTransport {
    async fn send(&self, request: XaiRequest) -> GrokResult<Value> {
        self.requests.lock().expect("requests lock").push(request);
        self.bodies
            .lock()
            .expect("bodies lock")
            .pop_front()
            .ok_or_else(|| {
                GrokError::new(GrokErrorKind::Upstream {
                    status: 503,
                    message: "no scripted body".to_string(),
                })
            })
    }
}
