//! MCP tools backed by the Grok client.

mod chat;
mod image;
mod models;
mod search;
mod stateful;

pub use chat::{ChatTool, ReasoningTool, VisionTool};
pub use image::GenerateImageTool;
pub use models::ListModelsTool;
pub use search::LiveSearchTool;
pub use stateful::{DeleteStatefulResponseTool, RetrieveStatefulResponseTool, StatefulChatTool};

use crate::{McpError, McpResult};
use async_trait::async_trait;
use grok_client::GrokClient;
use grok_core::Conversation;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// A tool callable over MCP.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as advertised to clients.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Runs the tool.
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Registry of available tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Creates a registry with every Grok tool wired to `client`.
    ///
    /// The basic chat tool gets a fresh conversation owned by this registry.
    pub fn with_client(client: GrokClient) -> Self {
        let conversation = Arc::new(Mutex::new(Conversation::new()));
        let mut registry = Self::default();
        registry.register(Arc::new(ListModelsTool::new(client.clone())));
        registry.register(Arc::new(ChatTool::new(client.clone(), conversation)));
        registry.register(Arc::new(VisionTool::new(client.clone())));
        registry.register(Arc::new(ReasoningTool::new(client.clone())));
        registry.register(Arc::new(GenerateImageTool::new(client.clone())));
        registry.register(Arc::new(LiveSearchTool::new(client.clone())));
        registry.register(Arc::new(StatefulChatTool::new(client.clone())));
        registry.register(Arc::new(RetrieveStatefulResponseTool::new(client.clone())));
        registry.register(Arc::new(DeleteStatefulResponseTool::new(client)));
        registry
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        debug!(tool = tool.name(), "Registering tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Lists all tools, sorted by name.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        let mut tools: Vec<_> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Executes a tool by name.
    #[instrument(skip(self, input))]
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
        tool.execute(input).await
    }
}

/// Decodes tool arguments into a parameter type.
pub(crate) fn parse_args<T: DeserializeOwned>(input: Value) -> McpResult<T> {
    // Clients may send `null` for tools without arguments.
    let input = if input.is_null() {
        Value::Object(Default::default())
    } else {
        input
    };
    serde_json::from_value(input).map_err(|e| McpError::InvalidInput(e.to_string()))
}

/// Serializes a tool result.
pub(crate) fn to_value<T: serde::Serialize>(result: &T) -> McpResult<Value> {
    serde_json::to_value(result)
        .map_err(|e| McpError::ToolExecutionFailed(format!("Failed to serialize result: {}", e)))
}
