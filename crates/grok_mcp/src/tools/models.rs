//! Model listing tool.

use crate::McpResult;
use crate::tools::McpTool;
use async_trait::async_trait;
use grok_client::GrokClient;
use serde_json::{Value, json};

/// Lists the models available to the configured API key.
pub struct ListModelsTool {
    client: GrokClient,
}

impl ListModelsTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for ListModelsTool {
    fn name(&self) -> &str {
        "list_models"
    }

    fn description(&self) -> &str {
        "List all available Grok models with their owner and creation date. \
         Use this to check which model identifiers can be passed to the other tools."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value) -> McpResult<Value> {
        Ok(Value::String(self.client.list_models().await?))
    }
}
