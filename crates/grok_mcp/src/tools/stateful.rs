//! Tools for conversations stored on xAI's servers.

use crate::McpResult;
use crate::tools::{McpTool, parse_args, to_value};
use async_trait::async_trait;
use grok_client::{DEFAULT_CHAT_MODEL, GrokClient, STORED_RESPONSE_RETENTION_DAYS, StatefulChatParams};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
struct ResponseIdArgs {
    response_id: String,
}

fn response_id_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "response_id": {
                "type": "string",
                "description": description
            }
        },
        "required": ["response_id"]
    })
}

/// One turn of a server-stored conversation.
pub struct StatefulChatTool {
    client: GrokClient,
    description: String,
}

impl StatefulChatTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        let description = format!(
            "Chat with history kept on xAI's servers for {} days. Start without a \
             response_id, then pass the returned response_id to continue the thread.",
            STORED_RESPONSE_RETENTION_DAYS
        );
        Self {
            client,
            description,
        }
    }
}

#[async_trait]
impl McpTool for StatefulChatTool {
    fn name(&self) -> &str {
        "stateful_chat"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "What to say this turn"
                },
                "response_id": {
                    "type": "string",
                    "description": "Response to continue from; omit to start a new thread"
                },
                "model": {
                    "type": "string",
                    "default": DEFAULT_CHAT_MODEL
                },
                "system_prompt": {
                    "type": "string",
                    "description": "Instructions, only used when starting a new thread"
                },
                "include_reasoning": {
                    "type": "boolean",
                    "default": false
                },
                "temperature": {
                    "type": "number"
                },
                "max_tokens": {
                    "type": "integer"
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let params: StatefulChatParams = parse_args(input)?;
        to_value(&self.client.stateful_chat(&params).await?)
    }
}

/// Fetches a stored response.
pub struct RetrieveStatefulResponseTool {
    client: GrokClient,
}

impl RetrieveStatefulResponseTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for RetrieveStatefulResponseTool {
    fn name(&self) -> &str {
        "retrieve_stateful_response"
    }

    fn description(&self) -> &str {
        "Fetch a previously stored conversation response by id."
    }

    fn input_schema(&self) -> Value {
        response_id_schema("Id of the response to retrieve")
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let args: ResponseIdArgs = parse_args(input)?;
        to_value(
            &self
                .client
                .retrieve_stateful_response(&args.response_id)
                .await?,
        )
    }
}

/// Permanently deletes a stored response.
pub struct DeleteStatefulResponseTool {
    client: GrokClient,
}

impl DeleteStatefulResponseTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for DeleteStatefulResponseTool {
    fn name(&self) -> &str {
        "delete_stateful_response"
    }

    fn description(&self) -> &str {
        "Permanently delete a stored conversation response. It can no longer be \
         retrieved or continued afterwards."
    }

    fn input_schema(&self) -> Value {
        response_id_schema("Id of the response to delete")
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let args: ResponseIdArgs = parse_args(input)?;
        to_value(&self.client.delete_stateful_response(&args.response_id).await?)
    }
}
