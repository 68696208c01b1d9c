//! Chat tools: basic, vision and reasoning.

use crate::McpResult;
use crate::tools::{McpTool, parse_args, to_value};
use async_trait::async_trait;
use grok_client::{
    ChatParams, DEFAULT_CHAT_MODEL, DEFAULT_REASONING_MODEL, GrokClient, ReasoningParams,
    VisionParams,
};
use grok_core::{Conversation, REASONING_MODELS};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Basic chat with optional client-side history.
pub struct ChatTool {
    client: GrokClient,
    conversation: Arc<Mutex<Conversation>>,
}

impl ChatTool {
    /// Creates the tool over a session conversation.
    pub fn new(client: GrokClient, conversation: Arc<Mutex<Conversation>>) -> Self {
        Self {
            client,
            conversation,
        }
    }
}

#[async_trait]
impl McpTool for ChatTool {
    fn name(&self) -> &str {
        "chat"
    }

    fn description(&self) -> &str {
        "Chat completion with Grok models for general questions, writing and coding help. \
         Set use_conversation_history to keep context across calls. Reasoning models accept \
         reasoning_effort; other models accept penalties and stop sequences."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Message to send"
                },
                "model": {
                    "type": "string",
                    "description": "Model to use",
                    "default": DEFAULT_CHAT_MODEL
                },
                "system_prompt": {
                    "type": "string",
                    "description": "Instructions for the model, sent only when no history is replayed"
                },
                "use_conversation_history": {
                    "type": "boolean",
                    "description": "Replay earlier turns of this session and record this one",
                    "default": false
                },
                "temperature": {
                    "type": "number",
                    "description": "Sampling temperature (0.0-2.0)"
                },
                "max_tokens": {
                    "type": "integer",
                    "description": "Maximum tokens to generate"
                },
                "top_p": {
                    "type": "number",
                    "description": "Nucleus sampling (0.0-1.0)"
                },
                "presence_penalty": {
                    "type": "number",
                    "description": "Penalty for tokens already present (non-reasoning models)"
                },
                "frequency_penalty": {
                    "type": "number",
                    "description": "Penalty for frequent tokens (non-reasoning models)"
                },
                "stop": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Stop sequences (non-reasoning models)"
                },
                "reasoning_effort": {
                    "type": "string",
                    "enum": ["low", "high"],
                    "description": "Thinking effort (reasoning models)"
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let params: ChatParams = parse_args(input)?;
        let mut conversation = self.conversation.lock().await;
        let reply = self.client.chat(&mut conversation, &params).await?;
        debug!(turns = conversation.len(), "Chat complete");
        Ok(Value::String(reply))
    }
}

/// Questions about local or remote images.
pub struct VisionTool {
    client: GrokClient,
}

impl VisionTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for VisionTool {
    fn name(&self) -> &str {
        "chat_with_vision"
    }

    fn description(&self) -> &str {
        "Analyze images and answer questions about them. Accepts local files \
         (jpg, jpeg, png) and image URLs, in any combination."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Question or instruction about the images"
                },
                "image_paths": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Local image files (jpg, jpeg, png)"
                },
                "image_urls": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Image URLs"
                },
                "detail": {
                    "type": "string",
                    "enum": ["auto", "low", "high"],
                    "default": "auto",
                    "description": "Level of detail for image analysis"
                },
                "model": {
                    "type": "string",
                    "description": "Vision-capable model",
                    "default": DEFAULT_CHAT_MODEL
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let params: VisionParams = parse_args(input)?;
        Ok(Value::String(self.client.chat_with_vision(&params).await?))
    }
}

/// Step-by-step problem solving with a reasoning model.
pub struct ReasoningTool {
    client: GrokClient,
}

impl ReasoningTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for ReasoningTool {
    fn name(&self) -> &str {
        "chat_with_reasoning"
    }

    fn description(&self) -> &str {
        "Solve math, logic and other multi-step problems with a reasoning model. \
         Returns the answer together with the reasoning that led to it."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Problem to solve"
                },
                "model": {
                    "type": "string",
                    "enum": REASONING_MODELS,
                    "default": DEFAULT_REASONING_MODEL
                },
                "system_prompt": {
                    "type": "string",
                    "description": "Instructions for the model"
                },
                "reasoning_effort": {
                    "type": "string",
                    "enum": ["low", "high"],
                    "description": "Thinking effort; not accepted by grok-4"
                },
                "temperature": {
                    "type": "number",
                    "description": "Sampling temperature (0.0-2.0)"
                },
                "max_tokens": {
                    "type": "integer",
                    "description": "Maximum tokens to generate"
                },
                "top_p": {
                    "type": "number",
                    "description": "Nucleus sampling (0.0-1.0)"
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let params: ReasoningParams = parse_args(input)?;
        to_value(&self.client.chat_with_reasoning(&params).await?)
    }
}
