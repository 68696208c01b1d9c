//! Image generation tool.

use crate::McpResult;
use crate::tools::{McpTool, parse_args, to_value};
use async_trait::async_trait;
use grok_client::{DEFAULT_IMAGE_MODEL, GrokClient, ImageParams};
use serde_json::{Value, json};

/// Generates images from a text description.
pub struct GenerateImageTool {
    client: GrokClient,
}

impl GenerateImageTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for GenerateImageTool {
    fn name(&self) -> &str {
        "generate_image"
    }

    fn description(&self) -> &str {
        "Generate images from a description. The model may revise the prompt; \
         the revised prompt is returned alongside the images."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "What the image should show"
                },
                "n": {
                    "type": "integer",
                    "description": "Number of images",
                    "default": 1,
                    "minimum": 1
                },
                "response_format": {
                    "type": "string",
                    "enum": ["url", "b64_json"],
                    "default": "url"
                },
                "model": {
                    "type": "string",
                    "default": DEFAULT_IMAGE_MODEL
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let params: ImageParams = parse_args(input)?;
        to_value(&self.client.generate_image(&params).await?)
    }
}
