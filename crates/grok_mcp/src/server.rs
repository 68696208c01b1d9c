//! MCP server implementation.

use crate::McpError;
use crate::tools::ToolRegistry;
use grok_client::GrokClient;
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    prompt::Prompt,
    protocol::ServerCapabilities,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info, instrument, warn};

/// MCP server for Grok implementing the Router trait.
///
/// Each router owns its tool registry, and with it the conversation used
/// by the `chat` tool.
#[derive(Clone)]
pub struct GrokRouter {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl GrokRouter {
    /// Creates a new router builder.
    pub fn builder() -> GrokRouterBuilder {
        GrokRouterBuilder::default()
    }

    /// Returns the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

/// Text content for a tool result: strings verbatim, anything else as pretty JSON.
fn result_text(result: Value) -> String {
    match result {
        Value::String(text) => text,
        other => serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string()),
    }
}

fn to_tool_error(error: McpError) -> ToolError {
    if error.is_invalid_parameters() {
        ToolError::InvalidParameters(error.to_string())
    } else {
        ToolError::ExecutionError(error.to_string())
    }
}

impl Router for GrokRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "Grok MCP Server v{}\n\n\
            This server exposes xAI's Grok models: chat with optional history, image \
            understanding, image generation, reasoning, live web search and conversations \
            stored server-side.\n\n\
            Available tools: {}",
            self.version,
            self.tools
                .list()
                .iter()
                .map(|t| t.name().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, "Tool called");

        let tools = self.tools.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match tools.execute(&tool_name, arguments).await {
                Ok(result) => {
                    info!(tool = %tool_name, "Tool executed successfully");
                    Ok(vec![Content::text(result_text(result))])
                }
                Err(e) => {
                    warn!(tool = %tool_name, error = %e, "Tool execution failed");
                    Err(to_tool_error(e))
                }
            }
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        vec![]
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move { Err(ResourceError::NotFound(format!("Resource {} not found", uri))) })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move { Err(PromptError::NotFound(format!("Prompt {} not found", prompt_name))) })
    }
}

/// Builder for the Grok MCP router.
#[derive(Default)]
pub struct GrokRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
}

impl GrokRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Registers every Grok tool backed by `client`.
    pub fn client(mut self, client: GrokClient) -> Self {
        self.tools = Some(ToolRegistry::with_client(client));
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the router.
    pub fn build(self) -> GrokRouter {
        GrokRouter {
            name: self.name.unwrap_or_else(|| "grok".to_string()),
            version: self.version.unwrap_or_else(|| "0.1.0".to_string()),
            tools: self.tools.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_pass_through_and_objects_are_pretty() {
        assert_eq!(result_text(json!("plain reply")), "plain reply");
        assert_eq!(result_text(json!({"a": 1})), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn invalid_input_maps_to_invalid_parameters() {
        let err = to_tool_error(McpError::InvalidInput("missing field".to_string()));
        assert!(matches!(err, ToolError::InvalidParameters(_)));

        let err = to_tool_error(McpError::ToolNotFound("nope".to_string()));
        assert!(matches!(err, ToolError::ExecutionError(_)));
    }
}
