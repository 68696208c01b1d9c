//! Live search tool.

use crate::McpResult;
use crate::tools::{McpTool, parse_args, to_value};
use async_trait::async_trait;
use grok_client::{DEFAULT_CHAT_MODEL, DEFAULT_MAX_SEARCH_RESULTS, GrokClient, SearchParams};
use serde_json::{Value, json};

/// Answers grounded in live web, news, X and RSS results.
pub struct LiveSearchTool {
    client: GrokClient,
}

impl LiveSearchTool {
    /// Creates the tool.
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for LiveSearchTool {
    fn name(&self) -> &str {
        "live_search"
    }

    fn description(&self) -> &str {
        "Search the web, news, X and RSS feeds in real time and answer with citations. \
         Use for current events and fact-checking."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Question or search query"
                },
                "model": {
                    "type": "string",
                    "default": DEFAULT_CHAT_MODEL
                },
                "mode": {
                    "type": "string",
                    "enum": ["on", "off", "auto"],
                    "default": "on"
                },
                "return_citations": {
                    "type": "boolean",
                    "default": true
                },
                "from_date": {
                    "type": "string",
                    "description": "Earliest result date (YYYY-MM-DD)"
                },
                "to_date": {
                    "type": "string",
                    "description": "Latest result date (YYYY-MM-DD)"
                },
                "max_search_results": {
                    "type": "integer",
                    "default": DEFAULT_MAX_SEARCH_RESULTS
                },
                "country": {
                    "type": "string",
                    "description": "Country code for web and news results (e.g. US)"
                },
                "rss_links": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "RSS feed URLs to include"
                },
                "sources": {
                    "type": "array",
                    "items": {"type": "object"},
                    "description": "Explicit source descriptors; overrides country and rss_links"
                },
                "system_prompt": {
                    "type": "string"
                }
            },
            "required": ["prompt"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let params: SearchParams = parse_args(input)?;
        to_value(&self.client.live_search(&params).await?)
    }
}
