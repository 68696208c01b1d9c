//! Model Context Protocol (MCP) server for xAI Grok.
//!
//! Exposes Grok chat, vision, image generation, reasoning, live search and
//! server-stored conversations as MCP tools.
//!
//! # Usage
//!
//! ```no_run
//! use grok_client::GrokClient;
//! use grok_mcp::{ByteTransport, GrokRouter, RouterService, Server};
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = GrokRouter::builder()
//!         .name("grok")
//!         .version(env!("CARGO_PKG_VERSION"))
//!         .client(GrokClient::from_env()?)
//!         .build();
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{GrokRouter, GrokRouterBuilder};
pub use tools::{McpTool, ToolRegistry};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
