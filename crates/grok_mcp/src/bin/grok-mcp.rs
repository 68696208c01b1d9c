//! Grok MCP server binary.

use anyhow::Result;
use grok_client::{GrokClient, XaiConfig};
use grok_mcp::{ByteTransport, GrokRouter, Router, RouterService, Server};
use tokio::io::{stdin, stdout};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the MCP stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Grok MCP server");

    let config = XaiConfig::from_env()?;
    if !config.has_api_key() {
        tracing::warn!("XAI_API_KEY is not set; every tool call will fail until it is");
    }

    let router = GrokRouter::builder()
        .name("grok")
        .version(env!("CARGO_PKG_VERSION"))
        .client(GrokClient::new(config))
        .build();

    tracing::info!(tools = router.list_tools().len(), "Router initialized");

    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
