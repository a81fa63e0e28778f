// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use rocketlane_mcp::config::McpConfig;
use rocketlane_mcp::server::McpServer;
use rocketlane_mcp::tools::{register_all, ToolRegistry};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "rocketlane-mcp")]
#[command(about = "MCP server exposing the Rocketlane REST API as tools", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "rocketlane-mcp.toml")]
    config: PathBuf,

    /// Rocketlane API base URL, without the version segment
    #[arg(long, env = "ROCKETLANE_BASE_URL")]
    base_url: Option<String>,

    /// Only expose tools with this tag (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Rocketlane MCP Server starting...");

    let mut config = McpConfig::load(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.rocketlane.base_url = base_url;
    }
    if !args.tags.is_empty() {
        config.tools.tags = args.tags;
    }

    let client = Arc::new(config.build_client()?);
    tracing::info!(
        base_url = %client.base_url(),
        api_key_env = %config.rocketlane.api_key_env,
        "Rocketlane client ready"
    );

    let mut registry = ToolRegistry::new();
    register_all(&mut registry, client, &config.tools.tags);
    if registry.is_empty() {
        tracing::warn!(tags = ?config.tools.tags, "No tools match the configured tags");
    }

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
