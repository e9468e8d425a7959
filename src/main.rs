//! Coolify MCP Server Entry Point
//!
//! Loads configuration, initializes logging, connects the Coolify client and
//! starts the server with the configured transport. Missing Coolify settings
//! abort startup before any session is served.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use coolify_mcp_server::core::{Config, McpServer, TransportService};
use coolify_mcp_server::domains::coolify::CoolifyClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Coolify API: {} (timeout {} ms)",
        config.coolify.base_url, config.coolify.timeout_ms
    );

    let client = CoolifyClient::new(&config.coolify)?;
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, client);

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Everything goes to stderr; stdout belongs to the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
