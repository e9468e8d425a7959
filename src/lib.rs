//! Coolify MCP Server Library
//!
//! Exposes the Coolify REST API to MCP clients as a catalog of tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **coolify**: typed HTTP client for the Coolify API
//!   - **tools**: tool catalog, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use coolify_mcp_server::core::{Config, McpServer, TransportService};
//! use coolify_mcp_server::domains::coolify::CoolifyClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = CoolifyClient::new(&config.coolify)?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config, client)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
