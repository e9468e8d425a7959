//! Tools domain module.
//!
//! This module exposes the Coolify API as MCP tools. Each tool maps one
//! argument struct onto one [`CoolifyClient`](crate::domains::coolify::CoolifyClient)
//! call and returns the response as pretty-printed JSON text.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool definitions, one file per resource family
//! - `handlers.rs` - `ToolEntry`: metadata + typed, boxed async handler
//! - `registry.rs` - Name lookup, dispatch and result shaping
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a client method in `domains/coolify/client.rs`
//! 2. Add a `ToolEntry::new(...)` to the matching `definitions/*.rs` file
//!
//! **No need to modify `server.rs` or the transports!**

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::{ToolEntry, ToolFuture, ToolHandler};
pub use registry::ToolRegistry;
