//! Domains module containing business logic organized by bounded contexts.
//!
//! - **coolify**: the HTTP client for the Coolify REST API
//! - **tools**: the MCP tool catalog built on top of that client

pub mod coolify;
pub mod tools;
