//! Server tools.

use std::sync::Arc;

use super::common::{NoParams, UuidParams, json_text};
use crate::domains::coolify::{CoolifyClient, CreateServerRequest};
use crate::domains::tools::handlers::ToolEntry;

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_servers",
            "List all servers registered in Coolify. Returns the server UUIDs other tools need.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.list_servers().await?)
            },
        ),
        ToolEntry::new(
            "create_server",
            "Register a new server in Coolify. Requires SSH access details and the UUID of a stored private key.",
            |client: Arc<CoolifyClient>, params: CreateServerRequest| async move {
                json_text(&client.create_server(&params).await?)
            },
        ),
        ToolEntry::new(
            "validate_server",
            "Validate a server's configuration and SSH connectivity.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.validate_server(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "get_server_resources",
            "List the applications and services deployed on a server.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.get_server_resources(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "get_server_domains",
            "List the domains routed to a server.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.get_server_domains(&params.uuid).await?)
            },
        ),
    ]
}
