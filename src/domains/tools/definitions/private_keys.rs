//! Private key tools.

use std::sync::Arc;

use super::common::{NoParams, json_text};
use crate::domains::coolify::{CoolifyClient, CreatePrivateKeyRequest};
use crate::domains::tools::handlers::ToolEntry;

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_private_keys",
            "List the SSH private keys stored in Coolify.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.list_private_keys().await?)
            },
        ),
        ToolEntry::new(
            "create_private_key",
            "Store a new SSH private key for server authentication or Git access.",
            |client: Arc<CoolifyClient>, params: CreatePrivateKeyRequest| async move {
                json_text(&client.create_private_key(&params).await?)
            },
        ),
    ]
}
