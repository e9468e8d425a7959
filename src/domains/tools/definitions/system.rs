//! Instance-level tools: version and health.

use std::sync::Arc;

use super::common::{NoParams, json_text};
use crate::domains::coolify::CoolifyClient;
use crate::domains::tools::handlers::ToolEntry;

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "get_version",
            "Get the version of the Coolify instance.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.get_version().await?)
            },
        ),
        ToolEntry::new(
            "health_check",
            "Check Coolify API health status. Some Coolify versions do not expose this endpoint.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.health_check().await?)
            },
        ),
    ]
}
