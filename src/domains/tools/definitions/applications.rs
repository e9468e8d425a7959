//! Application tools: listing, creation, lifecycle and remote commands.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{NoParams, UuidParams, json_text};
use crate::domains::coolify::{CoolifyClient, CreateApplicationRequest};
use crate::domains::tools::handlers::ToolEntry;

/// Parameters for `execute_command_application`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExecuteCommandParams {
    #[schemars(description = "UUID of the application whose container runs the command")]
    pub uuid: String,

    #[schemars(description = "Shell command to execute inside the container")]
    pub command: String,
}

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_applications",
            "List all applications in Coolify.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.list_applications().await?)
            },
        ),
        ToolEntry::new(
            "create_application",
            "Create a new application in a project environment, optionally sourced from a Git repository.",
            |client: Arc<CoolifyClient>, params: CreateApplicationRequest| async move {
                json_text(&client.create_application(&params).await?)
            },
        ),
        ToolEntry::new(
            "start_application",
            "Start (deploy) an application.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.start_application(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "stop_application",
            "Stop a running application.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.stop_application(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "restart_application",
            "Restart an application, e.g. to apply configuration changes.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.restart_application(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "execute_command_application",
            "Execute a command inside a running application container. Some Coolify versions do not expose this endpoint.",
            |client: Arc<CoolifyClient>, params: ExecuteCommandParams| async move {
                info!(uuid = %params.uuid, "Executing command in application container");
                json_text(
                    &client
                        .execute_command_application(&params.uuid, &params.command)
                        .await?,
                )
            },
        ),
    ]
}
