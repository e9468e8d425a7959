//! Service tools: listing, creation and lifecycle.

use std::sync::Arc;

use super::common::{NoParams, UuidParams, json_text};
use crate::domains::coolify::{CoolifyClient, CreateServiceRequest};
use crate::domains::tools::handlers::ToolEntry;

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_services",
            "List all services in Coolify. Services run pre-built container images.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.list_services().await?)
            },
        ),
        ToolEntry::new(
            "create_service",
            "Create a new service on a server within a project.",
            |client: Arc<CoolifyClient>, params: CreateServiceRequest| async move {
                json_text(&client.create_service(&params).await?)
            },
        ),
        ToolEntry::new(
            "start_service",
            "Start a service.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.start_service(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "stop_service",
            "Stop a running service.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.stop_service(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "restart_service",
            "Restart a service.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.restart_service(&params.uuid).await?)
            },
        ),
    ]
}
