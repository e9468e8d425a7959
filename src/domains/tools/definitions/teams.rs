//! Team tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{NoParams, json_text};
use crate::domains::coolify::CoolifyClient;
use crate::domains::tools::handlers::ToolEntry;

/// Parameters for `get_team`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTeamParams {
    #[schemars(description = "ID of the team to retrieve, as returned by list_teams")]
    pub team_id: String,
}

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_teams",
            "List all teams the authenticated user has access to.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.list_teams().await?)
            },
        ),
        ToolEntry::new(
            "get_team",
            "Get details of a specific team by ID. Team IDs come from list_teams.",
            |client: Arc<CoolifyClient>, params: GetTeamParams| async move {
                json_text(&client.get_team(&params.team_id).await?)
            },
        ),
        ToolEntry::new(
            "get_current_team",
            "Get the team associated with the configured API token.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.get_current_team().await?)
            },
        ),
        ToolEntry::new(
            "get_current_team_members",
            "List the members of the team associated with the configured API token.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.get_current_team_members().await?)
            },
        ),
    ]
}
