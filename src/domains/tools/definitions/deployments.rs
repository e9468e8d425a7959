//! Deployment tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{NoParams, UuidParams, json_text};
use crate::domains::coolify::{CoolifyClient, Pagination};
use crate::domains::tools::handlers::ToolEntry;

/// Parameters for `list_application_deployments`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApplicationDeploymentsParams {
    #[schemars(description = "UUID of the application")]
    pub uuid: String,

    #[schemars(description = "Number of deployments to skip (default: 0)")]
    #[serde(default)]
    pub skip: Option<u32>,

    #[schemars(description = "Number of deployments to return (default: 10)")]
    #[serde(default)]
    pub take: Option<u32>,
}

impl ApplicationDeploymentsParams {
    fn pagination(&self) -> Pagination {
        let default = Pagination::default();
        Pagination {
            skip: self.skip.unwrap_or(default.skip),
            take: self.take.unwrap_or(default.take),
        }
    }
}

pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_deployments",
            "List running and recent deployments across the Coolify instance.",
            |client: Arc<CoolifyClient>, _: NoParams| async move {
                json_text(&client.list_deployments().await?)
            },
        ),
        ToolEntry::new(
            "get_deployment",
            "Get details and status of a single deployment.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.get_deployment(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "list_application_deployments",
            "List the deployment history of one application, newest first.",
            |client: Arc<CoolifyClient>, params: ApplicationDeploymentsParams| async move {
                json_text(
                    &client
                        .list_application_deployments(&params.uuid, params.pagination())
                        .await?,
                )
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let params: ApplicationDeploymentsParams =
            serde_json::from_value(json!({"uuid": "app-1"})).unwrap();
        let page = params.pagination();
        assert_eq!((page.skip, page.take), (0, 10));

        let params: ApplicationDeploymentsParams =
            serde_json::from_value(json!({"uuid": "app-1", "take": 25})).unwrap();
        assert_eq!(params.pagination().take, 25);
    }
}
