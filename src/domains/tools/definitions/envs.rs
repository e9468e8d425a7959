//! Environment variable tools for applications and services.
//!
//! Services run pre-built images, so a build-time flag on a service variable
//! is accepted by the API but never used. Service tools forward the request
//! unchanged and append an advisory to the result text.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{UuidParams, json_text, with_build_time_warning};
use crate::domains::coolify::{CoolifyClient, EnvironmentVariable};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::ToolEntry;

/// Parameters for creating or updating a single variable.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EnvParams {
    #[schemars(description = "UUID of the application or service owning the variable")]
    pub uuid: String,

    #[schemars(description = "Variable name")]
    pub key: String,

    #[schemars(description = "Variable value")]
    pub value: String,

    #[schemars(description = "Make the variable available at build time")]
    #[serde(default)]
    pub is_build_time: Option<bool>,

    #[schemars(description = "Apply the variable to preview deployments")]
    #[serde(default)]
    pub is_preview: Option<bool>,

    #[schemars(description = "Treat the value literally (no variable interpolation)")]
    #[serde(default)]
    pub is_literal: Option<bool>,
}

impl EnvParams {
    fn to_env(&self) -> EnvironmentVariable {
        EnvironmentVariable {
            uuid: None,
            key: self.key.clone(),
            value: self.value.clone(),
            is_build_time: self.is_build_time,
            is_preview: self.is_preview,
            is_literal: self.is_literal,
        }
    }
}

/// Parameters for the bulk update tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulkEnvParams {
    #[schemars(description = "UUID of the application or service owning the variables")]
    pub uuid: String,

    #[schemars(description = "Variables to create or update, each with key and value")]
    pub envs: Vec<EnvironmentVariable>,
}

impl BulkEnvParams {
    fn any_build_time(&self) -> bool {
        self.envs.iter().any(EnvironmentVariable::is_build_time)
    }
}

/// Parameters for the delete tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteEnvParams {
    #[schemars(description = "UUID of the application or service owning the variable")]
    pub uuid: String,

    #[schemars(description = "UUID of the environment variable to delete")]
    pub env_uuid: String,
}

pub fn entries() -> Vec<ToolEntry> {
    let mut entries = application_entries();
    entries.extend(service_entries());
    entries
}

fn application_entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_application_envs",
            "List the environment variables of an application.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.list_application_envs(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "create_application_env",
            "Create an environment variable on an application.",
            |client: Arc<CoolifyClient>, params: EnvParams| async move {
                json_text(
                    &client
                        .create_application_env(&params.uuid, &params.to_env())
                        .await?,
                )
            },
        ),
        ToolEntry::new(
            "update_application_env",
            "Update an application environment variable, matched by key.",
            |client: Arc<CoolifyClient>, params: EnvParams| async move {
                json_text(
                    &client
                        .update_application_env(&params.uuid, &params.to_env())
                        .await?,
                )
            },
        ),
        ToolEntry::new(
            "bulk_update_application_envs",
            "Create or update several application environment variables in one request.",
            |client: Arc<CoolifyClient>, params: BulkEnvParams| async move {
                json_text(
                    &client
                        .bulk_update_application_envs(&params.uuid, &params.envs)
                        .await?,
                )
            },
        ),
        ToolEntry::new(
            "delete_application_env",
            "Delete an environment variable from an application.",
            |client: Arc<CoolifyClient>, params: DeleteEnvParams| async move {
                json_text(
                    &client
                        .delete_application_env(&params.uuid, &params.env_uuid)
                        .await?,
                )
            },
        ),
    ]
}

fn service_entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "list_service_envs",
            "List the environment variables of a service.",
            |client: Arc<CoolifyClient>, params: UuidParams| async move {
                json_text(&client.list_service_envs(&params.uuid).await?)
            },
        ),
        ToolEntry::new(
            "create_service_env",
            "Create an environment variable on a service. The build-time flag has no effect on services.",
            |client: Arc<CoolifyClient>, params: EnvParams| async move {
                let env = params.to_env();
                let text = json_text(&client.create_service_env(&params.uuid, &env).await?)?;
                Ok::<_, ToolError>(with_build_time_warning(text, env.is_build_time()))
            },
        ),
        ToolEntry::new(
            "update_service_env",
            "Update a service environment variable, matched by key. The build-time flag has no effect on services.",
            |client: Arc<CoolifyClient>, params: EnvParams| async move {
                let env = params.to_env();
                let text = json_text(&client.update_service_env(&params.uuid, &env).await?)?;
                Ok::<_, ToolError>(with_build_time_warning(text, env.is_build_time()))
            },
        ),
        ToolEntry::new(
            "bulk_update_service_envs",
            "Create or update several service environment variables in one request. The build-time flag has no effect on services.",
            |client: Arc<CoolifyClient>, params: BulkEnvParams| async move {
                let text = json_text(
                    &client
                        .bulk_update_service_envs(&params.uuid, &params.envs)
                        .await?,
                )?;
                Ok::<_, ToolError>(with_build_time_warning(text, params.any_build_time()))
            },
        ),
        ToolEntry::new(
            "delete_service_env",
            "Delete an environment variable from a service.",
            |client: Arc<CoolifyClient>, params: DeleteEnvParams| async move {
                json_text(
                    &client
                        .delete_service_env(&params.uuid, &params.env_uuid)
                        .await?,
                )
            },
        ),
    ]
}
