//! HTTP client for the Coolify REST API.
//!
//! All endpoints live under `<base_url>/api/v1`, except the health check which
//! Coolify serves at `<base_url>/api/health`. Responses are returned as opaque
//! JSON values; a body that is not JSON (the version and health endpoints
//! answer with plain text) is returned as a JSON string.

use reqwest::{Client, RequestBuilder, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{ApiError, ApiResult};
use super::models::{
    BulkEnvelope, CreateApplicationRequest, CreatePrivateKeyRequest, CreateServerRequest,
    CreateServiceRequest, EnvironmentVariable, ExecuteCommandRequest, Pagination,
};
use crate::core::config::CoolifyConfig;
use crate::core::{Error, Result};

/// Authenticated client for one Coolify instance.
#[derive(Debug, Clone)]
pub struct CoolifyClient {
    http: Client,
    api_url: String,
    health_url: String,
}

impl CoolifyClient {
    /// Create a client from validated configuration.
    pub fn new(config: &CoolifyConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|_| Error::config("COOLIFY_API_TOKEN contains invalid header characters"))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        let base = config.base_url.trim_end_matches('/');

        Ok(Self {
            http,
            api_url: format!("{}/api/v1", base),
            health_url: format!("{}/api/health", base),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            warn!(status = status.as_u16(), error = %err, "Coolify request failed");
            return Err(err);
        }

        Ok(decode_body(&body))
    }

    // ========================================================================
    // Generic verbs
    // ========================================================================

    /// Execute a GET request.
    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        debug!(endpoint, "GET request");
        self.send(self.http.get(self.url(endpoint))).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> ApiResult<Value> {
        debug!(endpoint, "GET request with query");
        self.send(self.http.get(self.url(endpoint)).query(query))
            .await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResult<Value> {
        debug!(endpoint, "POST request");
        self.send(self.http.post(self.url(endpoint)).json(body))
            .await
    }

    /// Execute a POST request without a body.
    pub async fn post_empty(&self, endpoint: &str) -> ApiResult<Value> {
        debug!(endpoint, "POST request (no body)");
        self.send(self.http.post(self.url(endpoint))).await
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResult<Value> {
        debug!(endpoint, "PATCH request");
        self.send(self.http.patch(self.url(endpoint)).json(body))
            .await
    }

    /// Execute a DELETE request.
    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        debug!(endpoint, "DELETE request");
        self.send(self.http.delete(self.url(endpoint))).await
    }

    // ========================================================================
    // System
    // ========================================================================

    pub async fn get_version(&self) -> ApiResult<Value> {
        self.get("/version").await
    }

    /// Health check. Not versioned: served at `/api/health`.
    pub async fn health_check(&self) -> ApiResult<Value> {
        debug!(url = %self.health_url, "GET health");
        self.send(self.http.get(&self.health_url)).await
    }

    // ========================================================================
    // Teams
    // ========================================================================

    pub async fn list_teams(&self) -> ApiResult<Value> {
        self.get("/teams").await
    }

    pub async fn get_team(&self, team_id: &str) -> ApiResult<Value> {
        self.get(&format!("/teams/{}", team_id)).await
    }

    pub async fn get_current_team(&self) -> ApiResult<Value> {
        self.get("/teams/current").await
    }

    pub async fn get_current_team_members(&self) -> ApiResult<Value> {
        self.get("/teams/current/members").await
    }

    // ========================================================================
    // Servers
    // ========================================================================

    pub async fn list_servers(&self) -> ApiResult<Value> {
        self.get("/servers").await
    }

    pub async fn create_server(&self, request: &CreateServerRequest) -> ApiResult<Value> {
        self.post("/servers", request).await
    }

    pub async fn validate_server(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/servers/{}/validate", uuid)).await
    }

    pub async fn get_server_resources(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/servers/{}/resources", uuid)).await
    }

    pub async fn get_server_domains(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/servers/{}/domains", uuid)).await
    }

    // ========================================================================
    // Applications
    // ========================================================================

    pub async fn list_applications(&self) -> ApiResult<Value> {
        self.get("/applications").await
    }

    pub async fn create_application(&self, request: &CreateApplicationRequest) -> ApiResult<Value> {
        self.post("/applications", request).await
    }

    pub async fn start_application(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/applications/{}/start", uuid)).await
    }

    pub async fn stop_application(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/applications/{}/stop", uuid)).await
    }

    pub async fn restart_application(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/applications/{}/restart", uuid)).await
    }

    /// Run a shell command inside the application's container.
    pub async fn execute_command_application(&self, uuid: &str, command: &str) -> ApiResult<Value> {
        self.post(
            &format!("/applications/{}/execute", uuid),
            &ExecuteCommandRequest { command },
        )
        .await
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub async fn list_services(&self) -> ApiResult<Value> {
        self.get("/services").await
    }

    pub async fn create_service(&self, request: &CreateServiceRequest) -> ApiResult<Value> {
        self.post("/services", request).await
    }

    pub async fn start_service(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/services/{}/start", uuid)).await
    }

    pub async fn stop_service(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/services/{}/stop", uuid)).await
    }

    pub async fn restart_service(&self, uuid: &str) -> ApiResult<Value> {
        self.post_empty(&format!("/services/{}/restart", uuid)).await
    }

    // ========================================================================
    // Deployments
    // ========================================================================

    pub async fn list_deployments(&self) -> ApiResult<Value> {
        self.get("/deployments").await
    }

    pub async fn get_deployment(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/deployments/{}", uuid)).await
    }

    pub async fn list_application_deployments(
        &self,
        uuid: &str,
        page: Pagination,
    ) -> ApiResult<Value> {
        self.get_with_query(&format!("/deployments/applications/{}", uuid), &page)
            .await
    }

    // ========================================================================
    // Private keys
    // ========================================================================

    pub async fn list_private_keys(&self) -> ApiResult<Value> {
        self.get("/private-keys").await
    }

    pub async fn create_private_key(&self, request: &CreatePrivateKeyRequest) -> ApiResult<Value> {
        self.post("/private-keys", request).await
    }

    // ========================================================================
    // Application environment variables
    // ========================================================================

    pub async fn list_application_envs(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/applications/{}/envs", uuid)).await
    }

    pub async fn create_application_env(
        &self,
        uuid: &str,
        env: &EnvironmentVariable,
    ) -> ApiResult<Value> {
        self.post(&format!("/applications/{}/envs", uuid), env)
            .await
    }

    /// Update a variable by key. The variable's own uuid is never sent.
    pub async fn update_application_env(
        &self,
        uuid: &str,
        env: &EnvironmentVariable,
    ) -> ApiResult<Value> {
        self.patch(&format!("/applications/{}/envs", uuid), &env.without_uuid())
            .await
    }

    pub async fn bulk_update_application_envs(
        &self,
        uuid: &str,
        envs: &[EnvironmentVariable],
    ) -> ApiResult<Value> {
        self.patch(
            &format!("/applications/{}/envs/bulk", uuid),
            &BulkEnvelope { data: envs },
        )
        .await
    }

    pub async fn delete_application_env(&self, uuid: &str, env_uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/applications/{}/envs/{}", uuid, env_uuid))
            .await
    }

    // ========================================================================
    // Service environment variables
    // ========================================================================

    pub async fn list_service_envs(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/services/{}/envs", uuid)).await
    }

    pub async fn create_service_env(&self, uuid: &str, env: &EnvironmentVariable) -> ApiResult<Value> {
        self.post(&format!("/services/{}/envs", uuid), env).await
    }

    pub async fn update_service_env(&self, uuid: &str, env: &EnvironmentVariable) -> ApiResult<Value> {
        self.patch(&format!("/services/{}/envs", uuid), env).await
    }

    pub async fn bulk_update_service_envs(
        &self,
        uuid: &str,
        envs: &[EnvironmentVariable],
    ) -> ApiResult<Value> {
        self.patch(
            &format!("/services/{}/envs/bulk", uuid),
            &BulkEnvelope { data: envs },
        )
        .await
    }

    pub async fn delete_service_env(&self, uuid: &str, env_uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/services/{}/envs/{}", uuid, env_uuid))
            .await
    }
}

/// Decode a successful response body: JSON if possible, raw text otherwise.
fn decode_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
