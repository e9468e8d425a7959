//! MCP Server implementation and lifecycle management.
//!
//! The handler answers `tools/list` and `tools/call` by delegating to the
//! [`ToolRegistry`]. Tool failures, including an unknown tool name, come
//! back as error-flagged results rather than protocol errors, so the session
//! always stays usable.
//!
//! Adding a tool means adding an entry under `domains/tools/definitions/`;
//! this file does not change.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{coolify::CoolifyClient, tools::ToolRegistry};

const INSTRUCTIONS: &str = "Manage a Coolify instance: teams, servers, services, applications, \
deployments, private keys and environment variables. Resources are addressed by UUID; call the \
matching list_* tool first to discover them.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog bound to the shared Coolify client.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server around an already configured Coolify client.
    pub fn new(config: Config, client: CoolifyClient) -> Self {
        let registry = ToolRegistry::new(Arc::new(client));
        info!("Registered {} tools", registry.tool_names().len());

        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Instructions advertised to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// All tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Non-object arguments are treated as absent, which makes any tool with
    /// required fields fail validation.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        };
        let result = self.registry.call_tool(name, arguments).await;
        serde_json::to_value(&result).unwrap_or_else(|e| {
            serde_json::json!({
                "content": [{ "type": "text", "text": format!("Error: {}", e) }],
                "isError": true
            })
        })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .registry
            .call_tool(&request.name, request.arguments)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CoolifyConfig, LoggingConfig, ServerConfig};
    use crate::core::transport::TransportConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(base_url: &str) -> McpServer {
        let coolify = CoolifyConfig {
            base_url: base_url.to_string(),
            api_token: "1|test".to_string(),
            timeout_ms: 5_000,
        };
        let client = CoolifyClient::new(&coolify).unwrap();
        let config = Config {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            coolify,
        };
        McpServer::new(config, client)
    }

    #[test]
    fn test_info_advertises_tools_only() {
        let server = server_for("http://127.0.0.1:1");
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "coolify-mcp-server");
    }

    #[test]
    fn test_list_tools_json_shape() {
        let server = server_for("http://127.0.0.1:1");
        let tools = server.list_tools();
        assert!(!tools.is_empty());
        for tool in &tools {
            assert!(tool["name"].is_string());
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_http_call_unknown_tool_is_error_result() {
        let server = server_for("http://127.0.0.1:1");
        let result = server.call_tool("nope", json!({})).await;
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Error: Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_http_call_success() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/version"))
            .respond_with(ResponseTemplate::new(200).set_body_string("4.0.0-beta.360"))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let result = server.call_tool("get_version", json!({})).await;
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "\"4.0.0-beta.360\"");
    }
}
