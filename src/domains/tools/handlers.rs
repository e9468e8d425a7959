//! Tool handler entries.
//!
//! A [`ToolEntry`] pairs the MCP metadata of a tool (name, description, input
//! schema) with the boxed async handler that runs it. Handlers receive the
//! raw argument object; the entry deserializes it into the tool's typed
//! argument struct before the handler body ever sees it, so a missing or
//! mistyped field fails without touching the network.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::ToolError;
use crate::domains::coolify::CoolifyClient;

/// Future returned by a tool handler: the success text or a tool error.
pub type ToolFuture = BoxFuture<'static, Result<String, ToolError>>;

/// Type-erased tool handler.
pub type ToolHandler = Arc<dyn Fn(Arc<CoolifyClient>, JsonObject) -> ToolFuture + Send + Sync>;

/// A registered tool: metadata plus handler.
#[derive(Clone)]
pub struct ToolEntry {
    tool: Tool,
    handler: ToolHandler,
}

impl ToolEntry {
    /// Build an entry whose arguments deserialize into `P`.
    pub fn new<P, F, Fut>(name: &'static str, description: &'static str, handler: F) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(Arc<CoolifyClient>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, ToolError>> + Send + 'static,
    {
        let tool = Tool {
            name: name.into(),
            description: Some(description.into()),
            input_schema: cached_schema_for_type::<P>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        };

        let handler: ToolHandler = Arc::new(move |client, arguments| {
            match serde_json::from_value::<P>(serde_json::Value::Object(arguments)) {
                Ok(params) => handler(client, params).boxed(),
                Err(e) => future::ready(Err(ToolError::invalid_arguments(e.to_string()))).boxed(),
            }
        });

        Self { tool, handler }
    }

    /// Tool name as registered in MCP.
    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// Tool metadata for `tools/list`.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Validate the arguments and run the handler.
    pub fn call(&self, client: Arc<CoolifyClient>, arguments: JsonObject) -> ToolFuture {
        (self.handler)(client, arguments)
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("name", &self.tool.name)
            .finish_non_exhaustive()
    }
}
