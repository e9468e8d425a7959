//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed catalog of tools, in listing order
//! - O(1) name lookup for dispatch
//! - The protocol boundary: every outcome becomes a well-formed `CallToolResult`

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::ToolError;
use super::definitions::all_entries;
use super::handlers::ToolEntry;
use crate::domains::coolify::CoolifyClient;

/// Tool registry - owns the client and every registered tool.
#[derive(Debug)]
pub struct ToolRegistry {
    client: Arc<CoolifyClient>,
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create the registry with the full tool catalog.
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self::with_entries(client, all_entries())
    }

    /// Create a registry from an explicit list of entries.
    pub fn with_entries(client: Arc<CoolifyClient>, entries: Vec<ToolEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name().to_string(), position).is_some() {
                warn!("Duplicate tool name registered: {}", entry.name());
            }
        }

        Self {
            client,
            entries,
            index,
        }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    /// Get all tools as Tool models (metadata), in catalog order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool().clone()).collect()
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Run a tool and return its success text or error.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<String, ToolError> {
        let entry = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        entry.call(self.client.clone(), arguments).await
    }

    /// Call a tool by name.
    ///
    /// Never fails: unknown tools, invalid arguments and API errors all come
    /// back as a single text item reading `Error: <message>` with the error
    /// flag set.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool called: {}", name);

        match self.dispatch(name, arguments.unwrap_or_default()).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }
}
