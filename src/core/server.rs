//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool listing and dispatch are delegated to the
//! [`ToolRegistry`], which is shared by every transport.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Freelancehunt marketplace tools: search and inspect projects, bids, comments, freelancers, contests, threads and reference data (skills, countries, cities). All tools are read-only.";

/// The main MCP server handler.
///
/// Cheap to clone: the configuration and the API client are shared.
#[derive(Debug, Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry holding the API client.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// A missing or unusable API key does not prevent startup: the server
    /// runs degraded, still lists its tools, and answers every call with an
    /// error payload.
    pub fn new(config: Config) -> Self {
        let client = match FreelancehuntClient::new(&config.api) {
            Ok(client) => {
                info!(
                    "Freelancehunt client ready ({}, min delay {:?})",
                    client.base_url(),
                    config.api.request_delay
                );
                Some(Arc::new(client))
            }
            Err(e) => {
                warn!("{}", e);
                warn!("Starting without API access; tool calls will fail until FREELANCEHUNT_API_KEY is set");
                None
            }
        };

        Self::with_registry(config, ToolRegistry::new(client))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry,
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

    /// Server instructions sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Whether the Freelancehunt client was created.
    pub fn is_initialized(&self) -> bool {
        self.registry.is_initialized()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
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
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> CallToolResult {
        self.registry.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
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
            tools: ToolRegistry::get_all_tools(),
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
    use crate::domains::freelancehunt::testing::StubApi;
    use serde_json::json;

    #[test]
    fn test_server_without_api_key_is_degraded() {
        let server = McpServer::new(Config::default());
        assert!(!server.is_initialized());
        assert_eq!(server.name(), "freelancehunt-mcp");
        assert_eq!(server.list_tools().len(), 15);
    }

    #[test]
    fn test_server_info_advertises_tools_only() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.instructions.as_deref(), Some(INSTRUCTIONS));
    }

    #[test]
    fn test_http_tool_listing_shape() {
        let server = McpServer::new(Config::default());
        let tools = server.list_tools();
        let first = &tools[0];
        assert_eq!(first["name"], "search_projects");
        assert!(first["description"].is_string());
        assert_eq!(first["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_degraded_server_call() {
        let server = McpServer::new(Config::default());
        let result = server.call_tool("get_skills", None).await;
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_server_with_api_key_calls_api() {
        let stub = StubApi::start().await;
        stub.respond("/skills", 200, json!({ "data": [{ "id": 1, "name": "Rust" }] }));

        let mut config = Config::default();
        config.api = stub.config();
        let server = McpServer::new(config);
        assert!(server.is_initialized());

        let result = server.call_tool("get_skills", None).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(stub.requests().len(), 1);
    }
}
