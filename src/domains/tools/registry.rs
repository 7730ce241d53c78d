//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static list of available tools (metadata for `tools/list`)
//! - Name-based dispatch for tool calls, shared by every transport

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::{
    GetCitiesTool, GetContestTool, GetCountriesTool, GetFreelancerPortfolioTool,
    GetFreelancerReviewsTool, GetFreelancerTool, GetMyBidsTool, GetMyProfileTool,
    GetProjectBidsTool, GetProjectCommentsTool, GetProjectTool, GetSkillsTool, GetThreadsTool,
    SearchContestsTool, SearchProjectsTool,
};
use super::error::error_result;
use super::handlers::{ApiTool, invoke};
use crate::domains::freelancehunt::FreelancehuntClient;

const CLIENT_NOT_INITIALIZED: &str = "FreelanceHunt client not initialized. Please set FREELANCEHUNT_API_KEY environment variable and restart the server.";

/// Tool registry - manages all available tools.
///
/// The client is optional: without one the registry still lists every tool,
/// but each call answers with a fixed "not initialized" error.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: Option<Arc<FreelancehuntClient>>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Option<Arc<FreelancehuntClient>>) -> Self {
        Self { client }
    }

    /// Whether an API client is available.
    pub fn is_initialized(&self) -> bool {
        self.client.is_some()
    }

    /// Get all tool names, in listing order.
    pub fn tool_names(&self) -> Vec<String> {
        Self::get_all_tools()
            .into_iter()
            .map(|tool| tool.name.into_owned())
            .collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchProjectsTool::to_tool(),
            GetProjectTool::to_tool(),
            GetProjectBidsTool::to_tool(),
            GetProjectCommentsTool::to_tool(),
            GetFreelancerTool::to_tool(),
            GetMyProfileTool::to_tool(),
            GetMyBidsTool::to_tool(),
            GetFreelancerPortfolioTool::to_tool(),
            GetFreelancerReviewsTool::to_tool(),
            SearchContestsTool::to_tool(),
            GetContestTool::to_tool(),
            GetSkillsTool::to_tool(),
            GetCountriesTool::to_tool(),
            GetCitiesTool::to_tool(),
            GetThreadsTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Always returns a result; failures are reported as error payloads.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let Some(client) = self.client.as_deref() else {
            warn!("Tool {} called without an API client", name);
            return error_result(CLIENT_NOT_INITIALIZED);
        };

        match name {
            SearchProjectsTool::NAME => invoke::<SearchProjectsTool>(client, arguments).await,
            GetProjectTool::NAME => invoke::<GetProjectTool>(client, arguments).await,
            GetProjectBidsTool::NAME => invoke::<GetProjectBidsTool>(client, arguments).await,
            GetProjectCommentsTool::NAME => {
                invoke::<GetProjectCommentsTool>(client, arguments).await
            }
            GetFreelancerTool::NAME => invoke::<GetFreelancerTool>(client, arguments).await,
            GetMyProfileTool::NAME => invoke::<GetMyProfileTool>(client, arguments).await,
            GetMyBidsTool::NAME => invoke::<GetMyBidsTool>(client, arguments).await,
            GetFreelancerPortfolioTool::NAME => {
                invoke::<GetFreelancerPortfolioTool>(client, arguments).await
            }
            GetFreelancerReviewsTool::NAME => {
                invoke::<GetFreelancerReviewsTool>(client, arguments).await
            }
            SearchContestsTool::NAME => invoke::<SearchContestsTool>(client, arguments).await,
            GetContestTool::NAME => invoke::<GetContestTool>(client, arguments).await,
            GetSkillsTool::NAME => invoke::<GetSkillsTool>(client, arguments).await,
            GetCountriesTool::NAME => invoke::<GetCountriesTool>(client, arguments).await,
            GetCitiesTool::NAME => invoke::<GetCitiesTool>(client, arguments).await,
            GetThreadsTool::NAME => invoke::<GetThreadsTool>(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(format!("Unknown tool '{name}'"))
            }
        }
    }
}
