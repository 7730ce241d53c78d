//! Project bids tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request, require_id};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::freelancehunt::models::BidFilters;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetProjectBidsParams {
    #[schemars(description = "Project ID")]
    #[schemars(range(min = 1))]
    pub project_id: u64,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Only bids with this status (e.g. active, revoked, rejected)")]
    #[serde(default)]
    pub status: Option<String>,

    #[schemars(description = "Only winning (true) or non-winning (false) bids")]
    #[serde(default)]
    pub is_winner: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetProjectBidsTool;

#[async_trait]
impl ApiTool for GetProjectBidsTool {
    const NAME: &'static str = "get_project_bids";
    const DESCRIPTION: &'static str = "List the bids placed on a project, optionally filtered by bid status or winner flag.";

    type Params = GetProjectBidsParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("project_id", params.project_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let filters = BidFilters {
            status: params.status,
            is_winner: params.is_winner,
            project_id: None,
        };
        let page = client
            .get_project_bids(
                params.project_id,
                page_request(params.page, params.per_page),
                &filters,
            )
            .await?;
        listing("bids", page)
    }
}
