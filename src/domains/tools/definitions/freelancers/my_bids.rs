//! Authenticated user's bids tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::freelancehunt::models::BidFilters;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetMyBidsParams {
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Only bids with this status (e.g. active, revoked, rejected)")]
    #[serde(default)]
    pub status: Option<String>,

    #[schemars(description = "Only bids placed on this project")]
    #[serde(default)]
    pub project_id: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GetMyBidsTool;

#[async_trait]
impl ApiTool for GetMyBidsTool {
    const NAME: &'static str = "get_my_bids";
    const DESCRIPTION: &'static str = "List the bids placed by the authenticated user, optionally filtered by status or project.";

    type Params = GetMyBidsParams;

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let filters = BidFilters {
            status: params.status,
            is_winner: None,
            project_id: params.project_id,
        };
        let page = client
            .get_my_bids(page_request(params.page, params.per_page), &filters)
            .await?;
        listing("my_bids", page)
    }
}
