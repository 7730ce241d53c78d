//! Contest search tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchContestsParams {
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Only contests in any of these skill IDs")]
    #[serde(default)]
    pub skill_ids: Option<Vec<u64>>,
}

#[derive(Debug, Clone)]
pub struct SearchContestsTool;

#[async_trait]
impl ApiTool for SearchContestsTool {
    const NAME: &'static str = "search_contests";
    const DESCRIPTION: &'static str = "Search design and creative contests on FreelanceHunt, optionally restricted to skills.";

    type Params = SearchContestsParams;

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let skill_ids = params.skill_ids.unwrap_or_default();
        let page = client
            .search_contests(page_request(params.page, params.per_page), &skill_ids)
            .await?;
        listing("contests", page)
    }
}
