//! Freelancer portfolio tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request, require_id};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetFreelancerPortfolioParams {
    #[schemars(description = "Freelancer ID")]
    #[schemars(range(min = 1))]
    pub freelancer_id: u64,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Clone)]
pub struct GetFreelancerPortfolioTool;

#[async_trait]
impl ApiTool for GetFreelancerPortfolioTool {
    const NAME: &'static str = "get_freelancer_portfolio";
    const DESCRIPTION: &'static str = "List a freelancer's portfolio items (works, images, links, views and votes).";

    type Params = GetFreelancerPortfolioParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("freelancer_id", params.freelancer_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let page = client
            .get_freelancer_portfolio(
                params.freelancer_id,
                page_request(params.page, params.per_page),
            )
            .await?;
        listing("portfolio", page)
    }
}
