//! Message threads tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetThreadsParams {
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Clone)]
pub struct GetThreadsTool;

#[async_trait]
impl ApiTool for GetThreadsTool {
    const NAME: &'static str = "get_threads";
    const DESCRIPTION: &'static str = "Get the authenticated user's message threads (conversations) on FreelanceHunt.";

    type Params = GetThreadsParams;

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let page = client
            .get_threads(page_request(params.page, params.per_page))
            .await?;
        listing("threads", page)
    }
}
