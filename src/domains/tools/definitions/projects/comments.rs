//! Project comments tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request, require_id};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetProjectCommentsParams {
    #[schemars(description = "Project ID")]
    #[schemars(range(min = 1))]
    pub project_id: u64,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Clone)]
pub struct GetProjectCommentsTool;

#[async_trait]
impl ApiTool for GetProjectCommentsTool {
    const NAME: &'static str = "get_project_comments";
    const DESCRIPTION: &'static str = "List the public comments on a project, including threaded replies.";

    type Params = GetProjectCommentsParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("project_id", params.project_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let page = client
            .get_project_comments(params.project_id, page_request(params.page, params.per_page))
            .await?;
        listing("comments", page)
    }
}
