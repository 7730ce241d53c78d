//! Single project lookup tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::require_id;
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    #[schemars(range(min = 1))]
    pub project_id: u64,
}

#[derive(Debug, Clone)]
pub struct GetProjectTool;

#[async_trait]
impl ApiTool for GetProjectTool {
    const NAME: &'static str = "get_project";
    const DESCRIPTION: &'static str = "Get detailed information about a specific project: description, skills, budget, status, employer and links.";

    type Params = GetProjectParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("project_id", params.project_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let project = client.get_project(params.project_id).await?;
        Ok(serde_json::to_value(project)?)
    }
}
