//! Single contest lookup tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::require_id;
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetContestParams {
    #[schemars(description = "Contest ID")]
    #[schemars(range(min = 1))]
    pub contest_id: u64,
}

#[derive(Debug, Clone)]
pub struct GetContestTool;

#[async_trait]
impl ApiTool for GetContestTool {
    const NAME: &'static str = "get_contest";
    const DESCRIPTION: &'static str = "Get detailed information about a specific contest: brief, budget, duration and number of entries.";

    type Params = GetContestParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("contest_id", params.contest_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let contest = client.get_contest(params.contest_id).await?;
        Ok(serde_json::to_value(contest)?)
    }
}
