//! Freelancer profile lookup tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::require_id;
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetFreelancerParams {
    #[schemars(description = "Freelancer ID")]
    #[schemars(range(min = 1))]
    pub freelancer_id: u64,
}

#[derive(Debug, Clone)]
pub struct GetFreelancerTool;

#[async_trait]
impl ApiTool for GetFreelancerTool {
    const NAME: &'static str = "get_freelancer";
    const DESCRIPTION: &'static str = "Get detailed information about a specific freelancer: profile, rating, skills and review counters.";

    type Params = GetFreelancerParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("freelancer_id", params.freelancer_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let profile = client.get_freelancer(params.freelancer_id).await?;
        Ok(serde_json::to_value(profile)?)
    }
}
