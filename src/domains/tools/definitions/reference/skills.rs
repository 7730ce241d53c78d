//! Skills directory tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

/// `get_skills` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetSkillsParams {}

#[derive(Debug, Clone)]
pub struct GetSkillsTool;

#[async_trait]
impl ApiTool for GetSkillsTool {
    const NAME: &'static str = "get_skills";
    const DESCRIPTION: &'static str = "Get the list of skills (categories) available on FreelanceHunt. Skill IDs are used as search filters.";

    type Params = GetSkillsParams;

    async fn execute(
        client: &FreelancehuntClient,
        _params: Self::Params,
    ) -> Result<Value, ToolError> {
        let skills = client.get_skills().await?;
        Ok(serde_json::to_value(skills)?)
    }
}
