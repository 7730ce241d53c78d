//! Authenticated user's profile tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

/// `get_my_profile` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetMyProfileParams {}

#[derive(Debug, Clone)]
pub struct GetMyProfileTool;

#[async_trait]
impl ApiTool for GetMyProfileTool {
    const NAME: &'static str = "get_my_profile";
    const DESCRIPTION: &'static str = "Get the profile of the account that owns the configured API key.";

    type Params = GetMyProfileParams;

    async fn execute(
        client: &FreelancehuntClient,
        _params: Self::Params,
    ) -> Result<Value, ToolError> {
        let profile = client.get_my_profile().await?;
        Ok(serde_json::to_value(profile)?)
    }
}
