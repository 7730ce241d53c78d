//! Countries directory tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::listing;
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

/// `get_countries` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetCountriesParams {}

#[derive(Debug, Clone)]
pub struct GetCountriesTool;

#[async_trait]
impl ApiTool for GetCountriesTool {
    const NAME: &'static str = "get_countries";
    const DESCRIPTION: &'static str = "Get the list of countries known to FreelanceHunt. Country IDs are used to look up cities.";

    type Params = GetCountriesParams;

    async fn execute(
        client: &FreelancehuntClient,
        _params: Self::Params,
    ) -> Result<Value, ToolError> {
        let page = client.get_countries().await?;
        listing("countries", page)
    }
}
