//! Cities directory tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::super::common::require_id;
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetCitiesParams {
    #[schemars(description = "Country ID (see get_countries)")]
    #[schemars(range(min = 1))]
    pub country_id: u64,
}

#[derive(Debug, Clone)]
pub struct GetCitiesTool;

#[async_trait]
impl ApiTool for GetCitiesTool {
    const NAME: &'static str = "get_cities";
    const DESCRIPTION: &'static str = "Get the cities of a country. City IDs can be used as the location filter of search_projects.";

    type Params = GetCitiesParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        require_id("country_id", params.country_id)
    }

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let cities = client.get_cities(params.country_id).await?;
        Ok(json!({
            "cities": cities,
            "country_id": params.country_id,
        }))
    }
}
