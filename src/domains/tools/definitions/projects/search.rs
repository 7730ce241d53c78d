//! Project search tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::super::common::{default_page, default_per_page, listing, page_request};
use crate::domains::freelancehunt::FreelancehuntClient;
use crate::domains::freelancehunt::models::SearchFilters;
use crate::domains::tools::{ApiTool, ToolError};

/// Parameters for project search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchProjectsParams {
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Results per page (default: 20, max: 50)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Only projects requiring any of these skill IDs")]
    #[serde(default)]
    pub skill_ids: Option<Vec<u64>>,

    #[schemars(description = "Minimum budget")]
    #[serde(default)]
    pub budget_from: Option<f64>,

    #[schemars(description = "Maximum budget")]
    #[serde(default)]
    pub budget_to: Option<f64>,

    #[schemars(description = "Only projects posted by this employer")]
    #[serde(default)]
    pub employer_id: Option<u64>,

    #[schemars(description = "Only projects with this status ID")]
    #[serde(default)]
    pub status_id: Option<u64>,

    #[schemars(description = "Only remote projects")]
    #[serde(default)]
    pub only_remote: Option<bool>,

    #[schemars(description = "Only projects in this location (city ID)")]
    #[serde(default)]
    pub location_id: Option<u64>,
}

impl SearchProjectsParams {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            skill_id: self.skill_ids.clone(),
            budget_from: self.budget_from,
            budget_to: self.budget_to,
            employer_id: self.employer_id,
            status_id: self.status_id,
            only_remote: self.only_remote,
            location_id: self.location_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchProjectsTool;

#[async_trait]
impl ApiTool for SearchProjectsTool {
    const NAME: &'static str = "search_projects";
    const DESCRIPTION: &'static str = "Search for projects on FreelanceHunt with optional filters (skills, budget range, employer, status, remote-only, location). Returns the matching projects in API order with pagination links.";

    type Params = SearchProjectsParams;

    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError> {
        let page = client
            .search_projects(page_request(params.page, params.per_page), &params.filters())
            .await?;
        listing("projects", page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_defaults() {
        let params: SearchProjectsParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 20);
        assert_eq!(params.filters(), SearchFilters::default());
    }

    #[test]
    fn test_params_to_filters() {
        let params: SearchProjectsParams = serde_json::from_value(json!({
            "skill_ids": [22, 169],
            "budget_from": 1000,
            "only_remote": true
        }))
        .unwrap();
        let filters = params.filters();
        assert_eq!(filters.skill_id, Some(vec![22, 169]));
        assert_eq!(filters.budget_from, Some(1000.0));
        assert_eq!(filters.only_remote, Some(true));
        assert_eq!(filters.employer_id, None);
    }
}
