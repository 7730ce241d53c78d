//! Contest records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Budget, JsonMap, Skill};
use super::project::Employer;

fn default_contest_type() -> String {
    "contest".to_string()
}

/// A design/creative contest from `/contests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub id: u64,
    #[serde(rename = "type", default = "default_contest_type")]
    pub kind: String,
    pub attributes: ContestAttributes,
    #[serde(default)]
    pub links: Option<JsonMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestAttributes {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub skill: Option<Skill>,
    #[serde(default)]
    pub status: Option<JsonMap>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub application_count: u32,
    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub final_started_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub employer: Option<Employer>,
    #[serde(default)]
    pub freelancer: Option<JsonMap>,
    #[serde(default)]
    pub tags: Vec<JsonMap>,
    #[serde(default)]
    pub updates: Vec<JsonMap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contest_decode() {
        let contest: Contest = serde_json::from_value(json!({
            "id": 900,
            "attributes": {
                "name": "Logo for a coffee shop",
                "skill": { "id": 17, "name": "Logo design" },
                "budget": { "amount": 3000 },
                "application_count": 14,
                "published_at": "2024-05-02T09:00:00+03:00",
                "duration_days": 7
            }
        }))
        .unwrap();
        assert_eq!(contest.kind, "contest");
        assert_eq!(contest.attributes.application_count, 14);
        assert_eq!(contest.attributes.budget.unwrap().currency, "UAH");
        assert!(contest.attributes.published_at.is_some());
    }

    #[test]
    fn test_contest_name_required() {
        let result: Result<Contest, _> =
            serde_json::from_value(json!({ "id": 1, "attributes": {} }));
        assert!(result.is_err());
    }
}
