//! Project and project comment records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Avatar, Budget, JsonMap, Skill, Tag};

fn default_true() -> bool {
    true
}

fn default_comment_type() -> String {
    "project_comment".to_string()
}

fn default_comment_level() -> u32 {
    1
}

/// A project as returned by `/projects` and `/projects/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: ProjectAttributes,
    #[serde(default)]
    pub links: Option<ProjectLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAttributes {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub employer: Option<Employer>,
    #[serde(default)]
    pub freelancer: Option<JsonMap>,
    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub expired_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub bid_count: u32,
    #[serde(default = "default_true")]
    pub is_remote_job: bool,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub is_personal: Option<bool>,
    #[serde(default)]
    pub location: Option<JsonMap>,
    #[serde(default)]
    pub safe_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub updates: Vec<JsonMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub id: u64,
    pub name: String,
}

/// Project owner summary embedded in projects and contests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub login: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<Avatar>,
    #[serde(default)]
    pub verification: Option<JsonMap>,
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(rename = "self")]
    pub self_links: JsonMap,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub bids: Option<String>,
}

/// A comment left on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectComment {
    pub id: u64,
    #[serde(rename = "type", default = "default_comment_type")]
    pub kind: String,
    pub attributes: ProjectCommentAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCommentAttributes {
    pub message: String,
    #[serde(default)]
    pub message_html: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default = "default_comment_level")]
    pub level: u32,
    #[serde(default)]
    pub parent_comment_id: Option<u64>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub author: Option<JsonMap>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::freelancehunt::testing::project_fixture;
    use serde_json::json;

    #[test]
    fn test_project_decode() {
        let project: Project = serde_json::from_value(project_fixture()).unwrap();
        assert_eq!(project.id, 1234567);
        assert_eq!(project.kind, "project");
        assert_eq!(project.attributes.status.name, "Open for proposals");
        assert_eq!(project.attributes.skills.len(), 2);
        assert_eq!(project.attributes.bid_count, 7);
        let budget = project.attributes.budget.as_ref().unwrap();
        assert_eq!(budget.amount, Some(5000.0));
        assert_eq!(budget.currency, "UAH");
        let employer = project.attributes.employer.as_ref().unwrap();
        assert_eq!(employer.login, "shop_owner");
        assert_eq!(
            employer.self_link.as_deref(),
            Some("https://api.freelancehunt.com/v2/employers/42")
        );
    }

    #[test]
    fn test_project_round_trip() {
        let project: Project = serde_json::from_value(project_fixture()).unwrap();
        let encoded = serde_json::to_value(&project).unwrap();
        let decoded: Project = serde_json::from_value(encoded.clone()).unwrap();
        assert_eq!(project, decoded);

        let fixture = project_fixture();
        assert_eq!(encoded["id"], fixture["id"]);
        assert_eq!(encoded["type"], fixture["type"]);
        assert_eq!(encoded["attributes"]["name"], fixture["attributes"]["name"]);
        assert_eq!(encoded["attributes"]["skills"], fixture["attributes"]["skills"]);
        assert_eq!(encoded["attributes"]["tags"], fixture["attributes"]["tags"]);
        assert_eq!(
            encoded["attributes"]["employer"]["avatar"],
            fixture["attributes"]["employer"]["avatar"]
        );
        assert_eq!(encoded["links"], fixture["links"]);
        assert_eq!(
            decoded.attributes.published_at,
            project.attributes.published_at
        );
    }

    #[test]
    fn test_project_defaults() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "type": "project",
            "attributes": {
                "name": "Test Project",
                "description": "Test Description",
                "status": { "id": 1, "name": "Active" },
                "budget": { "amount": 100 }
            }
        }))
        .unwrap();
        assert!(project.attributes.is_remote_job);
        assert_eq!(project.attributes.bid_count, 0);
        assert!(project.attributes.skills.is_empty());
        assert!(project.links.is_none());
        assert_eq!(project.attributes.budget.unwrap().currency, "UAH");
    }

    #[test]
    fn test_project_missing_status_rejected() {
        let result: Result<Project, _> = serde_json::from_value(json!({
            "id": 1,
            "type": "project",
            "attributes": { "name": "x", "description": "y" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_comment_defaults() {
        let comment: ProjectComment = serde_json::from_value(json!({
            "id": 5,
            "attributes": { "message": "Hello" }
        }))
        .unwrap();
        assert_eq!(comment.kind, "project_comment");
        assert_eq!(comment.attributes.level, 1);
        assert_eq!(comment.attributes.likes, 0);
        assert!(!comment.attributes.is_deleted);
    }
}
