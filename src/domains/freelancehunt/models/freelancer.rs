//! Freelancer profiles and portfolio items.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Avatar, JsonMap, Skill};

fn default_snippet_type() -> String {
    "snippet".to_string()
}

/// A public freelancer profile from `/freelancers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: FreelancerAttributes,
    #[serde(default)]
    pub links: Option<JsonMap>,
}

/// The authenticated user's own profile (`/my/profile`).
///
/// Same layout as a freelancer profile; `kind` is either `freelancer` or
/// `employer`.
pub type UserProfile = FreelancerProfile;

/// Profile attributes. Counters are unsigned and default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerAttributes {
    pub login: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<Avatar>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_position: Option<u64>,
    #[serde(default)]
    pub arbitrages: u32,
    #[serde(default)]
    pub positive_reviews: u32,
    #[serde(default)]
    pub negative_reviews: u32,
    #[serde(default)]
    pub answered_average_minutes: Option<u64>,
    #[serde(default)]
    pub is_plus_active: bool,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub location: Option<JsonMap>,
    #[serde(default)]
    pub verification: Option<JsonMap>,
    #[serde(default)]
    pub contacts: Option<JsonMap>,
    #[serde(default)]
    pub plus_ends_at: Option<String>,
    #[serde(default)]
    pub active_projects: u32,
    #[serde(default)]
    pub completed_projects: u32,
    #[serde(default)]
    pub completed_contests: u32,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub average_grade: Option<f64>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub visited_at: Option<String>,
    #[serde(default)]
    pub status: Option<JsonMap>,
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub cv_html: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub snippet_count: u32,
}

impl FreelancerAttributes {
    /// Total number of reviews received.
    pub fn reviews_count(&self) -> u32 {
        self.positive_reviews.saturating_add(self.negative_reviews)
    }
}

/// A portfolio entry ("snippet").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u64,
    #[serde(rename = "type", default = "default_snippet_type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub skill: Option<Skill>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub image: Option<JsonMap>,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_freelancer_counters_default_to_zero() {
        let profile: FreelancerProfile = serde_json::from_value(json!({
            "id": 1,
            "type": "freelancer",
            "attributes": {
                "login": "testfreelancer",
                "first_name": "Jane",
                "last_name": "Smith",
                "rating": 4.8
            }
        }))
        .unwrap();
        let attributes = &profile.attributes;
        assert_eq!(attributes.login, "testfreelancer");
        assert_eq!(attributes.rating, Some(4.8));
        assert_eq!(attributes.reviews_count(), 0);
        assert_eq!(attributes.completed_projects, 0);
        assert_eq!(attributes.snippet_count, 0);
        assert!(!attributes.is_online);
    }

    #[test]
    fn test_negative_counter_rejected() {
        let result: Result<FreelancerProfile, _> = serde_json::from_value(json!({
            "id": 1,
            "type": "freelancer",
            "attributes": { "login": "x", "positive_reviews": -3 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reviews_count() {
        let profile: FreelancerProfile = serde_json::from_value(json!({
            "id": 2,
            "type": "employer",
            "attributes": { "login": "boss", "positive_reviews": 25, "negative_reviews": 2 }
        }))
        .unwrap();
        assert_eq!(profile.attributes.reviews_count(), 27);
    }

    #[test]
    fn test_portfolio_item_defaults() {
        let item: PortfolioItem = serde_json::from_value(json!({
            "id": 10,
            "name": "Landing page",
            "skill": { "id": 1, "name": "HTML" }
        }))
        .unwrap();
        assert_eq!(item.kind, "snippet");
        assert_eq!(item.views, 0);
        assert_eq!(item.votes, 0);
        assert_eq!(item.skill.unwrap().name, "HTML");
    }
}
