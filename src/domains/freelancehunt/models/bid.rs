//! Bid records.

use serde::{Deserialize, Serialize};

use super::common::{Budget, JsonMap};

fn default_bid_type() -> String {
    "bid".to_string()
}

/// A freelancer's bid on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: u64,
    #[serde(rename = "type", default = "default_bid_type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Option<BidAttributes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidAttributes {
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub safe_type: Option<String>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_winner: bool,
    #[serde(default)]
    pub freelancer: Option<JsonMap>,
    #[serde(default)]
    pub project: Option<JsonMap>,
    #[serde(default)]
    pub attachment: Option<serde_json::Value>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bid_flags_default_false() {
        let bid: Bid = serde_json::from_value(json!({
            "id": 77,
            "attributes": {
                "days": 5,
                "budget": { "amount": 2500, "currency": "UAH" },
                "comment": "Ready to start",
                "status": "active"
            }
        }))
        .unwrap();
        assert_eq!(bid.kind, "bid");
        let attributes = bid.attributes.unwrap();
        assert!(!attributes.is_hidden);
        assert!(!attributes.is_winner);
        assert_eq!(attributes.days, Some(5));
        assert_eq!(attributes.status.as_deref(), Some("active"));
    }

    #[test]
    fn test_bid_without_attributes() {
        let bid: Bid = serde_json::from_value(json!({ "id": 1, "type": "bid" })).unwrap();
        assert!(bid.attributes.is_none());
    }
}
