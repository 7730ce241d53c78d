//! Shared building blocks used by several Freelancehunt resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Loosely structured JSON object kept as-is.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Currency assumed when the API omits one.
pub const DEFAULT_CURRENCY: &str = "UAH";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Paged list envelope: `{data: [...], links: {...}, meta: {...}}`.
///
/// `data` keeps the order the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    #[serde(default)]
    pub meta: Option<JsonMap>,
}

/// A skill (category) reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
}

/// A free-form project tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A money amount attached to projects, bids and contests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub per_hour: Option<bool>,
}

/// User avatar in two sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub small: JsonMap,
    pub large: JsonMap,
}

/// A country from the `/countries` directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u64,
    pub iso2: String,
    pub name: String,
}

/// A city from the `/cities/{country_id}` directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
}
