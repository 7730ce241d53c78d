//! Helpers shared by the Freelancehunt tool definitions.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domains::freelancehunt::models::{DEFAULT_PAGE_SIZE, Page, PageRequest};
use crate::domains::tools::ToolError;

/// Default page number.
pub fn default_page() -> u32 {
    1
}

/// Default page size.
pub fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Build a page request from tool arguments.
pub fn page_request(page: u32, per_page: u32) -> PageRequest {
    PageRequest::new(page, per_page)
}

/// Resource ids start at 1; a zero id counts as not given.
pub fn require_id(field: &str, id: u64) -> Result<(), ToolError> {
    if id == 0 {
        return Err(ToolError::missing_argument(field));
    }
    Ok(())
}

/// Reshape a paged envelope as `{<key>: [...], links: {...}, meta?: {...}}`.
///
/// `meta` is only emitted when the API sent one.
pub fn listing<T: Serialize>(key: &str, page: Page<T>) -> Result<Value, ToolError> {
    let mut out = Map::new();
    out.insert(key.to_string(), serde_json::to_value(page.data)?);
    out.insert("links".to_string(), serde_json::to_value(page.links)?);
    if let Some(meta) = page.meta {
        out.insert("meta".to_string(), Value::Object(meta));
    }
    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::freelancehunt::models::Skill;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_require_id() {
        assert!(require_id("project_id", 7).is_ok());
        let err = require_id("project_id", 0).unwrap_err();
        assert_eq!(err.payload(), "Error: project_id is required");
    }

    #[test]
    fn test_listing_key_order() {
        let page = Page {
            data: vec![Skill { id: 1, name: "Rust".into() }],
            links: BTreeMap::from([("next".to_string(), "https://x/2".to_string())]),
            meta: json!({ "pagination": { "total": 1 } }).as_object().cloned(),
        };
        let value = listing("skills", page).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["skills", "links", "meta"]);
        assert_eq!(value["skills"][0]["name"], "Rust");
    }

    #[test]
    fn test_listing_without_meta() {
        let page: Page<Skill> = Page {
            data: vec![],
            links: BTreeMap::new(),
            meta: None,
        };
        let value = listing("skills", page).unwrap();
        assert!(value.get("meta").is_none());
        assert_eq!(value["links"], json!({}));
    }
}
