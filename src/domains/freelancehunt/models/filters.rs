//! Query parameter builders for paginated and filtered endpoints.
//!
//! Freelancehunt expects pagination as `page[number]`/`page[size]` and filters
//! as one `filter[<name>]` key per filter. Filters that are not set are left
//! out of the query entirely.

/// Ordered query string pairs.
pub type Query = Vec<(String, String)>;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Render as query pairs; the page size is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn to_query(self) -> Query {
        vec![
            ("page[number]".to_string(), self.page.max(1).to_string()),
            (
                "page[size]".to_string(),
                self.per_page.clamp(1, MAX_PAGE_SIZE).to_string(),
            ),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

fn filter_key(name: &str) -> String {
    format!("filter[{name}]")
}

fn push_filter(query: &mut Query, name: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        query.push((filter_key(name), value.to_string()));
    }
}

/// Join ids into the comma-separated form used by multi-valued filters.
pub fn join_ids(ids: &[u64]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(
        ids.iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Project search filters for `/projects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub skill_id: Option<Vec<u64>>,
    pub budget_from: Option<f64>,
    pub budget_to: Option<f64>,
    pub employer_id: Option<u64>,
    pub status_id: Option<u64>,
    pub only_remote: Option<bool>,
    pub location_id: Option<u64>,
}

impl SearchFilters {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_filter(
            &mut query,
            "skill_id",
            self.skill_id.as_deref().and_then(join_ids),
        );
        push_filter(&mut query, "budget_from", self.budget_from);
        push_filter(&mut query, "budget_to", self.budget_to);
        push_filter(&mut query, "employer_id", self.employer_id);
        push_filter(&mut query, "status_id", self.status_id);
        push_filter(&mut query, "only_remote", self.only_remote);
        push_filter(&mut query, "location_id", self.location_id);
        query
    }
}

/// Bid list filters for `/projects/{id}/bids` and `/my/bids`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidFilters {
    pub status: Option<String>,
    pub is_winner: Option<bool>,
    pub project_id: Option<u64>,
}

impl BidFilters {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_filter(&mut query, "status", self.status.as_deref());
        push_filter(&mut query, "is_winner", self.is_winner);
        push_filter(&mut query, "project_id", self.project_id);
        query
    }
}
