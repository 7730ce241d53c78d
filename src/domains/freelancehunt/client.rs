//! Freelancehunt REST API client.
//!
//! Single point of outbound communication with the Freelancehunt API. The
//! client owns the HTTP configuration (base URL, bearer token, timeout), paces
//! requests through a shared [`RequestPacer`], maps HTTP failures to
//! [`ApiError`] and decodes envelopes into the typed records in
//! [`models`](super::models).

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::models::{
    Bid, BidFilters, City, Contest, Country, FreelancerProfile, Page, PageRequest, PortfolioItem,
    Project, ProjectComment, Query, SearchFilters, Skill, Thread, UserProfile, join_ids,
};
use super::pacer::RequestPacer;
use crate::core::config::ApiConfig;

const USER_AGENT: &str = concat!("freelancehunt-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Async client for the Freelancehunt API v2.
#[derive(Debug, Clone)]
pub struct FreelancehuntClient {
    http: reqwest::Client,
    base_url: String,
    pacer: Arc<RequestPacer>,
}

impl FreelancehuntClient {
    /// Create a client from configuration, with its own pacer.
    ///
    /// Fails with [`ApiError::Config`] when no API key is configured.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let pacer = Arc::new(RequestPacer::new(config.request_delay));
        Self::with_pacer(config, pacer)
    }

    /// Create a client that shares an existing pacer.
    pub fn with_pacer(config: &ApiConfig, pacer: Arc<RequestPacer>) -> ApiResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ApiError::config(
                    "API key is required. Set FREELANCEHUNT_API_KEY environment variable.",
                )
            })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ApiError::config(format!("Invalid API key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            pacer,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a raw request and return the decoded JSON body unmodified.
    ///
    /// The whole exchange (send, status check, body read) runs inside the
    /// pacer, so at most one request from this client is in flight.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let url = self.endpoint(path);
        debug!(
            "{} {}?{}",
            method,
            url,
            serde_urlencoded::to_string(query).unwrap_or_default()
        );

        let mut builder = self.http.request(method, &url).query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        self.pacer.run(|| Self::exchange(builder)).await
    }

    async fn exchange(builder: reqwest::RequestBuilder) -> ApiResult<Value> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(&e))?;

        if let Some(err) = ApiError::from_status(status.as_u16(), || {
            String::from_utf8_lossy(&bytes).into_owned()
        }) {
            warn!("Freelancehunt API returned {}: {}", status, err);
            return Err(err);
        }

        if bytes.is_empty() || status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::invalid_shape("JSON", e))
    }

    async fn get(&self, path: &str, query: Query) -> ApiResult<Value> {
        self.request(Method::GET, path, &query, None).await
    }

    // ------------------------------------------------------------------
    // Envelope decoding
    // ------------------------------------------------------------------

    fn decode<T: DeserializeOwned>(value: Value, resource: &'static str) -> ApiResult<T> {
        serde_json::from_value(value).map_err(|e| ApiError::invalid_shape(resource, e))
    }

    /// Unwrap `{data: {...}}` for single-resource endpoints.
    fn decode_single<T: DeserializeOwned>(mut value: Value, resource: &'static str) -> ApiResult<T> {
        let data = value.get_mut("data").map(Value::take).unwrap_or(Value::Null);
        let empty = match &data {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            return Err(ApiError::NoData { resource });
        }
        Self::decode(data, resource)
    }

    /// Take the bare `data` list of a non-paginated directory endpoint.
    fn decode_list<T: DeserializeOwned>(mut value: Value, resource: &'static str) -> ApiResult<Vec<T>> {
        match value.get_mut("data").map(Value::take) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(data) => Self::decode(data, resource),
        }
    }

    fn paged(page: PageRequest, filters: Query) -> Query {
        let mut query = page.to_query();
        query.extend(filters);
        query
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Search open projects.
    #[instrument(skip(self, filters))]
    pub async fn search_projects(
        &self,
        page: PageRequest,
        filters: &SearchFilters,
    ) -> ApiResult<Page<Project>> {
        let value = self
            .get("/projects", Self::paged(page, filters.to_query()))
            .await?;
        Self::decode(value, "projects")
    }

    /// Get one project by id.
    #[instrument(skip(self))]
    pub async fn get_project(&self, project_id: u64) -> ApiResult<Project> {
        let value = self.get(&format!("/projects/{project_id}"), Query::new()).await?;
        Self::decode_single(value, "project")
    }

    /// List bids placed on a project.
    #[instrument(skip(self, filters))]
    pub async fn get_project_bids(
        &self,
        project_id: u64,
        page: PageRequest,
        filters: &BidFilters,
    ) -> ApiResult<Page<Bid>> {
        let value = self
            .get(
                &format!("/projects/{project_id}/bids"),
                Self::paged(page, filters.to_query()),
            )
            .await?;
        Self::decode(value, "bids")
    }

    /// List comments on a project.
    #[instrument(skip(self))]
    pub async fn get_project_comments(
        &self,
        project_id: u64,
        page: PageRequest,
    ) -> ApiResult<Page<ProjectComment>> {
        let value = self
            .get(
                &format!("/projects/{project_id}/comments"),
                Self::paged(page, Query::new()),
            )
            .await?;
        Self::decode(value, "comments")
    }

    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    /// List bids placed by the authenticated user.
    #[instrument(skip(self, filters))]
    pub async fn get_my_bids(&self, page: PageRequest, filters: &BidFilters) -> ApiResult<Page<Bid>> {
        let value = self
            .get("/my/bids", Self::paged(page, filters.to_query()))
            .await?;
        Self::decode(value, "my bids")
    }

    /// Get the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn get_my_profile(&self) -> ApiResult<UserProfile> {
        let value = self.get("/my/profile", Query::new()).await?;
        Self::decode_single(value, "profile")
    }

    // ------------------------------------------------------------------
    // Freelancers
    // ------------------------------------------------------------------

    /// Get a freelancer's public profile.
    #[instrument(skip(self))]
    pub async fn get_freelancer(&self, freelancer_id: u64) -> ApiResult<FreelancerProfile> {
        let value = self
            .get(&format!("/freelancers/{freelancer_id}"), Query::new())
            .await?;
        Self::decode_single(value, "freelancer")
    }

    /// List a freelancer's portfolio items.
    #[instrument(skip(self))]
    pub async fn get_freelancer_portfolio(
        &self,
        freelancer_id: u64,
        page: PageRequest,
    ) -> ApiResult<Page<PortfolioItem>> {
        let value = self
            .get(
                &format!("/freelancers/{freelancer_id}/portfolio"),
                Self::paged(page, Query::new()),
            )
            .await?;
        Self::decode(value, "portfolio")
    }

    /// List reviews left for a freelancer, as raw JSON objects.
    #[instrument(skip(self))]
    pub async fn get_freelancer_reviews(
        &self,
        freelancer_id: u64,
        page: PageRequest,
    ) -> ApiResult<Vec<Value>> {
        let value = self
            .get(
                &format!("/freelancers/{freelancer_id}/reviews"),
                Self::paged(page, Query::new()),
            )
            .await?;
        Self::decode_list(value, "reviews")
    }

    // ------------------------------------------------------------------
    // Contests
    // ------------------------------------------------------------------

    /// Search contests, optionally restricted to skills.
    #[instrument(skip(self))]
    pub async fn search_contests(
        &self,
        page: PageRequest,
        skill_ids: &[u64],
    ) -> ApiResult<Page<Contest>> {
        let mut filters = Query::new();
        if let Some(ids) = join_ids(skill_ids) {
            filters.push(("filter[skill_id]".to_string(), ids));
        }
        let value = self.get("/contests", Self::paged(page, filters)).await?;
        Self::decode(value, "contests")
    }

    /// Get one contest by id.
    #[instrument(skip(self))]
    pub async fn get_contest(&self, contest_id: u64) -> ApiResult<Contest> {
        let value = self.get(&format!("/contests/{contest_id}"), Query::new()).await?;
        Self::decode_single(value, "contest")
    }

    // ------------------------------------------------------------------
    // Directories and messaging
    // ------------------------------------------------------------------

    /// List all skills.
    #[instrument(skip(self))]
    pub async fn get_skills(&self) -> ApiResult<Vec<Skill>> {
        let value = self.get("/skills", Query::new()).await?;
        Self::decode_list(value, "skills")
    }

    /// List countries.
    #[instrument(skip(self))]
    pub async fn get_countries(&self) -> ApiResult<Page<Country>> {
        let value = self.get("/countries", Query::new()).await?;
        Self::decode(value, "countries")
    }

    /// List cities of a country.
    #[instrument(skip(self))]
    pub async fn get_cities(&self, country_id: u64) -> ApiResult<Vec<City>> {
        let value = self.get(&format!("/cities/{country_id}"), Query::new()).await?;
        Self::decode_list(value, "cities")
    }

    /// List the authenticated user's message threads.
    #[instrument(skip(self))]
    pub async fn get_threads(&self, page: PageRequest) -> ApiResult<Page<Thread>> {
        let value = self.get("/threads", Self::paged(page, Query::new())).await?;
        Self::decode(value, "threads")
    }
}
