//! Local stand-in for the Freelancehunt API used by tests.
//!
//! [`StubApi`] binds an axum server on an ephemeral port, answers each path
//! with a canned status and body and records every request it sees.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::core::config::ApiConfig;

/// A request observed by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub received_at: Instant,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
    delay: Duration,
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<String, CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Canned-response HTTP server.
pub struct StubApi {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubApi {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Answer `path` with `status` and a JSON `body`. Unknown paths get a 404.
    pub fn respond(&self, path: &str, status: u16, body: Value) {
        self.respond_raw(path, status, &body.to_string());
    }

    /// Answer `path` with `status` and `body` sent verbatim.
    pub fn respond_raw(&self, path: &str, status: u16, body: &str) {
        self.insert(path, status, body, Duration::ZERO);
    }

    /// Answer `path` with a JSON `body` only after `delay` has passed.
    pub fn respond_after(&self, path: &str, delay: Duration, body: Value) {
        self.insert(path, 200, &body.to_string(), delay);
    }

    fn insert(&self, path: &str, status: u16, body: &str, delay: Duration) {
        self.state.routes.lock().unwrap().insert(
            path.to_string(),
            CannedResponse {
                status,
                body: body.to_string(),
                delay,
            },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client configuration pointing at this stub.
    pub fn config(&self) -> ApiConfig {
        stub_config(&self.base_url())
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let query = serde_urlencoded::from_str(uri.query().unwrap_or_default()).unwrap_or_default();
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query,
        authorization: header_value(header::AUTHORIZATION),
        accept: header_value(header::ACCEPT),
        received_at: Instant::now(),
    });

    let route = state.routes.lock().unwrap().get(uri.path()).cloned();
    let Some(canned) = route else {
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            "{}",
        )
            .into_response();
    };

    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }

    (
        StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

/// API configuration for tests: fixed key, no pacing, short timeout.
pub fn stub_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        request_delay: Duration::ZERO,
        timeout: Duration::from_secs(5),
    }
}

/// A fully populated project record.
pub fn project_fixture() -> Value {
    json!({
        "id": 1234567,
        "type": "project",
        "attributes": {
            "name": "Парсер каталогу товарів",
            "description": "Потрібно зібрати каталог товарів з інтернет-магазину у CSV.",
            "skills": [
                { "id": 22, "name": "Python" },
                { "id": 169, "name": "Web Scraping" }
            ],
            "status": { "id": 11, "name": "Open for proposals" },
            "budget": { "amount": 5000, "currency": "UAH" },
            "employer": {
                "id": 42,
                "type": "employer",
                "login": "shop_owner",
                "first_name": "Олена",
                "last_name": "Коваль",
                "avatar": {
                    "small": { "url": "https://content.freelancehunt.com/avatar/50/42.png", "width": 50, "height": 50 },
                    "large": { "url": "https://content.freelancehunt.com/avatar/255/42.png", "width": 255, "height": 255 }
                },
                "self": "https://api.freelancehunt.com/v2/employers/42"
            },
            "published_at": "2024-03-01T10:15:00+02:00",
            "expired_at": "2024-03-15T10:15:00+02:00",
            "bid_count": 7,
            "is_remote_job": true,
            "tags": [{ "id": 3, "name": "scrapy" }]
        },
        "links": {
            "self": {
                "api": "https://api.freelancehunt.com/v2/projects/1234567",
                "web": "https://freelancehunt.com/project/parser/1234567.html"
            },
            "comments": "https://api.freelancehunt.com/v2/projects/1234567/comments",
            "bids": "https://api.freelancehunt.com/v2/projects/1234567/bids"
        }
    })
}

/// A minimal project record with the given id and name.
pub fn project_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "type": "project",
        "attributes": {
            "name": name,
            "description": format!("Description of {name}"),
            "status": { "id": 11, "name": "Open for proposals" },
            "budget": { "amount": 1000, "currency": "UAH" }
        }
    })
}
