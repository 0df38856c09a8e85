// consensus-client/tests/common/mod.rs
// 测试用模拟后端
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use consensus_client::{
    ClientConfig, ConsensusClient, MemoryTokenStore, OneshotTransport, RecordingNavigator,
};

/// Base URL used with the in-process transport
pub const IN_PROCESS_URL: &str = "http://in-process";

/// A request as the backend received it
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Canned-response backend that records every request
#[derive(Clone, Default)]
pub struct Backend {
    routes: Arc<Mutex<HashMap<(Method, String), (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and a raw body
    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        self.routes.lock().unwrap().insert(
            (method, path.to_string()),
            (StatusCode::from_u16(status).unwrap(), body.into()),
        );
    }

    /// Answer `method path` with `status` and a JSON body
    pub fn respond_json(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.respond(method, path, status, body.to_string());
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Captured {
        self.requests()
            .pop()
            .expect("backend received no request")
    }

    pub fn router(&self) -> Router {
        Router::new().fallback(handle).with_state(self.clone())
    }
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    backend.requests.lock().unwrap().push(Captured {
        method: method.clone(),
        path: path.clone(),
        headers,
        body: body.to_vec(),
    });

    let canned = backend.routes.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some((status, _)) if status == StatusCode::NO_CONTENT => status.into_response(),
        Some((status, body)) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"detail":"Not Found"}"#,
        )
            .into_response(),
    }
}

/// Client wired to the backend in-process
pub struct Harness {
    pub backend: Backend,
    pub client: ConsensusClient,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        init_tracing();
        let backend = Backend::new();
        let tokens = Arc::new(MemoryTokenStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let client = ConsensusClient::builder()
            .config(ClientConfig::new(IN_PROCESS_URL))
            .transport(OneshotTransport::new(backend.router()))
            .token_store(tokens.clone())
            .navigator(navigator.clone())
            .build()
            .expect("Failed to build client");
        Self {
            backend,
            client,
            tokens,
            navigator,
        }
    }

    pub fn authenticated(token: &str) -> Self {
        let harness = Self::new();
        harness.client.tokens().set(Some(token));
        harness
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consensus_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "email": "expert@example.com",
        "full_name": "Ada Expert",
        "photo_url": null,
        "is_active": true,
        "created_at": "2024-05-01T10:00:00"
    })
}

pub fn project_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Budget 2025",
        "description": "Estimate next year's budget",
        "owner_id": 1,
        "scale_min": 0.0,
        "scale_max": 100.0,
        "scale_unit": "k€",
        "created_at": "2024-05-01T10:00:00Z"
    })
}

pub fn invitation_json(id: i64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "project_id": 3,
        "project_name": "Budget 2025",
        "invitee_email": "expert@example.com",
        "inviter_id": 1,
        "status": status
    })
}

pub fn opinion_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "project_id": 3,
        "user_id": 1,
        "lower_bound": 10.0,
        "peak": 20.0,
        "upper_bound": 35.0
    })
}

pub fn member_json(user_id: i64, role: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "email": format!("user{user_id}@example.com"),
        "full_name": null,
        "role": role
    })
}

pub fn result_json(project_id: i64) -> serde_json::Value {
    serde_json::json!({
        "project_id": project_id,
        "best_compromise": {"lower": 10.0, "peak": 21.5, "upper": 33.0},
        "centroid": 21.5,
        "max_error": 4.2,
        "opinions_count": 4
    })
}
