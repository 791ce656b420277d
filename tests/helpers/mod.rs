//! Test helpers: a stub scrape backend implementing the API contract the
//! dashboard depends on, plus client fixtures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use scrape_dashboard::flows::Dashboard;
use scrape_dashboard::format::Formatter;
use scrape_dashboard::models::JobSummary;
use scrape_dashboard::services::api::ApiClient;

/// Scripted behavior and call counters of the stub backend.
pub struct StubBackend {
    /// JSON array served by `GET /api/jobs`.
    pub summaries: Mutex<Value>,
    /// Detail records served by `GET /api/jobs/{id}`, keyed by id.
    pub details: Mutex<HashMap<String, Value>>,
    /// (status, body) served by `POST /scrape`.
    pub scrape_response: Mutex<(u16, Value)>,
    pub fail_list: AtomicBool,
    pub list_hits: AtomicUsize,
    pub detail_hits: AtomicUsize,
    pub scrape_hits: AtomicUsize,
    /// (url field, use_sample flag) of the last multipart submission.
    pub last_scrape_form: Mutex<Option<(Option<String>, bool)>>,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self {
            summaries: Mutex::new(json!([])),
            details: Mutex::new(HashMap::new()),
            scrape_response: Mutex::new((500, json!({"error": "scrape not scripted"}))),
            fail_list: AtomicBool::new(false),
            list_hits: AtomicUsize::new(0),
            detail_hits: AtomicUsize::new(0),
            scrape_hits: AtomicUsize::new(0),
            last_scrape_form: Mutex::new(None),
        }
    }
}

impl StubBackend {
    /// Register a detail record under its own id (number or string).
    pub fn add_detail(&self, detail: Value) {
        let id = match &detail["id"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.details.lock().unwrap().insert(id, detail);
    }
}

/// Spawn the stub backend on an ephemeral port, returning its base URL.
pub async fn spawn_backend(stub: Arc<StubBackend>) -> String {
    let app = Router::new()
        .route("/api/jobs", get(list_jobs))
        .route("/api/jobs/{id}", get(job_detail))
        .route("/scrape", post(trigger_scrape))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn list_jobs(State(stub): State<Arc<StubBackend>>) -> (StatusCode, Json<Value>) {
    stub.list_hits.fetch_add(1, Ordering::SeqCst);
    if stub.fail_list.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "list backend down"})),
        );
    }
    (StatusCode::OK, Json(stub.summaries.lock().unwrap().clone()))
}

async fn job_detail(
    State(stub): State<Arc<StubBackend>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    stub.detail_hits.fetch_add(1, Ordering::SeqCst);
    match stub.details.lock().unwrap().get(&id) {
        Some(detail) => (StatusCode::OK, Json(detail.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "record not found"})),
        ),
    }
}

async fn trigger_scrape(
    State(stub): State<Arc<StubBackend>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    stub.scrape_hits.fetch_add(1, Ordering::SeqCst);

    let mut url = None;
    let mut use_sample = false;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        let text = field.text().await.unwrap();
        match name.as_deref() {
            Some("url") => url = Some(text),
            Some("use_sample") => use_sample = text == "1",
            _ => {}
        }
    }
    *stub.last_scrape_form.lock().unwrap() = Some((url, use_sample));

    let (status, body) = stub.scrape_response.lock().unwrap().clone();
    (StatusCode::from_u16(status).unwrap(), Json(body))
}

/// Dashboard client wired to the stub, with deterministic en-US formatting.
pub fn new_dashboard(base_url: &str) -> Dashboard {
    let api = ApiClient::new(base_url, Duration::from_secs(5)).unwrap();
    Dashboard::new(api, Formatter::from_tag("en-US"))
}

/// Parse a JSON array into the seed shape `initialize` expects.
pub fn seed_summaries(raw: Value) -> Vec<JobSummary> {
    serde_json::from_value(raw).unwrap()
}
