#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header::CACHE_CONTROL, HeaderMap, Method, Request, StatusCode},
    response::Response,
    routing::{any, get},
    Json, Router,
};
use deutsch_lern::{app, config::Config, state::AppState};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// One request as seen by the fake webhook.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub body: Option<Value>,
    pub cache_control: Option<String>,
}

#[derive(Clone)]
struct Shared {
    reply: Value,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Throwaway n8n stand-in listening on a random local port.
pub struct Upstream {
    pub base: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl Upstream {
    /// Answers `reply` on `/hook`.
    pub fn hook(&self) -> String {
        format!("{}/hook", self.base)
    }

    /// Answers 404 `workflow not found`.
    pub fn missing(&self) -> String {
        format!("{}/missing", self.base)
    }

    /// Answers 200 with a plain-text body.
    pub fn plain_text(&self) -> String {
        format!("{}/text", self.base)
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn record(
    State(shared): State<Shared>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    shared.captured.lock().unwrap().push(Captured {
        method,
        body: serde_json::from_slice(&body).ok(),
        cache_control: headers
            .get(CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    Json(shared.reply.clone())
}

pub async fn spawn_upstream(reply: Value) -> Upstream {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let shared = Shared {
        reply,
        captured: captured.clone(),
    };

    let router = Router::new()
        .route("/hook", any(record))
        .route(
            "/missing",
            any(|| async { (StatusCode::NOT_FOUND, "workflow not found") }),
        )
        .route("/text", get(|| async { "plain text" }).post(|| async { "plain text" }))
        .with_state(shared);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Upstream {
        base: format!("http://{}", addr),
        captured,
    }
}

/// URL of a local port nobody listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/hook", addr)
}

pub fn config() -> Config {
    Config {
        templates_glob: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html").to_string(),
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        ..Config::default()
    }
}

pub fn state(config: Config) -> AppState {
    AppState::new(config).unwrap()
}

pub async fn send(state: AppState, request: Request<Body>) -> Response {
    app(state).oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
