// Mock PicLumen upstream and router helpers shared by integration tests
#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tower::ServiceExt;

use piclumen_relay::api::routes::{router, AppState};
use piclumen_relay::UpstreamClient;

/// Canned reply for one upstream endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(body: Value) -> Self {
        Reply { status: StatusCode::OK, body: body.to_string() }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Reply { status: StatusCode::from_u16(status).unwrap(), body: body.to_string() }
    }
}

/// What the mock saw on one call.
#[derive(Clone, Debug)]
pub struct Captured {
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    create: Reply,
    batch: Reply,
    seen: Arc<Mutex<Vec<Captured>>>,
}

pub struct MockUpstream {
    pub url: String,
    seen: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    pub fn start(create: Reply, batch: Reply) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { create, batch, seen: seen.clone() };
        let app = Router::new()
            .route("/api/gen/create", post(create_handler))
            .route("/api/task/batch-process-task", post(batch_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = axum::Server::from_tcp(listener).unwrap().serve(app.into_make_service());
        tokio::spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Mock upstream error: {}", e);
            }
        });

        MockUpstream { url: format!("http://{}", addr), seen }
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.seen.lock().unwrap().clone()
    }
}

async fn create_handler(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.seen.lock().unwrap().push(Captured { headers, body });
    (state.create.status, state.create.body.clone()).into_response()
}

async fn batch_handler(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.seen.lock().unwrap().push(Captured { headers, body });
    (state.batch.status, state.batch.body.clone()).into_response()
}

/// An address nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn app_for(upstream_url: &str) -> Router {
    router(Arc::new(AppState { upstream: UpstreamClient::new(upstream_url.to_string()) }))
}

/// Send one request through the router and decode the JSON body.
pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
}
