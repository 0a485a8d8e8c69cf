//! Router assembly and the state shared by handlers.
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::upstream::client::UpstreamClient;

/// Read-only per-process state; handlers never mutate it.
pub struct AppState {
    pub upstream: UpstreamClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/generate-image", post(handlers::generate_image))
        .route("/check-image", post(handlers::check_image))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
