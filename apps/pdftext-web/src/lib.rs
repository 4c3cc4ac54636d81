//! PDF Text Extractor web host
//!
//! Serves a one-page upload form and the endpoint behind it:
//! - `GET /`: the form
//! - `POST /api/extract`: multipart upload (`file` field) -> extracted text as JSON
//! - `GET /health`: liveness

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::WebConfig;
pub use state::AppState;

/// Build the router for the given state
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/extract", post(handlers::extract))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
