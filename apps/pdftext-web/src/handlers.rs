//! HTTP handlers for the upload form

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use pdftext_core::Engine;
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the uploaded PDF
pub const FILE_FIELD: &str = "file";

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: Option<String>,
    pub engine: Engine,
    pub page_count: usize,
    pub text: String,
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Upload form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Extract text from the PDF in the `file` field of a multipart upload
pub async fn extract(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) = upload
        .ok_or_else(|| ApiError::InvalidRequest(format!("Missing '{}' field", FILE_FIELD)))?;

    tracing::info!(
        file = file_name.as_deref().unwrap_or("<unnamed>"),
        bytes = data.len(),
        "Extracting uploaded PDF"
    );

    // Parsing is CPU-bound and synchronous
    let extractor = state.extractor.clone();
    let document =
        tokio::task::spawn_blocking(move || extractor.extract_document_bytes(&data)).await??;

    Ok(Json(ExtractResponse {
        file_name,
        engine: document.engine,
        page_count: document.page_count(),
        text: document.text,
    }))
}
