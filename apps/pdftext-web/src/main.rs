//! PDF Text Extractor server

use anyhow::Result;
use pdftext_web::{app, AppState, WebConfig};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pdftext_web=info".parse()?)
                .add_directive("pdftext_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = WebConfig::from_env()?;
    info!(
        "Engine: {}, upload limit: {} bytes",
        config.engine, config.max_upload_bytes
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = app(AppState::new(config));

    info!("Starting PDF Text Extractor on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
