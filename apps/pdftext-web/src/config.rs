//! Server settings read from the environment

use anyhow::{Context, Result};
use pdftext_core::Engine;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub port: u16,
    pub engine: Engine,
    pub max_upload_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            engine: Engine::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl WebConfig {
    /// Read `PORT`, `PDFTEXT_ENGINE` and `PDFTEXT_MAX_UPLOAD_BYTES`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?;
        }
        if let Some(engine) = lookup("PDFTEXT_ENGINE") {
            config.engine = engine.parse()?;
        }
        if let Some(limit) = lookup("PDFTEXT_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = limit
                .trim()
                .parse()
                .with_context(|| format!("Invalid PDFTEXT_MAX_UPLOAD_BYTES: {}", limit))?;
        }

        Ok(config)
    }
}
