//! Extraction options
//!
//! The core reads no environment; hosts build an [`ExtractOptions`] from their
//! own flags or settings and pass it in explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::backend::{LayoutBackend, NativeBackend, PageTextBackend};

/// Which PDF library produces the raw page text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// lopdf content-stream extraction
    #[default]
    Native,
    /// pdf-extract glyph layout
    Layout,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Native, Engine::Layout];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Native => "native",
            Engine::Layout => "layout",
        }
    }

    pub fn backend(&self) -> Box<dyn PageTextBackend> {
        match self {
            Engine::Native => Box::new(NativeBackend::new()),
            Engine::Layout => Box::new(LayoutBackend::new()),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown engine '{0}' (expected one of: {names})", names = engine_names())]
pub struct ParseEngineError(String);

fn engine_names() -> String {
    Engine::ALL
        .iter()
        .map(Engine::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Engine {
    type Err = ParseEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Engine::ALL
            .into_iter()
            .find(|engine| engine.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseEngineError(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub engine: Engine,
}

impl ExtractOptions {
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_parse() {
        assert_eq!("native".parse::<Engine>().unwrap(), Engine::Native);
        assert_eq!(" Layout ".parse::<Engine>().unwrap(), Engine::Layout);
    }

    #[test]
    fn test_engine_parse_unknown() {
        let err = "ocr".parse::<Engine>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown engine 'ocr' (expected one of: native, layout)"
        );
    }

    #[test]
    fn test_engine_display_round_trips() {
        for engine in Engine::ALL {
            assert_eq!(engine.to_string().parse::<Engine>().unwrap(), engine);
        }
    }

    #[test]
    fn test_engine_backend_names() {
        assert_eq!(Engine::Native.backend().name(), "native");
        assert_eq!(Engine::Layout.backend().name(), "layout");
    }

    #[test]
    fn test_options_default_to_native() {
        assert_eq!(ExtractOptions::default().engine, Engine::Native);
        let options: ExtractOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.engine, Engine::Native);
    }

    #[test]
    fn test_options_deserialize_engine() {
        let options: ExtractOptions = serde_json::from_str(r#"{"engine":"layout"}"#).unwrap();
        assert_eq!(options, ExtractOptions::with_engine(Engine::Layout));
    }
}
