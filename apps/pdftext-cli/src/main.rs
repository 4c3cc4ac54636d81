//! pdftext binary
//!
//! Extracts the text of one PDF file and prints it (or writes it to a file).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdftext_core::{Engine, ExtractOptions, ExtractedDocument, TextExtractor};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pdftext")]
#[command(version, about = "Extract plain text from a PDF file")]
struct Args {
    /// PDF file to read
    file: PathBuf,

    /// Page text backend: native (lopdf) or layout (pdf-extract)
    #[arg(short, long, default_value = "native")]
    engine: Engine,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log per-page details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pages joined by a blank line
    Text,
    /// Engine, per-page text and joined text as JSON
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the extracted text, so logs go to stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let extractor = TextExtractor::with_options(ExtractOptions::with_engine(args.engine));
    let document = extractor
        .extract_document_file(&args.file)
        .with_context(|| format!("Failed to extract text from {}", args.file.display()))?;

    let rendered = render(&document, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} pages to {}", document.page_count(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn render(document: &ExtractedDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(document.text.clone()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).context("Failed to serialize document")
        }
    }
}
