//! quizgen - Exam-style question generation backed by a local Ollama server
//!
//! Entry point for the quizgen HTTP service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quizgen::config::Settings;
use quizgen::llm::build_provider;
use quizgen::server::{router, AppState};

/// quizgen - Exam-style question generation backed by a local Ollama server
#[derive(Parser, Debug)]
#[command(name = "quizgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    let provider = build_provider(&settings).context("failed to build inference provider")?;

    let state = Arc::new(AppState {
        provider,
        settings: settings.clone(),
    });

    let app = router(state);

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!(
        "listening on http://{} (model: {}, ollama: {})",
        listener.local_addr()?,
        settings.ollama.model,
        settings.ollama.endpoint
    );

    axum::serve(listener, app).await?;

    Ok(())
}
