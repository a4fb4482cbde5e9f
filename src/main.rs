//! Worker 360 Server
//!
//! Run with: cargo run --bin worker360
//!
//! # Configuration
//!
//! Settings come from the TOML config (see `worker360-cli config`), then
//! environment variables, then command-line flags:
//! - `WORKER360_DATASET`: Dataset path or URL (default: data/sample-dataset.json)
//! - `WORKER360_HOST` / `WORKER360_PORT`: Bind address (default: 127.0.0.1:8360)
//! - `WORKER360_TODAY`: Fixed reference date for ages and tenures
//! - `WORKER360_LOG_LEVEL` / `WORKER360_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter override

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use worker360::api::{serve, AppState};
use worker360::config::Config;

#[derive(Parser)]
#[command(name = "worker360")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve Worker 360 dashboards over HTTP")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset path or http(s) URL
    #[arg(short, long)]
    dataset: Option<String>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Reference date for ages and tenures (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = args.dataset {
        config.dataset.source = dataset;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let pin_today = args.today.is_some() || config.render.today.is_some();
    if let Some(today) = args.today {
        config.render.today = Some(today);
    }

    worker360::logging::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Starting Worker 360 v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset source: {}", config.dataset.source);

    let render = config.render.context()?;

    // A failed load still starts the server so pages can report it
    let result = worker360::source::load(&config.dataset).await;
    match &result {
        Ok(dataset) => tracing::info!(workers = dataset.workers.len(), "Dataset loaded"),
        Err(e) => tracing::error!(error = %e, "Dataset failed to load"),
    }

    let mut state = AppState::from_load(result, config.server.clone(), render);
    if pin_today {
        state = state.with_pinned_today();
    }

    serve(state, &config.server).await?;

    tracing::info!("Worker 360 stopped");
    Ok(())
}
