//! Worker 360 CLI
//!
//! Command-line access to the dashboards without running the server:
//! - List workers
//! - Render a dashboard page to a file
//! - Browse interactively from stdin
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

use worker360::api::dto::WorkerSummary;
use worker360::chart::EmbeddedChartHost;
use worker360::config::Config;
use worker360::controller::{App, BufferSurface, ControllerError};
use worker360::dashboard::{render_page, render_view, RenderContext, Selection};
use worker360::model::Dataset;
use worker360::render::document;

#[derive(Parser)]
#[command(name = "worker360-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Role-specific worker dashboards from a workforce dataset")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset path or http(s) URL
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,

    /// Output format for listings (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workers in dataset order
    Workers,

    /// Render one dashboard as a full HTML page
    Render {
        /// Worker id
        #[arg(short, long)]
        worker: String,
        /// Working relationship id (default: the worker's primary)
        #[arg(long)]
        wr: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Reference date for ages and tenures (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },

    /// Select workers and relationships interactively
    ///
    /// Commands: `worker <id>`, `wr <id>`, `list`, `quit`
    Browse {
        /// Rewrite this file with the current page after every command
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };
    if let Some(dataset) = cli.dataset.clone() {
        config.dataset.source = dataset;
    }
    worker360::logging::init(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Workers => {
            let dataset = worker360::source::load(&config.dataset).await?;
            let summaries = summarize(&dataset);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&summaries)?),
                _ => print_workers(&summaries, None),
            }
        }

        Commands::Render {
            worker,
            wr,
            out,
            today,
        } => {
            if today.is_some() {
                config.render.today = today;
            }
            let ctx = config.render.context()?;
            let dataset = worker360::source::load(&config.dataset).await?;

            let selection = match wr {
                Some(wr) => Selection::new(worker, wr),
                None => Selection::primary(&dataset, &worker)?,
            };
            let view = render_view(&dataset, &selection, &ctx)?;
            let page = render_page(&dataset, &view);

            match out {
                Some(path) => {
                    write_page(&path, page.as_str())?;
                    println!(
                        "Rendered {} / {} ({}) to {:?}",
                        selection.worker_id, selection.wr_id, view.category, path
                    );
                }
                None => print!("{}", page.as_str()),
            }
        }

        Commands::Browse { out } => {
            let ctx = config.render.context()?;
            browse(&config, ctx, out.as_deref()).await?;
        }

        Commands::Config { output } => {
            let config = worker360::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

type BrowseApp = App<BufferSurface, EmbeddedChartHost>;

async fn browse(config: &Config, ctx: RenderContext, out: Option<&Path>) -> anyhow::Result<()> {
    let source = worker360::source::source_from_config(&config.dataset)?;
    let mut app: BrowseApp = App::new(BufferSurface::new(), EmbeddedChartHost::new(), ctx);

    if let Err(e) = app.load_dataset(source.as_ref()).await {
        if let Some(path) = out {
            write_current(&app, path)?;
        }
        return Err(e.into());
    }
    report(&app, out)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        let result = match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit" | "exit"), _) => break,
            (Some("list"), _) => {
                if let Some(dataset) = app.dataset() {
                    let summaries = summarize(dataset);
                    let selected = app.selection().map(|s| s.worker_id.as_str());
                    print_workers(&summaries, selected);
                }
                continue;
            }
            (Some("worker"), Some(id)) => app.select_worker(id),
            (Some("wr"), Some(id)) => match app.selection().cloned() {
                Some(current) => app.select_relationship(&current.worker_id, id),
                None => {
                    eprintln!("Select a worker first");
                    continue;
                }
            },
            _ => {
                eprintln!("Commands: worker <id>, wr <id>, list, quit");
                continue;
            }
        };

        match result {
            Ok(()) => report(&app, out)?,
            Err(ControllerError::Lookup(e)) => {
                eprintln!("{}", e);
                if let Some(path) = out {
                    write_current(&app, path)?;
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Print the current selection and write the page if asked
fn report(app: &BrowseApp, out: Option<&Path>) -> anyhow::Result<()> {
    match (app.selection(), app.dataset()) {
        (Some(selection), Some(dataset)) => {
            let name = dataset
                .worker(&selection.worker_id)
                .map(|w| w.name.as_str())
                .unwrap_or_default();
            let category = dataset
                .relationship(&selection.wr_id)
                .map(|wr| wr.category.label())
                .unwrap_or_default();
            let chart = match app.charts().active() {
                Some(spec) => format!("{} skills charted", spec.labels.len()),
                None => "no chart".to_string(),
            };
            println!(
                "{} ({}) / {} [{}] - {}",
                selection.worker_id, name, selection.wr_id, category, chart
            );
        }
        _ => println!("No workers in dataset"),
    }

    if let Some(path) = out {
        write_current(app, path)?;
    }
    Ok(())
}

fn write_current(app: &BrowseApp, path: &Path) -> anyhow::Result<()> {
    let surface = app.surface();
    let page = document(
        "Worker 360",
        surface.sidebar().clone(),
        surface.main().clone(),
        app.charts().script_markup(),
    );
    write_page(path, page.as_str())
}

fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))
}

fn summarize(dataset: &Dataset) -> Vec<WorkerSummary> {
    dataset
        .workers
        .values()
        .map(|w| WorkerSummary::from_worker(w, dataset))
        .collect()
}

fn print_workers(workers: &[WorkerSummary], selected: Option<&str>) {
    if workers.is_empty() {
        println!("No workers in dataset");
        return;
    }

    println!("  {:<8} {:<28} {:<12} {}", "ID", "Name", "Primary", "Relationships");
    println!("{}", "-".repeat(66));
    for worker in workers {
        let marker = if selected == Some(worker.id.as_str()) { "*" } else { " " };
        let relationships: Vec<&str> = worker.relationships.iter().map(|r| r.id.as_str()).collect();
        println!(
            "{} {:<8} {:<28} {:<12} {}",
            marker,
            worker.id,
            worker.name,
            worker.primary_category.as_deref().unwrap_or("-"),
            relationships.join(", ")
        );
    }
}
