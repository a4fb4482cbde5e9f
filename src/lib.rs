//! # Worker 360
//!
//! Role-specific profile dashboards for a workforce dataset. One person can
//! hold several working relationships (employment, contract, internship,
//! contingent), each rendered with a dashboard suited to its category.
//!
//! ## Modules
//!
//! - [`model`]: Dataset entities, loading and validation
//! - [`source`]: Where the dataset comes from (file or HTTP)
//! - [`format`]: Dates, currency and label helpers
//! - [`render`]: Escape-by-default markup and shared components
//! - [`dashboard`]: Category dashboards and the pure view renderer
//! - [`chart`]: Skills radar chart lifecycle
//! - [`controller`]: Selection state driving a render surface
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use worker360::dashboard::{render_page, render_view, RenderContext, Selection};
//! use worker360::model::Dataset;
//!
//! let json = std::fs::read_to_string("data/sample-dataset.json").unwrap();
//! let dataset = Dataset::from_json_str(&json).unwrap();
//!
//! let selection = Selection::primary(&dataset, "W001").unwrap();
//! let view = render_view(&dataset, &selection, &RenderContext::today()).unwrap();
//! let page = render_page(&dataset, &view);
//!
//! std::fs::write("W001.html", page.as_str()).unwrap();
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod format;
pub mod logging;
pub mod model;
pub mod render;
pub mod source;

// Re-export top-level types for convenience
pub use model::{
    Dataset, DatasetError, DatasetResult, Worker, WorkingRelationship, WrCategory,
};

pub use dashboard::{
    render_page, render_view, DashboardError, RenderContext, RenderedView, Selection,
};

pub use controller::{App, BufferSurface, ControllerError, Surface};

pub use chart::{ChartHost, ChartSpec, EmbeddedChartHost};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError};

pub use source::{DatasetSource, FileSource, HttpSource};
