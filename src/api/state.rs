//! Application State
//!
//! Shared state accessible by all handlers. The dataset is loaded once at
//! startup and shared read-only; a failed load is kept so every request can
//! report it.

use std::sync::Arc;
use std::time::Instant;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ServerConfig;
use crate::dashboard::RenderContext;
use crate::model::{Dataset, DatasetResult};

/// Outcome of the startup dataset load
#[derive(Debug, Clone)]
pub enum DatasetState {
    Ready(Arc<Dataset>),
    Failed(String),
}

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: DatasetState,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    render: RenderContext,
    /// Keep `render.today` instead of following the calendar
    pin_today: bool,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// State over a loaded dataset, dated with the local calendar
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig, render: RenderContext) -> Self {
        Self {
            dataset: DatasetState::Ready(dataset),
            config: Arc::new(config),
            render,
            pin_today: false,
            start_time: Instant::now(),
        }
    }

    /// State from a load result; failures are kept and served as 503s
    pub fn from_load(
        result: DatasetResult<Dataset>,
        config: ServerConfig,
        render: RenderContext,
    ) -> Self {
        let dataset = match result {
            Ok(dataset) => DatasetState::Ready(Arc::new(dataset)),
            Err(e) => DatasetState::Failed(e.to_string()),
        };
        Self {
            dataset,
            config: Arc::new(config),
            render,
            pin_today: false,
            start_time: Instant::now(),
        }
    }

    /// Keep the context's date fixed for every request
    pub fn with_pinned_today(mut self) -> Self {
        self.pin_today = true;
        self
    }

    /// Render context for one request
    pub fn render_context(&self) -> RenderContext {
        let mut ctx = self.render;
        if !self.pin_today {
            ctx.today = chrono::Local::now().date_naive();
        }
        ctx
    }

    /// The dataset, or 503 if it failed to load
    pub fn dataset(&self) -> ApiResult<&Arc<Dataset>> {
        match &self.dataset {
            DatasetState::Ready(dataset) => Ok(dataset),
            DatasetState::Failed(reason) => Err(ApiError::ServiceUnavailable(reason.clone())),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.dataset, DatasetState::Ready(_))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
