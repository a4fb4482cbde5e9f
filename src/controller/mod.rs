//! Application Controller
//!
//! Owns the loaded dataset and the current selection, renders views into a
//! [`Surface`] and keeps exactly one skills chart alive through a
//! [`ChartHost`].
//!
//! # Lifecycle
//!
//! ```text
//! new ──load_dataset──► ready ──select_worker / select_relationship──► ready
//!          │
//!          └─ failure ──► halted (every later call returns Halted)
//! ```

mod surface;

pub use surface::{BufferSurface, Surface};

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::chart::{ChartHandle, ChartHost, ChartSpec};
use crate::dashboard::{render_view, DashboardError, RenderContext, Selection};
use crate::model::{Dataset, DatasetError};
use crate::render::{error_state, worker_list};
use crate::source::DatasetSource;

/// Shown in place of the dashboard when the dataset cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data. Please refresh the page.";

/// Controller errors
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Dataset could not be loaded: {0}")]
    Load(#[from] DatasetError),

    #[error("{0}")]
    Lookup(#[from] DashboardError),

    #[error("Dataset is already loaded")]
    AlreadyLoaded,

    #[error("No dataset loaded yet")]
    NotLoaded,

    #[error("Session halted after a failed dataset load")]
    Halted,
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Single-owner view controller
pub struct App<S: Surface, C: ChartHost> {
    surface: S,
    charts: C,
    ctx: RenderContext,
    dataset: Option<Arc<Dataset>>,
    selection: Option<Selection>,
    chart: Option<ChartHandle>,
    halted: bool,
}

impl<S: Surface, C: ChartHost> App<S, C> {
    pub fn new(surface: S, charts: C, ctx: RenderContext) -> Self {
        Self {
            surface,
            charts,
            ctx,
            dataset: None,
            selection: None,
            chart: None,
            halted: false,
        }
    }

    /// Controller over an already loaded dataset, with nothing selected
    pub fn with_dataset(surface: S, charts: C, ctx: RenderContext, dataset: Arc<Dataset>) -> Self {
        let mut app = Self::new(surface, charts, ctx);
        app.attach(dataset);
        app
    }

    /// Load the dataset once and select the first worker
    pub async fn load_dataset(&mut self, source: &dyn DatasetSource) -> ControllerResult<()> {
        if self.halted {
            return Err(ControllerError::Halted);
        }
        if self.dataset.is_some() {
            return Err(ControllerError::AlreadyLoaded);
        }

        match source.load().await {
            Ok(dataset) => {
                info!(source = %source.describe(), "Controller ready");
                self.attach(Arc::new(dataset));
                self.select_first()
            }
            Err(e) => {
                error!(source = %source.describe(), error = %e, "Failed to load dataset");
                self.halted = true;
                self.surface.replace_main(error_state(LOAD_FAILURE_MESSAGE));
                Err(ControllerError::Load(e))
            }
        }
    }

    /// Select the first worker in dataset order, if there is one
    pub fn select_first(&mut self) -> ControllerResult<()> {
        let dataset = self.ready()?;
        match dataset.first_worker() {
            Some(worker) => self.select_worker(&worker.id),
            None => {
                warn!("Dataset has no workers");
                Ok(())
            }
        }
    }

    /// Show a worker's primary relationship
    pub fn select_worker(&mut self, worker_id: &str) -> ControllerResult<()> {
        let dataset = self.ready()?;
        match Selection::primary(&dataset, worker_id) {
            Ok(selection) => self.show(&dataset, selection),
            Err(e) => self.show_lookup_failure(&dataset, Some(worker_id), e),
        }
    }

    /// Show one of a worker's relationships
    pub fn select_relationship(&mut self, worker_id: &str, wr_id: &str) -> ControllerResult<()> {
        let dataset = self.ready()?;
        self.show(&dataset, Selection::new(worker_id, wr_id))
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    pub fn into_parts(self) -> (S, C) {
        (self.surface, self.charts)
    }

    fn attach(&mut self, dataset: Arc<Dataset>) {
        self.surface.replace_sidebar(worker_list(&dataset, None));
        self.dataset = Some(dataset);
    }

    fn ready(&self) -> ControllerResult<Arc<Dataset>> {
        if self.halted {
            return Err(ControllerError::Halted);
        }
        self.dataset.clone().ok_or(ControllerError::NotLoaded)
    }

    fn show(&mut self, dataset: &Dataset, selection: Selection) -> ControllerResult<()> {
        let view = match render_view(dataset, &selection, &self.ctx) {
            Ok(view) => view,
            Err(e) => return self.show_lookup_failure(dataset, Some(&selection.worker_id), e),
        };

        self.surface
            .replace_sidebar(worker_list(dataset, Some(&selection.worker_id)));
        self.surface.replace_main(view.markup);
        self.refresh_chart(view.chart);
        self.selection = Some(selection);
        Ok(())
    }

    fn show_lookup_failure(
        &mut self,
        dataset: &Dataset,
        worker_id: Option<&str>,
        e: DashboardError,
    ) -> ControllerResult<()> {
        warn!(worker_id = ?worker_id, error = %e, "Selection failed");
        let known = worker_id.filter(|id| dataset.worker(id).is_some());
        self.surface.replace_sidebar(worker_list(dataset, known));
        self.surface.replace_main(error_state(&e.to_string()));
        self.refresh_chart(None);
        self.selection = None;
        Err(ControllerError::Lookup(e))
    }

    /// Dispose the previous chart, then draw a new one if its canvas exists
    fn refresh_chart(&mut self, spec: Option<ChartSpec>) {
        if let Some(handle) = self.chart.take() {
            self.charts.dispose(handle);
        }
        if let Some(spec) = spec {
            if self.surface.has_element(&spec.target) {
                self.chart = Some(self.charts.create(&spec));
            }
        }
    }
}
