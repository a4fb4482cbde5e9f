//! Page Routes
//!
//! Server-rendered dashboard pages. Each request drives a fresh controller
//! over the shared dataset and ships whatever it rendered.
//!
//! - GET / - First worker
//! - GET /workers/:worker_id - Worker's primary relationship
//! - GET /workers/:worker_id/relationships/:wr_id - One relationship
//! - GET /fragments/workers/:worker_id/relationships/:wr_id - Main content only

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::api::error::PageError;
use crate::api::state::AppState;
use crate::chart::EmbeddedChartHost;
use crate::controller::{App, BufferSurface, ControllerError, ControllerResult, LOAD_FAILURE_MESSAGE};
use crate::dashboard::render_error_page;
use crate::render::{document, error_state, Markup};

type PageApp = App<BufferSurface, EmbeddedChartHost>;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let mut app = page_app(&state)?;
    let result = app.select_first();
    full_page(app, result)
}

/// GET /workers/:worker_id
pub async fn worker_page(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let mut app = page_app(&state)?;
    let result = app.select_worker(&worker_id);
    full_page(app, result)
}

/// GET /workers/:worker_id/relationships/:wr_id
pub async fn relationship_page(
    State(state): State<Arc<AppState>>,
    Path((worker_id, wr_id)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let mut app = page_app(&state)?;
    let result = app.select_relationship(&worker_id, &wr_id);
    full_page(app, result)
}

/// GET /fragments/workers/:worker_id/relationships/:wr_id
///
/// The main content container's new markup plus its chart data block.
pub async fn relationship_fragment(
    State(state): State<Arc<AppState>>,
    Path((worker_id, wr_id)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let dataset = state.dataset().map_err(|_| {
        PageError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_state(LOAD_FAILURE_MESSAGE),
        )
    })?;
    let mut app = App::with_dataset(
        BufferSurface::new(),
        EmbeddedChartHost::new(),
        state.render_context(),
        Arc::clone(dataset),
    );
    let result = app.select_relationship(&worker_id, &wr_id);

    let (surface, charts) = app.into_parts();
    let (_, main) = surface.into_parts();
    let fragment = Markup::concat([main, charts.script_markup()]);
    match result {
        Ok(()) => Ok(Html(fragment.into_string())),
        Err(e) => Err(PageError::new(status_for(&e), fragment)),
    }
}

fn page_app(state: &AppState) -> Result<PageApp, PageError> {
    match state.dataset() {
        Ok(dataset) => Ok(App::with_dataset(
            BufferSurface::new(),
            EmbeddedChartHost::new(),
            state.render_context(),
            Arc::clone(dataset),
        )),
        Err(_) => Err(PageError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            render_error_page(None, None, LOAD_FAILURE_MESSAGE),
        )),
    }
}

/// Assemble the document from what the controller rendered
fn full_page(app: PageApp, result: ControllerResult<()>) -> Result<Html<String>, PageError> {
    let title = app
        .selection()
        .zip(app.dataset())
        .and_then(|(selection, dataset)| dataset.worker(&selection.worker_id))
        .map(|worker| format!("{} · Worker 360", worker.name))
        .unwrap_or_else(|| "Worker 360".to_string());

    let (surface, charts) = app.into_parts();
    let chart = charts.script_markup();
    let (sidebar, main) = surface.into_parts();
    let page = document(&title, sidebar, main, chart);

    match result {
        Ok(()) => Ok(Html(page.into_string())),
        Err(e) => Err(PageError::new(status_for(&e), page)),
    }
}

fn status_for(error: &ControllerError) -> StatusCode {
    match error {
        ControllerError::Lookup(_) => StatusCode::NOT_FOUND,
        ControllerError::Load(_) | ControllerError::Halted => StatusCode::SERVICE_UNAVAILABLE,
        ControllerError::AlreadyLoaded | ControllerError::NotLoaded => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
