//! Worker Routes
//!
//! JSON views over the loaded dataset.
//!
//! - GET /api/v1/workers - Roster, optionally filtered by `?category=`
//! - GET /api/v1/workers/:worker_id/relationships/:wr_id/chart - Radar chart data

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartResponse, WorkerListQuery, WorkerListResponse, WorkerSummary};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart::ChartSpec;
use crate::dashboard::{ProfileView, Selection};
use crate::model::WrCategory;

/// GET /api/v1/workers
///
/// Workers in dataset order.
pub async fn list_workers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WorkerListQuery>,
) -> ApiResult<Json<WorkerListResponse>> {
    let dataset = state.dataset()?;
    let category = query
        .category
        .as_deref()
        .map(str::parse::<WrCategory>)
        .transpose()?;

    let workers: Vec<WorkerSummary> = dataset
        .workers
        .values()
        .filter(|worker| match category {
            Some(category) => dataset
                .primary_relationship(worker)
                .is_some_and(|wr| wr.category == category),
            None => true,
        })
        .map(|worker| WorkerSummary::from_worker(worker, dataset))
        .collect();

    Ok(Json(WorkerListResponse {
        total: workers.len(),
        workers,
    }))
}

/// GET /api/v1/workers/:worker_id/relationships/:wr_id/chart
///
/// Skills plotted for the selection; empty when the worker has no skills.
pub async fn chart(
    State(state): State<Arc<AppState>>,
    Path((worker_id, wr_id)): Path<(String, String)>,
) -> ApiResult<Json<ChartResponse>> {
    let dataset = state.dataset()?;
    let selection = Selection::new(worker_id, wr_id);
    let view = ProfileView::resolve(dataset, &selection)?;
    let spec = ChartSpec::from_skills(&view.worker.skills, state.render_context().chart_skills);

    Ok(Json(ChartResponse::new(
        &selection.worker_id,
        &selection.wr_id,
        spec,
    )))
}
