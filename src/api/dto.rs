//! Data Transfer Objects
//!
//! Request and response types for the JSON endpoints.

use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;
use crate::model::{Dataset, Worker, WorkingRelationship};

// ============================================
// ROSTER DTOs
// ============================================

/// Query parameters for the roster
#[derive(Debug, Default, Deserialize)]
pub struct WorkerListQuery {
    /// Only workers whose primary relationship has this category tag
    #[serde(default)]
    pub category: Option<String>,
}

/// Roster response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerListResponse {
    pub total: usize,
    pub workers: Vec<WorkerSummary>,
}

/// One worker in the roster
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerSummary {
    pub id: String,
    pub name: String,
    /// Category tag of the primary relationship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,
    pub relationships: Vec<RelationshipSummary>,
}

/// One working relationship in the roster
#[derive(Debug, Serialize, Deserialize)]
pub struct RelationshipSummary {
    pub id: String,
    pub category: String,
    pub sub_type: String,
    pub status: String,
    pub legal_entity: String,
}

impl RelationshipSummary {
    fn from_relationship(wr: &WorkingRelationship, dataset: &Dataset) -> Self {
        let legal_entity = dataset
            .legal_entity(&wr.le_id)
            .map(|le| le.name.clone())
            .unwrap_or_else(|| wr.le_id.clone());
        Self {
            id: wr.id.clone(),
            category: wr.category.as_str().to_string(),
            sub_type: wr.sub_type.clone(),
            status: wr.status.clone(),
            legal_entity,
        }
    }
}

impl WorkerSummary {
    pub fn from_worker(worker: &Worker, dataset: &Dataset) -> Self {
        Self {
            id: worker.id.clone(),
            name: worker.name.clone(),
            primary_category: dataset
                .primary_relationship(worker)
                .map(|wr| wr.category.as_str().to_string()),
            relationships: worker
                .working_relationships
                .iter()
                .filter_map(|id| dataset.relationship(id))
                .map(|wr| RelationshipSummary::from_relationship(wr, dataset))
                .collect(),
        }
    }
}

// ============================================
// CHART DTOs
// ============================================

/// Radar chart data for one selection
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub worker_id: String,
    pub wr_id: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub max: f64,
}

impl ChartResponse {
    pub fn new(worker_id: &str, wr_id: &str, spec: Option<ChartSpec>) -> Self {
        let (labels, values, max) = match spec {
            Some(spec) => (spec.labels, spec.values, spec.max),
            None => (Vec::new(), Vec::new(), crate::chart::SKILL_SCALE_MAX),
        };
        Self {
            worker_id: worker_id.to_string(),
            wr_id: wr_id.to_string(),
            labels,
            values,
            max,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Dataset status: "ok" or "error"
    pub dataset: String,
    /// Workers in the loaded dataset
    pub workers: usize,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Version string
    pub version: String,
}
