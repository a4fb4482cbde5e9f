//! Dashboard Selection and Layouts
//!
//! A [`Selection`] names a worker and one of their working relationships.
//! [`render_view`] resolves it against the dataset and produces the main
//! content for that relationship:
//!
//! - profile header
//! - relationship switcher
//! - the category dashboard (employee, contractor, intern, contingent)
//!
//! Rendering is pure: the same dataset, selection and context always give
//! byte-identical markup.

mod contingent;
mod contractor;
mod employee;
mod intern;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chart::ChartSpec;
use crate::format::NOT_AVAILABLE;
use crate::model::{
    Activity, AssignmentRef, Dataset, LegalEntity, PersonRef, Worker, WorkingRelationship,
    WrCategory,
};
use crate::render::markup::{html, Markup};
use crate::render::{
    document, error_state, profile_header, worker_list, wr_switcher, InfoRow,
};

/// Lookup failures while resolving a selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Worker '{0}' not found")]
    WorkerNotFound(String),

    #[error("Working relationship '{0}' not found")]
    RelationshipNotFound(String),

    #[error("Working relationship '{wr_id}' does not belong to worker '{worker_id}'")]
    RelationshipNotOwned { worker_id: String, wr_id: String },

    #[error("Worker '{0}' has no working relationships")]
    NoRelationships(String),

    #[error("Legal entity '{0}' not found")]
    LegalEntityNotFound(String),

    #[error("No {category} assignment with id '{assignment_id}'")]
    AssignmentNotFound {
        category: WrCategory,
        assignment_id: String,
    },
}

/// Knobs that affect rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Reference date for age and tenure
    pub today: NaiveDate,
    /// Skill tags shown in the profile header before "+N more"
    pub skills_shown: usize,
    /// Performance goals shown on the employee dashboard
    pub goals_shown: usize,
    /// Skills plotted on the radar chart
    pub chart_skills: usize,
}

impl RenderContext {
    pub const DEFAULT_SKILLS_SHOWN: usize = 5;
    pub const DEFAULT_GOALS_SHOWN: usize = 3;
    pub const DEFAULT_CHART_SKILLS: usize = 6;

    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            skills_shown: Self::DEFAULT_SKILLS_SHOWN,
            goals_shown: Self::DEFAULT_GOALS_SHOWN,
            chart_skills: Self::DEFAULT_CHART_SKILLS,
        }
    }

    /// Context dated with the local calendar day
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// Which worker and relationship are on screen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub worker_id: String,
    pub wr_id: String,
}

impl Selection {
    pub fn new(worker_id: impl Into<String>, wr_id: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            wr_id: wr_id.into(),
        }
    }

    /// A worker's primary (first listed) relationship
    pub fn primary(dataset: &Dataset, worker_id: &str) -> Result<Self, DashboardError> {
        let worker = dataset
            .worker(worker_id)
            .ok_or_else(|| DashboardError::WorkerNotFound(worker_id.to_string()))?;
        let wr_id = worker
            .primary_relationship_id()
            .ok_or_else(|| DashboardError::NoRelationships(worker_id.to_string()))?;
        Ok(Self::new(worker_id, wr_id))
    }

    /// The first worker in the dataset with their primary relationship
    pub fn first(dataset: &Dataset) -> Option<Self> {
        let worker = dataset.first_worker()?;
        Self::primary(dataset, &worker.id).ok()
    }
}

/// Everything one dashboard needs, resolved from a selection
#[derive(Debug, Clone, Copy)]
pub struct ProfileView<'a> {
    pub worker: &'a Worker,
    pub wr: &'a WorkingRelationship,
    pub le: &'a LegalEntity,
    pub assignment: AssignmentRef<'a>,
    pub activities: &'a [Activity],
}

impl<'a> ProfileView<'a> {
    pub fn resolve(dataset: &'a Dataset, selection: &Selection) -> Result<Self, DashboardError> {
        let worker = dataset
            .worker(&selection.worker_id)
            .ok_or_else(|| DashboardError::WorkerNotFound(selection.worker_id.clone()))?;

        if !worker.has_relationship(&selection.wr_id) {
            return Err(DashboardError::RelationshipNotOwned {
                worker_id: selection.worker_id.clone(),
                wr_id: selection.wr_id.clone(),
            });
        }

        let wr = dataset
            .relationship(&selection.wr_id)
            .ok_or_else(|| DashboardError::RelationshipNotFound(selection.wr_id.clone()))?;
        let le = dataset
            .legal_entity(&wr.le_id)
            .ok_or_else(|| DashboardError::LegalEntityNotFound(wr.le_id.clone()))?;
        let assignment =
            dataset
                .assignment_for(wr)
                .ok_or_else(|| DashboardError::AssignmentNotFound {
                    category: wr.category,
                    assignment_id: wr.assignment_id.clone(),
                })?;

        Ok(Self {
            worker,
            wr,
            le,
            assignment,
            activities: dataset.activities_for(&worker.id),
        })
    }

    pub fn category(&self) -> WrCategory {
        self.assignment.category()
    }
}

/// Main content for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub selection: Selection,
    pub category: WrCategory,
    pub markup: Markup,
    /// Radar chart to attach once the markup is on screen
    pub chart: Option<ChartSpec>,
}

/// Category-specific dashboard grid for a resolved view
pub fn render_dashboard(view: &ProfileView<'_>, ctx: &RenderContext) -> Markup {
    let body = match view.assignment {
        AssignmentRef::Employee(a) => employee::render(view, a, ctx),
        AssignmentRef::Contractor(a) => contractor::render(view, a, ctx),
        AssignmentRef::Intern(a) => intern::render(view, a, ctx),
        AssignmentRef::Contingent(a) => contingent::render(view, a, ctx),
    };

    html!(
        r#"<div class="dashboard-grid" data-dashboard="{category}">{body}</div>"#,
        category = view.category().as_str(),
        body = body,
    )
}

/// Resolve a selection and render header, switcher and dashboard
pub fn render_view(
    dataset: &Dataset,
    selection: &Selection,
    ctx: &RenderContext,
) -> Result<RenderedView, DashboardError> {
    let view = ProfileView::resolve(dataset, selection)?;
    debug!(
        worker_id = %selection.worker_id,
        wr_id = %selection.wr_id,
        category = %view.category(),
        "Rendering dashboard"
    );

    let markup = Markup::concat([
        profile_header(
            view.worker,
            view.wr,
            view.le,
            view.assignment,
            ctx.today,
            ctx.skills_shown,
        ),
        wr_switcher(view.worker, &selection.wr_id, dataset),
        render_dashboard(&view, ctx),
    ]);

    Ok(RenderedView {
        selection: selection.clone(),
        category: view.category(),
        markup,
        chart: ChartSpec::from_skills(&view.worker.skills, ctx.chart_skills),
    })
}

/// Full page for a rendered view, sidebar included
pub fn render_page(dataset: &Dataset, view: &RenderedView) -> Markup {
    let title = dataset
        .worker(&view.selection.worker_id)
        .map(|w| format!("{} · Worker 360", w.name))
        .unwrap_or_else(|| "Worker 360".to_string());
    let chart = view
        .chart
        .as_ref()
        .map(ChartSpec::data_block)
        .unwrap_or_default();

    document(
        &title,
        worker_list(dataset, Some(&view.selection.worker_id)),
        view.markup.clone(),
        chart,
    )
}

/// Full page showing a diagnostic instead of a dashboard
pub fn render_error_page(dataset: Option<&Dataset>, selected: Option<&str>, message: &str) -> Markup {
    let sidebar = dataset
        .map(|d| worker_list(d, selected))
        .unwrap_or_default();
    document(
        "Worker 360",
        sidebar,
        error_state(message),
        Markup::new(),
    )
}

// ============================================
// SHARED CARD CONTENT
// ============================================

fn languages_row(worker: &Worker) -> InfoRow {
    InfoRow::new("Languages", worker.language_names())
}

fn certifications_row(worker: &Worker) -> InfoRow {
    InfoRow::new("Certifications", format!("{} active", worker.certifications.len()))
}

/// Name of a manager, mentor or supervisor; `N/A` when unassigned
fn person_name(person: Option<&PersonRef>) -> String {
    person
        .map(|p| p.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::fixtures;

    fn ctx() -> RenderContext {
        RenderContext::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    #[test]
    fn test_primary_selection() {
        let dataset = fixtures::sample();
        assert_eq!(
            Selection::primary(&dataset, "W001").unwrap(),
            Selection::new("W001", "WR001")
        );
        assert_eq!(
            Selection::primary(&dataset, "W999"),
            Err(DashboardError::WorkerNotFound("W999".into()))
        );
        assert_eq!(Selection::first(&dataset), Some(Selection::new("W001", "WR001")));
    }

    #[test]
    fn test_each_category_renders_its_dashboard() {
        let dataset = fixtures::sample();
        for (worker, wr, category) in [
            ("W001", "WR001", "employment"),
            ("W001", "WR002", "contract"),
            ("W002", "WR003", "contract"),
            ("W003", "WR004", "internship"),
            ("W004", "WR005", "contingent"),
        ] {
            let view = render_view(&dataset, &Selection::new(worker, wr), &ctx()).unwrap();
            let marker = format!(r#"data-dashboard="{}""#, category);
            assert!(view.markup.as_str().contains(&marker), "{} {}", worker, wr);
            assert_eq!(view.category.as_str(), category);
        }
    }

    #[test]
    fn test_relationship_of_other_worker_is_rejected() {
        let dataset = fixtures::sample();
        let err = render_view(&dataset, &Selection::new("W002", "WR001"), &ctx()).unwrap_err();
        assert_eq!(
            err,
            DashboardError::RelationshipNotOwned {
                worker_id: "W002".into(),
                wr_id: "WR001".into()
            }
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let dataset = fixtures::sample();
        let selection = Selection::new("W002", "WR003");
        let a = render_view(&dataset, &selection, &ctx()).unwrap();
        let b = render_view(&dataset, &selection, &ctx()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_chart_follows_skills() {
        let dataset = fixtures::sample();
        let with = render_view(&dataset, &Selection::new("W001", "WR001"), &ctx()).unwrap();
        let without = render_view(&dataset, &Selection::new("W004", "WR005"), &ctx()).unwrap();

        let chart = with.chart.unwrap();
        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.labels[0], "Rust");
        assert!(without.chart.is_none());
        assert!(!without.markup.as_str().contains("<canvas"));
    }

    #[test]
    fn test_minimal_dataset_renders_empty_states() {
        let dataset = fixtures::minimal();
        for (worker, wr, placeholders) in [
            ("E1", "WE", &["No goals set", "No history recorded", "No recent activity"][..]),
            ("C1", "WC", &["No deliverables", "No recent activity"][..]),
            ("I1", "WI", &["No goals set", "No evaluations yet"][..]),
            ("G1", "WG", &["No current tasks", "No system access"][..]),
        ] {
            let view = render_view(&dataset, &Selection::new(worker, wr), &ctx()).unwrap();
            for text in placeholders {
                assert!(view.markup.as_str().contains(text), "{} missing '{}'", worker, text);
            }
            assert!(view.markup.as_str().contains("No skills recorded"));
        }
    }

    #[test]
    fn test_page_embeds_chart_data() {
        let dataset = fixtures::sample();
        let view = render_view(&dataset, &Selection::new("W002", "WR003"), &ctx()).unwrap();
        let page = render_page(&dataset, &view).into_string();

        assert!(page.contains("<title>Sarah Chen · Worker 360</title>"));
        assert!(page.contains(r#"id="skillsChartData""#));
        assert!(page.contains(r#"<a class="worker-item active" href="/workers/W002""#));
    }

    #[test]
    fn test_error_page_without_dataset() {
        let page = render_error_page(None, None, "Failed to load data").into_string();
        assert!(page.contains("error-state"));
        assert!(page.contains("Failed to load data"));
    }
}
