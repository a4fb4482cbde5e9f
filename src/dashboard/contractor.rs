//! Contractor dashboard

use super::{certifications_row, languages_row, ProfileView, RenderContext};
use crate::format::{format_currency, format_date, format_number, format_period, NOT_AVAILABLE};
use crate::model::{ContractorAssignment, ContractorBilling};
use crate::render::markup::{html, Markup};
use crate::render::{
    activity_feed, card, deliverables_list, info_card, info_list, quick_actions, skills_chart,
    stat, InfoRow, QuickAction, ScopeBadge,
};

const ACTIONS: [QuickAction; 5] = [
    QuickAction::new("clock", "Log Time"),
    QuickAction::new("upload", "Submit Deliverable"),
    QuickAction::new("file-invoice", "Submit Invoice"),
    QuickAction::new("file-alt", "View SOW"),
    QuickAction::new("edit", "Update Profile"),
];

pub(super) fn render(
    view: &ProfileView<'_>,
    assignment: &ContractorAssignment,
    _ctx: &RenderContext,
) -> Markup {
    let worker = view.worker;
    let wr = view.wr;

    let profile = info_card(
        "Worker Profile",
        "user",
        &[
            InfoRow::new("Full Name", &worker.name),
            InfoRow::new("Nationality", &worker.nationality),
            certifications_row(worker),
            languages_row(worker),
        ],
        Some(ScopeBadge::Shared),
        0.15,
    );

    let contract = info_card(
        "Contract Details",
        "file-signature",
        &[
            InfoRow::new("Client", &view.le.name),
            InfoRow::new("Vendor", &assignment.vendor_company),
            InfoRow::new("Contract Type", wr.contract_type.as_deref().unwrap_or(NOT_AVAILABLE)),
            InfoRow::new("Location", &wr.work_location),
            InfoRow::new("Period", format_period(&wr.start_date, wr.end_date.as_deref())),
            InfoRow::new("Notice", wr.notice_period.as_deref().unwrap_or(NOT_AVAILABLE)),
        ],
        Some(ScopeBadge::WrSpecific),
        0.2,
    );

    let project = &assignment.project_assignment;
    let mut project_rows = vec![
        InfoRow::new("Project", &project.project_name),
        InfoRow::new("Role", &project.role),
        InfoRow::new("Start", format_date(Some(&project.start_date))),
        InfoRow::new("End", format_date(project.end_date.as_deref())),
    ];
    if let Some(pm) = &assignment.project_manager {
        project_rows.push(InfoRow::linked("PM", &pm.name));
    }
    let project = info_card("Project Assignment", "project-diagram", &project_rows, None, 0.25);

    let deliverables_title = format!(
        "Deliverables ({}/{} completed)",
        assignment.completed_deliverables(),
        assignment.deliverables.len()
    );

    Markup::concat([
        profile,
        contract,
        project,
        card(4, 0.3, "dollar-sign", "Billing Information", billing(&assignment.billing)),
        card(
            8,
            0.35,
            "tasks",
            &deliverables_title,
            deliverables_list(&assignment.deliverables),
        ),
        card(6, 0.4, "cogs", "Skills Profile", skills_chart(worker)),
        card(6, 0.45, "stream", "Recent Activity", activity_feed(view.activities)),
        card(12, 0.5, "bolt", "Quick Actions", quick_actions(&ACTIONS)),
    ])
}

fn billing(billing: &ContractorBilling) -> Markup {
    let currency = billing.rate.currency.as_str();
    let mut rows = Vec::new();
    if let Some(days) = billing.total_days {
        rows.push(InfoRow::new("Days Worked", format_number(days)));
    }
    if let Some(billed) = billing.total_billed.filter(|v| *v != 0.0) {
        rows.push(InfoRow::new("Total Billed", format_currency(billed, currency)));
    }
    if let Some(estimate) = billing.estimated_total.filter(|v| *v != 0.0) {
        rows.push(InfoRow::new("Est. Total", format_currency(estimate, currency)));
    }

    html!(
        r#"<div class="billing"><div class="stats-row single">{rate}</div>{rows}</div>"#,
        rate = stat(
            &format_currency(billing.rate.amount, currency),
            &format!("{} Rate", billing.rate_type),
            None,
        ),
        rows = info_list(&rows),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Selection;
    use crate::model::dataset::fixtures;
    use crate::model::{AssignmentRef, Dataset};
    use chrono::NaiveDate;

    fn render_for(dataset: &Dataset, worker: &str, wr: &str) -> String {
        let view = ProfileView::resolve(dataset, &Selection::new(worker, wr)).unwrap();
        let AssignmentRef::Contractor(a) = view.assignment else {
            panic!("not a contractor assignment");
        };
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
        render(&view, a, &ctx).into_string()
    }

    #[test]
    fn test_contractor_cards() {
        let dataset = fixtures::sample();
        let out = render_for(&dataset, "W002", "WR003");

        assert!(out.contains("Lion City Analytics Pte Ltd"));
        assert!(out.contains("Chen Data Consulting"));
        assert!(out.contains("01 Feb 2024 - 31 Jan 2025"));
        assert!(out.contains("14 days"));
        assert!(out.contains(r#"<span class="info-value link">Marcus Tan</span>"#));
        assert!(out.contains("$950.00"));
        assert!(out.contains("Daily Rate"));
        assert!(out.contains("$114,000.00"));
        assert!(out.contains("$228,000.00"));
        assert!(out.contains("Deliverables (1/3 completed)"));
        assert!(out.contains("Submit Deliverable"));
    }

    #[test]
    fn test_pm_row_and_billing_rows_are_optional() {
        let dataset = fixtures::sample();
        let out = render_for(&dataset, "W001", "WR002");

        assert!(!out.contains(">PM<"));
        assert!(!out.contains("Days Worked"));
        assert!(!out.contains("Est. Total"));
        assert!(out.contains("$162,000.00"));
        assert!(out.contains("Hourly Rate"));
    }

    #[test]
    fn test_unsupported_currency_and_empty_deliverables() {
        let dataset = fixtures::minimal();
        let out = render_for(&dataset, "C1", "WC");

        assert!(out.contains("10 EUR"));
        assert!(out.contains("Deliverables (0/0 completed)"));
        assert!(out.contains("No deliverables"));
        assert!(out.contains("01 Jan 2020 - Present"));
    }
}
