//! Contingent worker dashboard

use super::{certifications_row, languages_row, person_name, ProfileView, RenderContext};
use crate::format::{format_currency, format_period};
use crate::model::ContingentAssignment;
use crate::render::markup::{html, Markup};
use crate::render::{
    activity_feed, card, info_card, info_list, quick_actions, skills_chart, stat, tag_list,
    task_list, InfoRow, QuickAction, ScopeBadge,
};

const ACTIONS: [QuickAction; 5] = [
    QuickAction::new("clock", "Log Time"),
    QuickAction::new("tasks", "Update Tasks"),
    QuickAction::new("comments", "Contact Agency"),
    QuickAction::new("file-alt", "View Contract"),
    QuickAction::new("edit", "Update Profile"),
];

pub(super) fn render(
    view: &ProfileView<'_>,
    assignment: &ContingentAssignment,
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

    let agency = &assignment.agency;
    let agency_card = info_card(
        "Agency Details",
        "building",
        &[
            InfoRow::new("Agency", &agency.name),
            InfoRow::new("Contact", &agency.contact_person),
            InfoRow::linked("Email", &agency.contact_email),
            InfoRow::new("Client", &view.le.name),
            InfoRow::new("Period", format_period(&wr.start_date, wr.end_date.as_deref())),
        ],
        Some(ScopeBadge::WrSpecific),
        0.2,
    );

    let role = &assignment.assignment;
    let role_card = info_card(
        "Assignment",
        "briefcase",
        &[
            InfoRow::new("Title", &role.title),
            InfoRow::new("Team", &role.team),
            InfoRow::new("Department", &role.department),
            InfoRow::linked("Supervisor", person_name(assignment.supervisor.as_ref())),
            InfoRow::new("Location", &wr.work_location),
        ],
        None,
        0.25,
    );

    let billing = &assignment.billing;
    let billing_body = html!(
        r#"<div class="billing"><div class="stats-row single">{rate}</div>{rows}</div>"#,
        rate = stat(
            &format_currency(billing.rate.amount, &billing.rate.currency),
            &billing.rate_type,
            None,
        ),
        rows = info_list(&[
            InfoRow::new("Billed To", &billing.billed_to),
            InfoRow::new("Agency Markup", &billing.markup),
        ]),
    );

    let tasks_title = format!(
        "Current Tasks ({}/{})",
        assignment.completed_tasks(),
        assignment.current_tasks.len()
    );

    Markup::concat([
        profile,
        agency_card,
        role_card,
        card(4, 0.3, "dollar-sign", "Billing", billing_body),
        card(8, 0.35, "tasks", &tasks_title, task_list(&assignment.current_tasks)),
        card(
            4,
            0.4,
            "key",
            "System Access",
            tag_list(&assignment.access_systems, "No system access"),
        ),
        card(4, 0.45, "cogs", "Skills Profile", skills_chart(worker)),
        card(4, 0.5, "stream", "Recent Activity", activity_feed(view.activities)),
        card(12, 0.55, "bolt", "Quick Actions", quick_actions(&ACTIONS)),
    ])
}
