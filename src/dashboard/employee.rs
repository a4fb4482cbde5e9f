//! Employee dashboard

use super::{certifications_row, languages_row, person_name, ProfileView, RenderContext};
use crate::format::{calculate_age, format_date, format_number, sub_type_label, NOT_AVAILABLE};
use crate::model::EmployeeAssignment;
use crate::render::markup::{html, Markup};
use crate::render::{
    activity_feed, card, goals_list, info_card, progress_bar, quick_actions, skills_chart, stat,
    timeline, InfoRow, QuickAction, ScopeBadge,
};

const ACTIONS: [QuickAction; 6] = [
    QuickAction::new("calendar-plus", "Request Leave"),
    QuickAction::new("file-invoice", "View Payslip"),
    QuickAction::new("bullseye", "Update Goals"),
    QuickAction::new("graduation-cap", "Enroll Training"),
    QuickAction::new("sitemap", "View Org Chart"),
    QuickAction::new("edit", "Update Profile"),
];

pub(super) fn render(
    view: &ProfileView<'_>,
    assignment: &EmployeeAssignment,
    ctx: &RenderContext,
) -> Markup {
    let worker = view.worker;
    let wr = view.wr;

    let age = calculate_age(&worker.dob, ctx.today)
        .map(|years| format!(" ({}y)", years))
        .unwrap_or_default();
    let profile = info_card(
        "Worker Profile",
        "user",
        &[
            InfoRow::new("Full Name", &worker.name),
            InfoRow::new("Date of Birth", format!("{}{}", format_date(Some(&worker.dob)), age)),
            InfoRow::new("Nationality", &worker.nationality),
            certifications_row(worker),
            languages_row(worker),
        ],
        Some(ScopeBadge::Shared),
        0.15,
    );

    let probation = if wr.probation_completed == Some(true) {
        "✓ Completed"
    } else {
        "In Progress"
    };
    let relationship = info_card(
        "Working Relationship",
        "file-contract",
        &[
            InfoRow::new("Legal Entity", &view.le.name),
            InfoRow::new("Type", sub_type_label(&wr.sub_type)),
            InfoRow::new("Contract", wr.contract_type.as_deref().unwrap_or(NOT_AVAILABLE)),
            InfoRow::new("Location", &wr.work_location),
            InfoRow::new("Start Date", format_date(Some(&wr.start_date))),
            InfoRow::new("Probation", probation),
        ],
        Some(ScopeBadge::WrSpecific),
        0.2,
    );

    let position = &assignment.position;
    let organization = info_card(
        "Organization",
        "sitemap",
        &[
            InfoRow::new("Position", &position.title),
            InfoRow::new("Level", format!("{} - {}", position.job_level, position.grade)),
            InfoRow::new("Department", &assignment.organization.department),
            InfoRow::new("Team", &assignment.organization.team),
            InfoRow::linked("Manager", person_name(assignment.manager.as_ref())),
            InfoRow::new(
                "Direct Reports",
                format!("{} people", assignment.direct_reports.len()),
            ),
        ],
        None,
        0.25,
    );

    Markup::concat([
        profile,
        relationship,
        organization,
        card(4, 0.3, "clock", "Time & Attendance", attendance(assignment)),
        card(4, 0.35, "chart-line", "Performance", performance(assignment, ctx)),
        card(4, 0.4, "cogs", "Skills Profile", skills_chart(worker)),
        card(6, 0.45, "history", "Employment History", timeline(&assignment.history)),
        card(6, 0.5, "stream", "Recent Activity", activity_feed(view.activities)),
        card(12, 0.55, "bolt", "Quick Actions", quick_actions(&ACTIONS)),
    ])
}

fn attendance(assignment: &EmployeeAssignment) -> Markup {
    let month = &assignment.time_and_attendance.this_month;
    let leave = &assignment.time_and_attendance.leave_balances;
    let percent = month.percent();
    let sick = leave
        .sick
        .as_ref()
        .map(|s| format_number(s.remaining))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    html!(
        r#"<div class="attendance">
    <div class="attendance-summary"><span>This Month</span><span>{worked}/{working} days ({percent}%)</span></div>
    {bar}
</div>
<div class="stats-row">{annual}{sick}{overtime}</div>"#,
        worked = month.days_worked,
        working = month.working_days,
        percent = percent,
        bar = progress_bar(percent),
        annual = stat(&format_number(leave.annual.remaining), "Annual", Some("success")),
        sick = stat(&sick, "Sick", None),
        overtime = stat(
            &format!("{}h", format_number(month.overtime)),
            "Overtime",
            Some("warning"),
        ),
    )
}

fn performance(assignment: &EmployeeAssignment, ctx: &RenderContext) -> Markup {
    let performance = &assignment.performance;
    let score = performance
        .rating_score
        .filter(|score| *score > 0.0)
        .map(|score| html!(r#"<div class="rating-score">{score}/5.0</div>"#, score = score))
        .unwrap_or_default();
    let shown = performance.goals.len().min(ctx.goals_shown);

    html!(
        r#"<div class="rating">
    <div class="rating-label">Current Rating</div>
    <div class="rating-value">{rating}</div>
    {score}
</div>
{goals}"#,
        rating = &performance.current_rating,
        score = score,
        goals = goals_list(&performance.goals[..shown]),
    )
}
