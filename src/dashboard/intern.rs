//! Intern dashboard

use super::{languages_row, person_name, ProfileView, RenderContext};
use crate::format::{calculate_age, format_currency, format_period, NOT_AVAILABLE};
use crate::model::InternAssignment;
use crate::render::markup::Markup;
use crate::render::{
    activity_feed, card, evaluations_timeline, goals_list, info_card, quick_actions,
    skills_chart, InfoRow, QuickAction, ScopeBadge,
};

const ACTIONS: [QuickAction; 5] = [
    QuickAction::new("clock", "Log Hours"),
    QuickAction::new("book", "Learning Resources"),
    QuickAction::new("calendar", "Schedule Mentor Meeting"),
    QuickAction::new("tasks", "View Tasks"),
    QuickAction::new("edit", "Update Profile"),
];

pub(super) fn render(
    view: &ProfileView<'_>,
    assignment: &InternAssignment,
    ctx: &RenderContext,
) -> Markup {
    let worker = view.worker;
    let wr = view.wr;

    let age = calculate_age(&worker.dob, ctx.today)
        .map(|years| format!("{} years old", years))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let profile = info_card(
        "Intern Profile",
        "user",
        &[
            InfoRow::new("Full Name", &worker.name),
            InfoRow::new("Age", age),
            InfoRow::new("University", &assignment.university),
            InfoRow::new("Expected Graduation", &assignment.expected_graduation),
            languages_row(worker),
        ],
        Some(ScopeBadge::Shared),
        0.15,
    );

    let program = &assignment.program;
    let stipend = format_currency(assignment.stipend.amount, &assignment.stipend.currency);
    let details = info_card(
        "Internship Details",
        "graduation-cap",
        &[
            InfoRow::new("Program", &program.name),
            InfoRow::new("Cohort", &program.cohort),
            InfoRow::new("Duration", &program.duration),
            InfoRow::new("Period", format_period(&wr.start_date, wr.end_date.as_deref())),
            InfoRow::new("Stipend", format!("{}/mo", stipend)),
        ],
        Some(ScopeBadge::WrSpecific),
        0.2,
    );

    let position = &assignment.position;
    let placement = info_card(
        "Assignment",
        "briefcase",
        &[
            InfoRow::new("Position", &position.title),
            InfoRow::new("Team", &position.team),
            InfoRow::new("Department", &position.department),
            InfoRow::linked("Mentor", person_name(assignment.mentor.as_ref())),
            InfoRow::linked("Supervisor", person_name(assignment.supervisor.as_ref())),
        ],
        None,
        0.25,
    );

    let goals_title = match assignment.average_progress() {
        Some(average) => format!("Learning Goals ({}% overall)", average),
        None => "Learning Goals".to_string(),
    };

    Markup::concat([
        profile,
        details,
        placement,
        card(6, 0.3, "bullseye", &goals_title, goals_list(&assignment.learning_goals)),
        card(6, 0.35, "star", "Evaluations", evaluations_timeline(&assignment.evaluations)),
        card(6, 0.4, "cogs", "Skills Development", skills_chart(worker)),
        card(6, 0.45, "stream", "Recent Activity", activity_feed(view.activities)),
        card(12, 0.5, "bolt", "Quick Actions", quick_actions(&ACTIONS)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Selection;
    use crate::model::dataset::fixtures;
    use crate::model::{AssignmentRef, Dataset};
    use chrono::NaiveDate;

    fn render_on(dataset: &Dataset, worker: &str, wr: &str, today: NaiveDate) -> String {
        let view = ProfileView::resolve(dataset, &Selection::new(worker, wr)).unwrap();
        let AssignmentRef::Intern(a) = view.assignment else {
            panic!("not an intern assignment");
        };
        render(&view, a, &RenderContext::new(today)).into_string()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_intern_cards() {
        let dataset = fixtures::sample();
        let out = render_on(&dataset, "W003", "WR004", date(2024, 6, 14));

        assert!(out.contains("21 years old"));
        assert!(out.contains("HCMC University of Technology"));
        assert!(out.contains("6.000.000 ₫/mo"));
        assert!(out.contains("03 Jun 2024 - 29 Nov 2024"));
        assert!(out.contains(r#"<span class="info-value link">Nguyen Van An</span>"#));
        assert!(out.contains("Learning Goals (35% overall)"));
        assert!(out.contains("Month 2: Good"));
        assert!(out.contains("Skills Development"));
        assert!(out.contains("Schedule Mentor Meeting"));
    }

    #[test]
    fn test_age_turns_over_on_birthday() {
        let dataset = fixtures::sample();
        let before = render_on(&dataset, "W003", "WR004", date(2024, 6, 14));
        let on = render_on(&dataset, "W003", "WR004", date(2024, 6, 15));

        assert!(before.contains("21 years old"));
        assert!(on.contains("22 years old"));
    }

    #[test]
    fn test_no_goals_or_evaluations() {
        let dataset = fixtures::minimal();
        let out = render_on(&dataset, "I1", "WI", date(2024, 6, 14));

        assert!(out.contains("Learning Goals</span>"));
        assert!(!out.contains("% overall"));
        assert!(out.contains("No goals set"));
        assert!(out.contains("No evaluations yet"));
        assert!(out.contains("100 ₫/mo"));
    }
}
