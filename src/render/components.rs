//! Template Renderers
//!
//! Pure functions from dataset entities to markup fragments. They never touch
//! state; every dynamic string is escaped by [`html!`]. Lists that can be
//! empty render an explicit empty-state block instead of nothing.

use chrono::NaiveDate;

use super::markup::{html, Markup};
use crate::format::{
    calculate_tenure, capitalize, format_date, format_period, initials, status_class,
    status_icon, status_label,
};
use crate::model::{
    Activity, AssignmentRef, Dataset, Deliverable, Evaluation, Goal, HistoryEntry, LegalEntity,
    Task, Worker, WorkingRelationship, WrCategory,
};

/// Element id of the canvas the skills chart attaches to
pub const SKILLS_CHART_ID: &str = "skillsChart";

/// Link to a worker's primary view
pub fn worker_href(worker_id: &str) -> String {
    format!("/workers/{}", urlencoding::encode(worker_id))
}

/// Link to a specific relationship view
pub fn relationship_href(worker_id: &str, wr_id: &str) -> String {
    format!(
        "/workers/{}/relationships/{}",
        urlencoding::encode(worker_id),
        urlencoding::encode(wr_id)
    )
}

// ============================================
// PLACEHOLDERS
// ============================================

/// Neutral placeholder for an empty collection
pub fn empty_state(message: &str) -> Markup {
    html!(
        r#"<div class="empty-state"><i class="fas fa-inbox"></i><p>{message}</p></div>"#,
        message = message,
    )
}

/// Visible diagnostic for load and lookup failures
pub fn error_state(message: &str) -> Markup {
    html!(
        r#"<div class="empty-state error-state" role="alert">
    <i class="fas fa-exclamation-triangle"></i>
    <p>{message}</p>
</div>"#,
        message = message,
    )
}

// ============================================
// SIDEBAR
// ============================================

pub fn category_badge(category: WrCategory) -> Markup {
    html!(
        r#"<span class="badge {class}">{label}</span>"#,
        class = category.as_str(),
        label = category.label(),
    )
}

/// Sidebar list of every worker, with the primary relationship's category
pub fn worker_list(dataset: &Dataset, selected: Option<&str>) -> Markup {
    if dataset.workers.is_empty() {
        return empty_state("No workers in dataset");
    }

    dataset
        .workers
        .values()
        .map(|worker| {
            let badge = dataset
                .primary_relationship(worker)
                .map(|wr| category_badge(wr.category))
                .unwrap_or_default();
            let active = if selected == Some(worker.id.as_str()) { " active" } else { "" };

            html!(
                r#"<a class="worker-item{active}" href="{href}" data-worker-id="{id}">
    <div class="avatar">{initials}</div>
    <div class="worker-item-info">
        <div class="worker-item-name">{name}</div>
        <div class="worker-item-type">{badge}</div>
    </div>
</a>"#,
                active = active,
                href = worker_href(&worker.id),
                id = &worker.id,
                initials = initials(&worker.name),
                name = &worker.name,
                badge = badge,
            )
        })
        .collect()
}

// ============================================
// PROFILE HEADER & SWITCHER
// ============================================

/// Header with identity, current engagement, contacts and top skills
pub fn profile_header(
    worker: &Worker,
    wr: &WorkingRelationship,
    le: &LegalEntity,
    assignment: AssignmentRef<'_>,
    today: NaiveDate,
    skills_shown: usize,
) -> Markup {
    let skills: Markup = worker
        .skills
        .iter()
        .take(skills_shown)
        .map(|s| html!(r#"<span class="tag">{name}</span>"#, name = s.name.as_str()))
        .collect();
    let hidden = worker.skills.len().saturating_sub(skills_shown);
    let more = if hidden > 0 {
        html!(r#"<span class="tag more">+{hidden} more</span>"#, hidden = hidden)
    } else {
        Markup::new()
    };
    let work_email = wr
        .work_email
        .as_deref()
        .map(|email| {
            html!(
                r#"<button class="btn" type="button"><i class="fas fa-at"></i> {email}</button>"#,
                email = email,
            )
        })
        .unwrap_or_default();

    html!(
        r#"<div class="profile-header animate" data-worker-id="{id}">
    <div class="profile-header-content">
        <div class="avatar lg">{initials}</div>
        <div class="profile-info">
            <div class="profile-name-row">
                <div>
                    <h1 class="profile-name">{name}</h1>
                    <div class="profile-worker-id">Worker ID: {id}</div>
                </div>
                <span class="status-badge {status_class}"><i class="fas fa-circle"></i> {status_label}</span>
            </div>
            <div class="profile-meta">
                <span class="profile-meta-item"><i class="fas fa-briefcase"></i> {title}</span>
                <span class="profile-meta-item"><i class="fas fa-building"></i> {entity}</span>
                <span class="profile-meta-item"><i class="fas fa-map-marker-alt"></i> {location}</span>
                <span class="profile-meta-item"><i class="fas fa-clock"></i> {tenure} tenure</span>
            </div>
            <div class="contact-btns">
                <button class="btn" type="button"><i class="fas fa-envelope"></i> {email}</button>
                <button class="btn" type="button"><i class="fas fa-phone"></i> {phone}</button>
                {work_email}
            </div>
            <div class="skills-tags">{skills}{more}</div>
        </div>
    </div>
</div>"#,
        id = &worker.id,
        initials = initials(&worker.name),
        name = &worker.name,
        status_class = status_class(&wr.status),
        status_label = capitalize(&wr.status),
        title = assignment.current_title(),
        entity = &le.name,
        location = &wr.work_location,
        tenure = calculate_tenure(&wr.start_date, today),
        email = &worker.email,
        phone = &worker.phone,
        work_email = work_email,
        skills = skills,
        more = more,
    )
}

/// Cards for each of a worker's relationships, with the selected one active
pub fn wr_switcher(worker: &Worker, selected_wr_id: &str, dataset: &Dataset) -> Markup {
    let relationships: Vec<&WorkingRelationship> = worker
        .working_relationships
        .iter()
        .filter_map(|id| dataset.relationship(id))
        .collect();

    let cards: Markup = relationships
        .iter()
        .map(|wr| {
            let entity = dataset
                .legal_entity(&wr.le_id)
                .map(|le| le.name.as_str())
                .unwrap_or("Unknown entity");
            let active = if wr.id == selected_wr_id { " active" } else { "" };
            let historical = if wr.is_historical() { " historical" } else { "" };

            html!(
                r#"<a class="wr-card{active}{historical}" href="{href}" data-wr-id="{wr_id}">
    <div class="wr-card-le"><i class="fas fa-building"></i> {entity}</div>
    <div class="wr-card-details">
        <div class="wr-card-row"><span>Type:</span>{badge}</div>
        <div class="wr-card-row"><span>Period:</span><span>{period}</span></div>
        <div class="wr-card-row"><span>Status:</span><span>{status}</span></div>
    </div>
</a>"#,
                active = active,
                historical = historical,
                href = relationship_href(&worker.id, &wr.id),
                wr_id = &wr.id,
                entity = entity,
                badge = category_badge(wr.category),
                period = format_period(&wr.start_date, wr.end_date.as_deref()),
                status = &wr.status,
            )
        })
        .collect();

    html!(
        r#"<div class="wr-switcher animate" style="animation-delay: 0.1s">
    <div class="wr-switcher-header">
        <span class="wr-switcher-title"><i class="fas fa-briefcase"></i> Working Relationships ({count})</span>
    </div>
    <div class="wr-cards">{cards}</div>
</div>"#,
        count = relationships.len(),
        cards = cards,
    )
}

// ============================================
// CARDS
// ============================================

/// One label/value line of an info card
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
    pub link: bool,
}

impl InfoRow {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            link: false,
        }
    }

    /// Row whose value is styled as a link (people, emails)
    pub fn linked(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            link: true,
            ..Self::new(label, value)
        }
    }
}

/// Whether a card shows worker-wide or relationship-specific data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeBadge {
    Shared,
    WrSpecific,
}

impl ScopeBadge {
    fn render(&self) -> Markup {
        match self {
            ScopeBadge::Shared => Markup::raw(r#"<span class="scope-badge worker">Shared</span>"#),
            ScopeBadge::WrSpecific => {
                Markup::raw(r#"<span class="scope-badge wr">WR-Specific</span>"#)
            }
        }
    }
}

/// Generic dashboard card
pub fn card(width: u8, delay: f64, icon: &'static str, title: &str, body: Markup) -> Markup {
    card_shell(width, delay, icon, Markup::text(title), body)
}

fn card_shell(width: u8, delay: f64, icon: &'static str, title: Markup, body: Markup) -> Markup {
    html!(
        r#"<div class="card col-{width} animate" style="animation-delay: {delay}s">
    <div class="card-header"><span class="card-title"><i class="fas fa-{icon}"></i> {title}</span></div>
    {body}
</div>"#,
        width = width,
        delay = delay,
        icon = icon,
        title = title,
        body = body,
    )
}

/// Card of label/value rows, one third of the grid wide
pub fn info_card(
    title: &str,
    icon: &'static str,
    rows: &[InfoRow],
    badge: Option<ScopeBadge>,
    delay: f64,
) -> Markup {
    let mut heading = Markup::text(title);
    if let Some(badge) = badge {
        heading.push(Markup::raw(" "));
        heading.push(badge.render());
    }

    card_shell(4, delay, icon, heading, info_list(rows))
}

/// Label/value rows without the card around them
pub fn info_list(rows: &[InfoRow]) -> Markup {
    let rows: Markup = rows
        .iter()
        .map(|row| {
            let class = if row.link { "info-value link" } else { "info-value" };
            html!(
                r#"<div class="info-row"><span class="info-label">{label}</span><span class="{class}">{value}</span></div>"#,
                label = row.label,
                class = class,
                value = &row.value,
            )
        })
        .collect();

    html!(r#"<div class="info-list">{rows}</div>"#, rows = rows)
}

pub fn progress_bar(percent: u32) -> Markup {
    html!(
        r#"<div class="progress-bar"><div class="progress-fill" style="width: {percent}%"></div></div>"#,
        percent = percent.min(100),
    )
}

/// Single figure with a caption; `tone` adds a colour class
pub fn stat(value: &str, label: &str, tone: Option<&'static str>) -> Markup {
    let class = match tone {
        Some("success") => "stat-value success",
        Some("warning") => "stat-value warning",
        _ => "stat-value",
    };
    html!(
        r#"<div class="stat"><div class="{class}">{value}</div><div class="stat-label">{label}</div></div>"#,
        class = class,
        value = value,
        label = label,
    )
}

// ============================================
// LISTS
// ============================================

pub fn goals_list(goals: &[Goal]) -> Markup {
    if goals.is_empty() {
        return empty_state("No goals set");
    }

    let items: Markup = goals
        .iter()
        .map(|g| {
            let percent = g.progress.clamp(0.0, 100.0);
            html!(
                r#"<div class="goal">
    <div class="goal-header">
        <span class="goal-title">{title}</span>
        <span class="goal-status {status_class}">{status_label}</span>
    </div>
    <div class="goal-progress">
        <div class="progress-bar" style="flex: 1;"><div class="progress-fill" style="width: {percent}%"></div></div>
        <span class="goal-percent">{progress}%</span>
    </div>
</div>"#,
                title = &g.title,
                status_class = status_class(&g.status),
                status_label = status_label(&g.status),
                percent = percent,
                progress = g.progress,
            )
        })
        .collect();

    html!(r#"<div class="goals-list">{items}</div>"#, items = items)
}

/// Timeline entry; the first entry in a timeline is the current one
fn timeline_item(index: usize, title: &str, subtitle: &str, date: Option<&str>) -> Markup {
    let state = if index == 0 { "current" } else { "completed" };
    html!(
        r#"<div class="timeline-item {state}">
    <div class="timeline-dot"></div>
    <div class="timeline-content">
        <div class="timeline-title">{title}</div>
        <div class="timeline-subtitle">{subtitle}</div>
        <div class="timeline-date">{date}</div>
    </div>
</div>"#,
        state = state,
        title = title,
        subtitle = subtitle,
        date = format_date(date),
    )
}

pub fn timeline(entries: &[HistoryEntry]) -> Markup {
    if entries.is_empty() {
        return empty_state("No history recorded");
    }

    let items: Markup = entries
        .iter()
        .enumerate()
        .map(|(i, e)| timeline_item(i, &e.event, &e.subtitle(), e.date.as_deref()))
        .collect();

    html!(r#"<div class="timeline">{items}</div>"#, items = items)
}

pub fn evaluations_timeline(evaluations: &[Evaluation]) -> Markup {
    if evaluations.is_empty() {
        return empty_state("No evaluations yet");
    }

    let items: Markup = evaluations
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let title = format!("{}: {}", e.period, e.rating);
            timeline_item(i, &title, &e.feedback, Some(&e.date))
        })
        .collect();

    html!(r#"<div class="timeline">{items}</div>"#, items = items)
}

fn status_row(status: &str, name: &str, meta: &str) -> Markup {
    html!(
        r#"<div class="deliverable">
    <div class="deliverable-icon {status_class}"><i class="fas fa-{icon}"></i></div>
    <div class="deliverable-info">
        <div class="deliverable-name">{name}</div>
        <div class="deliverable-meta">{meta}</div>
    </div>
</div>"#,
        status_class = status_class(status),
        icon = status_icon(status),
        name = name,
        meta = meta,
    )
}

pub fn deliverables_list(deliverables: &[Deliverable]) -> Markup {
    if deliverables.is_empty() {
        return empty_state("No deliverables");
    }

    let items: Markup = deliverables
        .iter()
        .map(|d| {
            let mut meta = format!("Due: {}", format_date(d.due_date.as_deref()));
            if let Some(progress) = d.progress.filter(|p| *p > 0.0) {
                meta.push_str(&format!(" • Progress: {}%", crate::format::format_number(progress)));
            }
            status_row(&d.status, &d.name, &meta)
        })
        .collect();

    html!(r#"<div class="deliverables-list">{items}</div>"#, items = items)
}

pub fn task_list(tasks: &[Task]) -> Markup {
    if tasks.is_empty() {
        return empty_state("No current tasks");
    }

    let items: Markup = tasks
        .iter()
        .map(|t| {
            let meta = format!("Priority: {} • Status: {}", t.priority, t.status);
            status_row(&t.status, &t.name, &meta)
        })
        .collect();

    html!(r#"<div class="deliverables-list">{items}</div>"#, items = items)
}

pub fn activity_feed(activities: &[Activity]) -> Markup {
    if activities.is_empty() {
        return empty_state("No recent activity");
    }

    let items: Markup = activities
        .iter()
        .map(|a| {
            html!(
                r#"<div class="activity">
    <div class="activity-icon"><i class="fas fa-{icon}"></i></div>
    <div class="activity-content">
        <div class="activity-text">{action}</div>
        <div class="activity-details">{details}</div>
        <div class="activity-time">{time}</div>
    </div>
</div>"#,
                icon = &a.icon,
                action = &a.action,
                details = &a.details,
                time = &a.time,
            )
        })
        .collect();

    html!(r#"<div class="activity-feed">{items}</div>"#, items = items)
}

/// Plain tags, e.g. system access grants
pub fn tag_list(tags: &[String], empty_message: &str) -> Markup {
    if tags.is_empty() {
        return empty_state(empty_message);
    }

    let items: Markup = tags
        .iter()
        .map(|t| html!(r#"<span class="tag">{tag}</span>"#, tag = t))
        .collect();

    html!(r#"<div class="skills-tags">{items}</div>"#, items = items)
}

/// A Quick Actions button. These are placeholders and do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
}

impl QuickAction {
    pub const fn new(icon: &'static str, label: &'static str) -> Self {
        Self { icon, label }
    }
}

pub fn quick_actions(actions: &[QuickAction]) -> Markup {
    let buttons: Markup = actions
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let class = if i == 0 { "btn primary" } else { "btn" };
            html!(
                r#"<button class="{class}" type="button"><i class="fas fa-{icon}"></i> {label}</button>"#,
                class = class,
                icon = a.icon,
                label = a.label,
            )
        })
        .collect();

    html!(r#"<div class="quick-actions">{buttons}</div>"#, buttons = buttons)
}

/// Canvas the skills chart attaches to, or a placeholder without skills
pub fn skills_chart(worker: &Worker) -> Markup {
    if worker.skills.is_empty() {
        return empty_state("No skills recorded");
    }
    html!(
        r#"<div class="chart-container"><canvas id="{id}"></canvas></div>"#,
        id = SKILLS_CHART_ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    #[test]
    fn test_hrefs_encode_each_segment() {
        assert_eq!(worker_href("W001"), "/workers/W001");
        assert_eq!(worker_href("E 1?x"), "/workers/E%201%3Fx");
        assert_eq!(
            relationship_href("E 1?x", "WR/1#a"),
            "/workers/E%201%3Fx/relationships/WR%2F1%23a"
        );
    }

    #[test]
    fn test_free_form_status_never_reaches_class_list() {
        let wr_status = "on leave";
        let goals = vec![Goal {
            title: "Ship".into(),
            status: "blocked by legal".into(),
            progress: 10.0,
        }];
        let tasks = vec![Task {
            name: "Review".into(),
            status: "waiting on-client".into(),
            priority: "High".into(),
        }];

        let goals_out = goals_list(&goals).into_string();
        assert!(goals_out.contains(r#"class="goal-status other""#));
        assert!(goals_out.contains("blocked by legal"));

        let tasks_out = task_list(&tasks).into_string();
        assert!(tasks_out.contains(r#"class="deliverable-icon other""#));
        assert!(!tasks_out.contains("deliverable-icon waiting"));

        let dataset = fixtures::sample();
        let worker = dataset.worker("W001").unwrap();
        let mut wr = dataset.relationship("WR001").unwrap().clone();
        wr.status = wr_status.into();
        let le = dataset.legal_entity(&wr.le_id).unwrap();
        let assignment = dataset.assignment_for(&wr).unwrap();

        let out = profile_header(worker, &wr, le, assignment, today(), 5).into_string();
        assert!(out.contains(r#"class="status-badge other""#));
        assert!(out.contains("On leave"));
    }

    #[test]
    fn test_profile_header_truncates_skills() {
        let dataset = fixtures::sample();
        let worker = dataset.worker("W001").unwrap();
        let wr = dataset.relationship("WR001").unwrap();
        let le = dataset.legal_entity(&wr.le_id).unwrap();
        let assignment = dataset.assignment_for(wr).unwrap();

        let out = profile_header(worker, wr, le, assignment, today(), 5).into_string();

        assert!(out.contains("Senior Backend Engineer"));
        assert!(out.contains("+2 more"));
        assert!(out.contains("Mentoring"));
        assert!(!out.contains("TypeScript"));
        assert!(out.contains("3yr 2mo tenure"));
        assert!(out.contains(r#"status-badge active"#));
        assert!(out.contains("an.nguyen@vng.example.com"));
    }

    #[test]
    fn test_profile_header_without_overflow_or_work_email() {
        let dataset = fixtures::sample();
        let worker = dataset.worker("W002").unwrap();
        let wr = dataset.relationship("WR003").unwrap();
        let le = dataset.legal_entity(&wr.le_id).unwrap();
        let assignment = dataset.assignment_for(wr).unwrap();

        let out = profile_header(worker, wr, le, assignment, today(), 5).into_string();

        assert!(!out.contains("more</span>"));
        assert!(!out.contains("fa-at"));
        assert!(out.contains("Lead Data Engineer"));
    }

    #[test]
    fn test_switcher_marks_active_and_historical() {
        let dataset = fixtures::sample();
        let worker = dataset.worker("W001").unwrap();

        let out = wr_switcher(worker, "WR001", &dataset).into_string();

        assert!(out.contains("Working Relationships (2)"));
        assert!(out.contains(r#"class="wr-card active" href="/workers/W001/relationships/WR001""#));
        assert!(out.contains(r#"class="wr-card historical" href="/workers/W001/relationships/WR002""#));
        assert!(out.contains("01 Apr 2021 - Present"));
        assert!(out.contains("15 Jan 2019 - 15 Mar 2021"));
    }

    #[test]
    fn test_worker_list_marks_selection() {
        let dataset = fixtures::sample();
        let out = worker_list(&dataset, Some("W003")).into_string();

        assert_eq!(out.matches("worker-item active").count(), 1);
        assert!(out.contains(r#"<a class="worker-item active" href="/workers/W003""#));
        assert!(out.contains(r#"<span class="badge internship">Internship</span>"#));
        assert!(out.contains(">NV<"));
    }

    #[test]
    fn test_empty_lists_render_placeholders() {
        assert!(goals_list(&[]).as_str().contains("No goals set"));
        assert!(timeline(&[]).as_str().contains("No history recorded"));
        assert!(evaluations_timeline(&[]).as_str().contains("No evaluations yet"));
        assert!(deliverables_list(&[]).as_str().contains("No deliverables"));
        assert!(task_list(&[]).as_str().contains("No current tasks"));
        assert!(activity_feed(&[]).as_str().contains("No recent activity"));
        assert!(tag_list(&[], "No system access").as_str().contains("No system access"));
    }

    #[test]
    fn test_interpolated_text_is_escaped() {
        let activity = Activity {
            icon: "bolt\" onmouseover=\"x".into(),
            action: "<script>alert(1)</script>".into(),
            details: "a & b".into(),
            time: "now".into(),
        };
        let out = activity_feed(&[activity]).into_string();

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(out.contains("a &amp; b"));
        assert!(out.contains("fa-bolt&quot; onmouseover=&quot;x"));
    }

    #[test]
    fn test_deliverable_meta() {
        let deliverables = vec![
            Deliverable {
                name: "Pipeline".into(),
                status: "in-progress".into(),
                due_date: Some("2024-08-31".into()),
                progress: Some(60.0),
            },
            Deliverable {
                name: "Report".into(),
                status: "pending".into(),
                due_date: None,
                progress: Some(0.0),
            },
        ];
        let out = deliverables_list(&deliverables).into_string();

        assert!(out.contains("Due: 31 Aug 2024 • Progress: 60%"));
        assert!(out.contains("Due: N/A</div>"));
        assert!(out.contains("fa-spinner"));
        assert!(out.contains("fa-clock"));
    }

    #[test]
    fn test_quick_actions_first_is_primary() {
        let out = quick_actions(&[
            QuickAction::new("clock", "Log Time"),
            QuickAction::new("edit", "Update Profile"),
        ])
        .into_string();

        assert_eq!(out.matches("btn primary").count(), 1);
        assert!(out.find("Log Time").unwrap() < out.find("Update Profile").unwrap());
    }

    #[test]
    fn test_skills_chart_placeholder_without_skills() {
        let dataset = fixtures::sample();
        let with_skills = skills_chart(dataset.worker("W001").unwrap());
        let without = skills_chart(dataset.worker("W004").unwrap());

        assert!(with_skills.as_str().contains(r#"<canvas id="skillsChart">"#));
        assert!(without.as_str().contains("No skills recorded"));
    }
}
