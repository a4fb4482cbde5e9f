//! Page shell: sidebar, main content container and the chart bootstrap

use super::markup::{html, Markup};

/// Id of the main content container that selections replace
pub const MAIN_CONTENT_ID: &str = "mainContent";

/// Id of the JSON block the chart bootstrap reads
pub const CHART_DATA_ID: &str = "skillsChartData";

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";
const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Full HTML document around a sidebar and a main content fragment
pub fn document(title: &str, sidebar: Markup, main: Markup, chart: Markup) -> Markup {
    html!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="{font_awesome}">
    <style>{styles}</style>
</head>
<body>
    <button class="menu-toggle" type="button" aria-label="Toggle worker list"><i class="fas fa-bars"></i></button>
    <aside class="sidebar" id="sidebar">
        <div class="sidebar-header"><i class="fas fa-users"></i> Worker 360</div>
        <nav class="worker-list" id="workerList">{sidebar}</nav>
    </aside>
    <main class="main-content" id="{main_id}">{main}</main>
    {chart}
    <script src="{chart_js}"></script>
    <script>{bootstrap}</script>
</body>
</html>
"#,
        title = title,
        font_awesome = FONT_AWESOME_URL,
        styles = Markup::raw(STYLES),
        sidebar = sidebar,
        main_id = MAIN_CONTENT_ID,
        main = main,
        chart = chart,
        chart_js = CHART_JS_URL,
        bootstrap = Markup::raw(BOOTSTRAP),
    )
}

const BOOTSTRAP: &str = r#"
document.addEventListener('click', function (e) {
    var sidebar = document.getElementById('sidebar');
    if (e.target.closest('.menu-toggle')) {
        sidebar.classList.toggle('open');
    } else if (window.innerWidth < 768 && !sidebar.contains(e.target)) {
        sidebar.classList.remove('open');
    }
});
(function () {
    var data = document.getElementById('skillsChartData');
    if (!data || typeof Chart === 'undefined') return;
    var spec = JSON.parse(data.textContent);
    var canvas = document.getElementById(spec.target);
    if (!canvas) return;
    new Chart(canvas.getContext('2d'), {
        type: 'radar',
        data: {
            labels: spec.labels,
            datasets: [{
                label: 'Skill Level',
                data: spec.values,
                backgroundColor: 'rgba(37, 99, 235, 0.2)',
                borderColor: 'rgba(37, 99, 235, 1)',
                borderWidth: 2,
                pointBackgroundColor: 'rgba(37, 99, 235, 1)',
                pointBorderColor: '#fff'
            }]
        },
        options: {
            responsive: true,
            maintainAspectRatio: false,
            scales: { r: { beginAtZero: true, max: spec.max, ticks: { stepSize: 20, display: false } } },
            plugins: { legend: { display: false } }
        }
    });
})();
"#;

const STYLES: &str = r#"
:root {
    --primary: #2563eb; --success: #16a34a; --warning: #d97706; --danger: #dc2626;
    --bg: #f8fafc; --surface: #ffffff; --border: #e2e8f0;
    --text-primary: #0f172a; --text-secondary: #475569; --text-tertiary: #94a3b8;
    --space-xs: 4px; --space-sm: 8px; --space-md: 16px; --space-lg: 24px;
    --radius: 10px;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--text-primary); display: flex; }
a { color: inherit; text-decoration: none; }
.sidebar { width: 280px; min-height: 100vh; background: var(--surface); border-right: 1px solid var(--border); padding: var(--space-md); }
.sidebar-header { font-weight: 700; font-size: 1.1rem; margin-bottom: var(--space-md); }
.menu-toggle { display: none; position: fixed; top: var(--space-sm); left: var(--space-sm); z-index: 20; }
.worker-item { display: flex; gap: var(--space-sm); align-items: center; padding: var(--space-sm); border-radius: var(--radius); }
.worker-item.active, .worker-item:hover { background: #eff6ff; }
.worker-item-name { font-weight: 600; font-size: 0.875rem; }
.main-content { flex: 1; padding: var(--space-lg); min-width: 0; }
.avatar { width: 36px; height: 36px; border-radius: 50%; background: var(--primary); color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 0.8rem; }
.avatar.lg { width: 72px; height: 72px; font-size: 1.5rem; }
.badge { font-size: 0.65rem; padding: 2px 8px; border-radius: 999px; background: #e0e7ff; }
.badge.employment { background: #dbeafe; } .badge.contract { background: #fef3c7; }
.badge.internship { background: #dcfce7; } .badge.contingent { background: #f3e8ff; }
.profile-header, .wr-switcher, .card { background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: var(--space-md); margin-bottom: var(--space-md); }
.profile-header-content { display: flex; gap: var(--space-lg); }
.profile-info { flex: 1; }
.profile-name-row { display: flex; justify-content: space-between; align-items: flex-start; }
.profile-name { margin: 0; font-size: 1.5rem; }
.profile-worker-id { font-size: 0.75rem; color: var(--text-tertiary); }
.profile-meta { display: flex; flex-wrap: wrap; gap: var(--space-md); margin: var(--space-sm) 0; font-size: 0.85rem; color: var(--text-secondary); }
.status-badge { font-size: 0.75rem; padding: 2px 10px; border-radius: 999px; background: #f1f5f9; }
.status-badge.active { background: #dcfce7; color: var(--success); }
.status-badge.completed { background: #f1f5f9; color: var(--text-secondary); }
.contact-btns, .quick-actions { display: flex; flex-wrap: wrap; gap: var(--space-sm); }
.btn { border: 1px solid var(--border); background: var(--surface); border-radius: 6px; padding: 6px 12px; font-size: 0.8rem; }
.btn.primary { background: var(--primary); color: #fff; border-color: var(--primary); }
.skills-tags { display: flex; flex-wrap: wrap; gap: var(--space-xs); margin-top: var(--space-sm); }
.tag { font-size: 0.75rem; background: #f1f5f9; border-radius: 6px; padding: 2px 8px; }
.wr-cards { display: flex; gap: var(--space-md); overflow-x: auto; margin-top: var(--space-sm); }
.wr-card { border: 1px solid var(--border); border-radius: var(--radius); padding: var(--space-sm); min-width: 220px; font-size: 0.8rem; }
.wr-card.active { border-color: var(--primary); box-shadow: 0 0 0 1px var(--primary); }
.wr-card.historical { opacity: 0.7; }
.wr-card-row { display: flex; justify-content: space-between; }
.dashboard-grid { display: grid; grid-template-columns: repeat(12, 1fr); gap: var(--space-md); }
.col-4 { grid-column: span 4; } .col-6 { grid-column: span 6; } .col-8 { grid-column: span 8; } .col-12 { grid-column: span 12; }
.card-title { font-weight: 600; font-size: 0.9rem; }
.card-header { margin-bottom: var(--space-sm); }
.scope-badge { font-size: 0.6rem; padding: 1px 6px; border-radius: 4px; margin-left: var(--space-xs); }
.scope-badge.worker { background: #e0f2fe; } .scope-badge.wr { background: #fef3c7; }
.info-row { display: flex; justify-content: space-between; font-size: 0.8rem; padding: 3px 0; }
.info-label { color: var(--text-tertiary); }
.info-value.link { color: var(--primary); }
.progress-bar { height: 6px; background: #e2e8f0; border-radius: 3px; overflow: hidden; }
.progress-fill { height: 100%; background: var(--primary); }
.stats-row { display: grid; grid-template-columns: repeat(3, 1fr); gap: var(--space-sm); }
.stat { text-align: center; }
.attendance { margin-bottom: var(--space-md); }
.attendance-summary { display: flex; justify-content: space-between; font-size: 0.75rem; margin-bottom: var(--space-xs); }
.rating { text-align: center; margin-bottom: var(--space-md); }
.rating-label, .rating-score { font-size: 0.75rem; color: var(--text-secondary); }
.rating-value { font-size: 1.25rem; font-weight: 700; color: var(--success); }
.stats-row.single { grid-template-columns: 1fr; }
.billing .info-list { margin-top: var(--space-md); }
.stat-value { font-size: 1.25rem; font-weight: 700; }
.stat-value.success { color: var(--success); } .stat-value.warning { color: var(--warning); }
.stat-label { font-size: 0.7rem; color: var(--text-tertiary); }
.goal { margin-bottom: var(--space-sm); }
.goal-header, .goal-progress { display: flex; justify-content: space-between; align-items: center; gap: var(--space-sm); font-size: 0.8rem; }
.goal-status.completed { color: var(--success); }
.timeline-item { display: flex; gap: var(--space-sm); margin-bottom: var(--space-sm); font-size: 0.8rem; }
.timeline-dot { width: 10px; height: 10px; border-radius: 50%; background: var(--border); margin-top: 4px; }
.timeline-item.current .timeline-dot { background: var(--primary); }
.timeline-date, .activity-time, .deliverable-meta, .timeline-subtitle, .activity-details { color: var(--text-tertiary); font-size: 0.75rem; }
.deliverable, .activity { display: flex; gap: var(--space-sm); margin-bottom: var(--space-sm); font-size: 0.8rem; }
.deliverable-icon.completed { color: var(--success); } .deliverable-icon.in-progress { color: var(--primary); }
.chart-container { position: relative; height: 220px; }
.empty-state { text-align: center; color: var(--text-tertiary); padding: var(--space-lg); }
.error-state { color: var(--danger); }
.animate { animation: fade-in 0.4s ease both; }
@keyframes fade-in { from { opacity: 0; transform: translateY(6px); } to { opacity: 1; transform: none; } }
@media (max-width: 768px) {
    .menu-toggle { display: block; }
    .sidebar { position: fixed; left: -300px; z-index: 10; transition: left 0.2s; }
    .sidebar.open { left: 0; }
    .col-4, .col-6, .col-8 { grid-column: span 12; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_fragments() {
        let out = document(
            "Worker 360 <test>",
            Markup::raw("<a>side</a>"),
            Markup::raw("<div>body</div>"),
            Markup::new(),
        )
        .into_string();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Worker 360 &lt;test&gt;</title>"));
        assert!(out.contains(r#"<nav class="worker-list" id="workerList"><a>side</a></nav>"#));
        assert!(out.contains(r#"<main class="main-content" id="mainContent"><div>body</div></main>"#));
        assert!(out.contains(".dashboard-grid"));
    }
}
