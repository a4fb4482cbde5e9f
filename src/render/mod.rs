//! Markup Rendering
//!
//! - **markup**: escape-by-default `Markup` type and the `html!` macro
//! - **components**: shared fragments (sidebar, header, switcher, cards, lists)
//! - **page**: the full HTML document around them

pub mod components;
pub mod markup;
pub mod page;

pub use components::{
    activity_feed, card, category_badge, deliverables_list, empty_state, error_state,
    evaluations_timeline, goals_list, info_card, info_list, profile_header, progress_bar,
    quick_actions, relationship_href, skills_chart, stat, tag_list, task_list, timeline,
    worker_href, worker_list, wr_switcher, InfoRow, QuickAction, ScopeBadge, SKILLS_CHART_ID,
};
pub use markup::{escape, Markup, ToMarkup};
pub use page::{document, CHART_DATA_ID, MAIN_CONTENT_ID};
