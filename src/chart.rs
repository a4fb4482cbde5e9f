//! Skills Radar Chart
//!
//! The chart itself is drawn client-side. This module describes what to
//! draw ([`ChartSpec`]) and tracks chart instances through the [`ChartHost`]
//! seam so that exactly one chart is live per view.

use serde::Serialize;
use tracing::{trace, warn};

use crate::model::Skill;
use crate::render::markup::Markup;
use crate::render::{CHART_DATA_ID, SKILLS_CHART_ID};

/// Upper bound of the radar scale
pub const SKILL_SCALE_MAX: f64 = 100.0;

/// Labels and values for one radar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Element id of the canvas to draw on
    pub target: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub max: f64,
}

impl ChartSpec {
    /// Chart of the first `limit` skills; `None` without skills
    pub fn from_skills(skills: &[Skill], limit: usize) -> Option<Self> {
        if skills.is_empty() || limit == 0 {
            return None;
        }
        let shown = &skills[..skills.len().min(limit)];
        Some(Self {
            target: SKILLS_CHART_ID.to_string(),
            labels: shown.iter().map(|s| s.name.clone()).collect(),
            values: shown.iter().map(|s| s.level).collect(),
            max: SKILL_SCALE_MAX,
        })
    }

    /// The spec as an inert JSON data block for the page bootstrap
    pub fn data_block(&self) -> Markup {
        let json = serde_json::to_string(self).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize chart spec");
            "null".to_string()
        });
        // No `<` may reach the script element: `</` closes it and `<!--` changes tokenizer state
        let json = json.replace('<', "\\u003c");
        Markup::from_trusted(format!(
            r#"<script type="application/json" id="{}">{}</script>"#,
            CHART_DATA_ID, json
        ))
    }
}

/// Opaque id of a created chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Something that can draw and tear down charts
pub trait ChartHost {
    fn create(&mut self, spec: &ChartSpec) -> ChartHandle;
    fn dispose(&mut self, handle: ChartHandle);
}

/// Chart host that keeps the live chart as data for embedding in a page
#[derive(Debug, Default)]
pub struct EmbeddedChartHost {
    next_id: u64,
    live: Option<(ChartHandle, ChartSpec)>,
    created: usize,
    disposed: usize,
}

impl EmbeddedChartHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec of the chart currently live, if any
    pub fn active(&self) -> Option<&ChartSpec> {
        self.live.as_ref().map(|(_, spec)| spec)
    }

    /// Data block for the live chart, or nothing
    pub fn script_markup(&self) -> Markup {
        self.active().map(ChartSpec::data_block).unwrap_or_default()
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn disposed(&self) -> usize {
        self.disposed
    }
}

impl ChartHost for EmbeddedChartHost {
    fn create(&mut self, spec: &ChartSpec) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        trace!(chart = handle.0, labels = spec.labels.len(), "Chart created");
        self.live = Some((handle, spec.clone()));
        self.created += 1;
        handle
    }

    fn dispose(&mut self, handle: ChartHandle) {
        if matches!(&self.live, Some((live, _)) if *live == handle) {
            self.live = None;
        }
        trace!(chart = handle.0, "Chart disposed");
        self.disposed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill {
                name: format!("S{}", i),
                level: (i * 10) as f64,
            })
            .collect()
    }

    #[test]
    fn test_spec_takes_first_skills() {
        let spec = ChartSpec::from_skills(&skills(8), 6).unwrap();
        assert_eq!(spec.labels, vec!["S0", "S1", "S2", "S3", "S4", "S5"]);
        assert_eq!(spec.values[5], 50.0);
        assert_eq!(spec.target, "skillsChart");
        assert_eq!(spec.max, 100.0);

        assert_eq!(ChartSpec::from_skills(&skills(2), 6).unwrap().labels.len(), 2);
        assert!(ChartSpec::from_skills(&[], 6).is_none());
    }

    #[test]
    fn test_data_block_cannot_close_script() {
        let spec = ChartSpec {
            target: "skillsChart".into(),
            labels: vec!["</script><b>".into()],
            values: vec![1.0],
            max: 100.0,
        };
        let block = spec.data_block().into_string();

        assert!(block.starts_with(r#"<script type="application/json" id="skillsChartData">"#));
        assert_eq!(block.matches("</script>").count(), 1);
        assert!(block.contains(r#"\u003c/script>\u003cb>"#));
    }

    #[test]
    fn test_data_block_neutralises_comment_openers() {
        let spec = ChartSpec {
            target: "skillsChart".into(),
            labels: vec!["<!--<script>".into()],
            values: vec![1.0],
            max: 100.0,
        };
        let block = spec.data_block().into_string();
        let json = block
            .strip_prefix(r#"<script type="application/json" id="skillsChartData">"#)
            .and_then(|rest| rest.strip_suffix("</script>"))
            .unwrap();

        assert!(!json.contains('<'));
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed["labels"][0], "<!--<script>");
    }

    #[test]
    fn test_host_tracks_live_chart() {
        let mut host = EmbeddedChartHost::new();
        let spec = ChartSpec::from_skills(&skills(3), 6).unwrap();

        let first = host.create(&spec);
        assert_eq!(host.active(), Some(&spec));

        host.dispose(first);
        let second = host.create(&spec);
        assert_ne!(first, second);
        assert_eq!(host.created(), 2);
        assert_eq!(host.disposed(), 1);

        host.dispose(second);
        assert!(host.active().is_none());
        assert!(host.script_markup().is_empty());
    }
}
