use serde::ser::{Serialize, SerializeMap, Serializer};

use super::clock::ReferenceTime;
use super::stats::{MetricSet, compute_metric_set};
use super::summary::{RunSummary, summarize};
use super::types::UnifiedLog;
use super::window::TimeWindow;

/// Window metrics plus the run summary.
///
/// Serializes as a map keyed by window name followed by `summary`; an empty
/// result serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    windows: Vec<(TimeWindow, MetricSet)>,
    summary: Option<RunSummary>,
}

impl AnalysisResult {
    /// The "no data" outcome.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            windows: Vec::new(),
            summary: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.summary.is_none()
    }

    #[must_use]
    pub fn window(&self, window: TimeWindow) -> Option<&MetricSet> {
        self.windows
            .iter()
            .find(|(candidate, _)| *candidate == window)
            .map(|(_, metrics)| metrics)
    }

    /// Windows in report order.
    pub fn windows(&self) -> impl Iterator<Item = (TimeWindow, &MetricSet)> {
        self.windows.iter().map(|(window, metrics)| (*window, metrics))
    }

    #[must_use]
    pub const fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let summary_entries = usize::from(self.summary.is_some());
        let mut map =
            serializer.serialize_map(Some(self.windows.len().saturating_add(summary_entries)))?;
        for (window, metrics) in &self.windows {
            map.serialize_entry(window.key(), metrics)?;
        }
        if let Some(summary) = &self.summary {
            map.serialize_entry("summary", summary)?;
        }
        map.end()
    }
}

/// Computes every window and the summary for `log` as of `reference`.
///
/// Pure: the same log and reference always give the same result. An empty
/// log gives the empty result.
#[must_use]
pub fn analyze(log: &UnifiedLog, reference: &ReferenceTime) -> AnalysisResult {
    let Some(summary) = summarize(log, reference) else {
        return AnalysisResult::empty();
    };

    let windows = TimeWindow::ALL
        .iter()
        .map(|window| {
            let metrics = compute_metric_set(window.select(log.records(), reference));
            tracing::debug!(
                "Window {}: {} requests",
                window.key(),
                metrics.total_requests
            );
            (*window, metrics)
        })
        .collect();

    AnalysisResult {
        windows,
        summary: Some(summary),
    }
}
