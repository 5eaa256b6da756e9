use serde::Serialize;

use super::percentiles::{max_of, mean, min_of, percentile, round2};
use super::types::LogRecord;

const MEDIAN: f64 = 50.0;
const P95: f64 = 95.0;
const P99: f64 = 99.0;
const PERCENT: f64 = 100.0;

/// Statistics for one reporting window.
///
/// Field order is the order of the structured dump. Every float is rounded to
/// two decimals; an empty window is all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricSet {
    pub total_requests: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub success_rate: f64,
    pub failure_rate: f64,
    pub avg_response_time_ms: f64,
    pub min_response_time_ms: f64,
    pub max_response_time_ms: f64,
    pub median_response_time_ms: f64,
    pub p95_response_time_ms: f64,
    pub p99_response_time_ms: f64,
    pub avg_success_response_time_ms: f64,
    pub min_success_response_time_ms: f64,
    pub max_success_response_time_ms: f64,
    pub avg_failure_response_time_ms: f64,
}

impl MetricSet {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_requests == 0
    }
}

/// Computes the metric set for the records of one window.
pub fn compute_metric_set<'rec, I>(records: I) -> MetricSet
where
    I: IntoIterator<Item = &'rec LogRecord>,
{
    let mut all = Vec::new();
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for record in records {
        all.push(record.latency_ms);
        if record.success {
            successes.push(record.latency_ms);
        } else {
            failures.push(record.latency_ms);
        }
    }

    if all.is_empty() {
        return MetricSet::default();
    }

    let total = all.len() as f64;
    let success_rate = successes.len() as f64 / total * PERCENT;
    let failure_rate = failures.len() as f64 / total * PERCENT;

    let avg = mean(&all);
    all.sort_by(f64::total_cmp);

    MetricSet {
        total_requests: all.len() as u64,
        success_count: successes.len() as u64,
        failure_count: failures.len() as u64,
        success_rate: round2(success_rate),
        failure_rate: round2(failure_rate),
        avg_response_time_ms: round2(avg),
        min_response_time_ms: round2(min_of(&all)),
        max_response_time_ms: round2(max_of(&all)),
        median_response_time_ms: round2(percentile(&all, MEDIAN)),
        p95_response_time_ms: round2(percentile(&all, P95)),
        p99_response_time_ms: round2(percentile(&all, P99)),
        avg_success_response_time_ms: round2(mean(&successes)),
        min_success_response_time_ms: round2(min_of(&successes)),
        max_success_response_time_ms: round2(max_of(&successes)),
        avg_failure_response_time_ms: round2(mean(&failures)),
    }
}
