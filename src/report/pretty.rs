use crate::metrics::{AnalysisResult, MetricSet, RunSummary, TimeWindow};

use super::format::{format_count, format_ms, format_rate};

/// Width of the banner rule.
const BANNER_WIDTH: usize = 80;
/// Width of the rule under each window heading.
const SECTION_WIDTH: usize = 50;
const INDENT: &str = "   ";

/// Human-readable report: summary first, then every non-empty window in
/// report order. An empty result yields no lines.
#[must_use]
pub fn report_lines(result: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(summary) = result.summary() else {
        return lines;
    };

    lines.push(String::new());
    lines.push("=".repeat(BANNER_WIDTH));
    lines.push("API LOG ANALYSIS RESULTS".to_owned());
    lines.push("=".repeat(BANNER_WIDTH));

    push_summary(&mut lines, summary);

    for (window, metrics) in result.windows() {
        if metrics.is_empty() {
            continue;
        }
        push_window(&mut lines, window, metrics);
    }
    lines
}

fn push_summary(lines: &mut Vec<String>, summary: &RunSummary) {
    lines.push(String::new());
    lines.push("ANALYSIS SUMMARY".to_owned());
    lines.push(format!("{}Analysis Date: {}", INDENT, summary.analysis_date));
    lines.push(format!(
        "{}Files Analyzed: {}",
        INDENT,
        summary.files_analyzed.len()
    ));
    lines.push(format!(
        "{}Date Range: {} to {}",
        INDENT, summary.date_range.earliest, summary.date_range.latest
    ));
    lines.push(format!(
        "{}Unique Endpoints: {}",
        INDENT, summary.unique_endpoints
    ));
    lines.push(format!(
        "{}Total Records: {}",
        INDENT, summary.total_records_processed
    ));
}

fn push_window(lines: &mut Vec<String>, window: TimeWindow, metrics: &MetricSet) {
    lines.push(String::new());
    lines.push(window.label().to_owned());
    lines.push("-".repeat(SECTION_WIDTH));

    lines.push(format!(
        "{}Total Requests: {}",
        INDENT,
        format_count(metrics.total_requests)
    ));
    lines.push(format!(
        "{}Success: {} ({}%)",
        INDENT,
        format_count(metrics.success_count),
        format_rate(metrics.success_rate)
    ));
    lines.push(format!(
        "{}Failures: {} ({}%)",
        INDENT,
        format_count(metrics.failure_count),
        format_rate(metrics.failure_rate)
    ));

    lines.push(String::new());
    lines.push(format!("{}RESPONSE TIME METRICS (ms)", INDENT));
    let overall = [
        ("Average", metrics.avg_response_time_ms),
        ("Median", metrics.median_response_time_ms),
        ("Min", metrics.min_response_time_ms),
        ("Max", metrics.max_response_time_ms),
        ("95th percentile", metrics.p95_response_time_ms),
        ("99th percentile", metrics.p99_response_time_ms),
    ];
    push_latencies(lines, &overall);

    if metrics.success_count > 0 {
        lines.push(String::new());
        lines.push(format!("{}SUCCESS RESPONSE TIMES (ms)", INDENT));
        push_latencies(
            lines,
            &[
                ("Average", metrics.avg_success_response_time_ms),
                ("Min", metrics.min_success_response_time_ms),
                ("Max", metrics.max_success_response_time_ms),
            ],
        );
    }

    if metrics.failure_count > 0 {
        lines.push(String::new());
        lines.push(format!("{}FAILURE RESPONSE TIMES (ms)", INDENT));
        push_latencies(lines, &[("Average", metrics.avg_failure_response_time_ms)]);
    }
}

fn push_latencies(lines: &mut Vec<String>, entries: &[(&str, f64)]) {
    for (label, value) in entries {
        lines.push(format!("{}{}: {}", INDENT, label, format_ms(*value)));
    }
}
