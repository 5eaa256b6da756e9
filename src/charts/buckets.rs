use chrono::{DurationRound, NaiveDateTime, TimeDelta};

use crate::metrics::{AnalysisResult, LogRecord, TimeWindow, TimezonePolicy, percentile};

/// Number of evenly spaced histogram edges, giving one bin fewer.
pub const HISTOGRAM_EDGES: usize = 30;
/// Ceiling for the histogram range so a few huge outliers do not flatten it.
pub const HISTOGRAM_CEILING_MS: f64 = 50_000.0;
const HISTOGRAM_PERCENTILE: f64 = 95.0;
const PERCENT: f64 = 100.0;

/// Request counts and latency sum for one wall-clock hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyBucket {
    pub hour: NaiveDateTime,
    pub total: u64,
    pub successes: u64,
    pub latency_sum: f64,
}

impl HourlyBucket {
    const fn empty(hour: NaiveDateTime) -> Self {
        Self {
            hour,
            total: 0,
            successes: 0,
            latency_sum: 0.0,
        }
    }

    /// Percentage of successful requests, 0 for an empty hour.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.successes as f64 / self.total as f64 * PERCENT
    }

    /// Mean latency, 0 for an empty hour.
    #[must_use]
    pub fn average_latency(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.latency_sum / self.total as f64
    }
}

fn hour_of(record: &LogRecord, timezone: TimezonePolicy) -> NaiveDateTime {
    let wall = timezone.wall_clock(record.timestamp);
    wall.duration_trunc(TimeDelta::hours(1)).unwrap_or(wall)
}

/// Groups records into consecutive wall-clock hours.
///
/// The series runs without gaps from the hour of the earliest record to the
/// hour of the latest one; hours without traffic stay at zero.
#[must_use]
pub fn hourly_buckets(records: &[LogRecord], timezone: TimezonePolicy) -> Vec<HourlyBucket> {
    let hours: Vec<NaiveDateTime> = records
        .iter()
        .map(|record| hour_of(record, timezone))
        .collect();
    let (Some(first), Some(last)) = (hours.iter().min().copied(), hours.iter().max().copied())
    else {
        return Vec::new();
    };

    let span = usize::try_from(last.signed_duration_since(first).num_hours()).unwrap_or(0);
    let mut buckets: Vec<HourlyBucket> = (0..=span)
        .map(|offset| {
            let step = TimeDelta::hours(i64::try_from(offset).unwrap_or(i64::MAX));
            HourlyBucket::empty(first.checked_add_signed(step).unwrap_or(last))
        })
        .collect();

    for (record, hour) in records.iter().zip(hours) {
        let offset = usize::try_from(hour.signed_duration_since(first).num_hours()).unwrap_or(0);
        if let Some(bucket) = buckets.get_mut(offset) {
            bucket.total = bucket.total.saturating_add(1);
            if record.success {
                bucket.successes = bucket.successes.saturating_add(1);
            }
            bucket.latency_sum += record.latency_ms;
        }
    }
    buckets
}

/// Latency frequencies split by outcome over shared bins.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyHistogram {
    pub edges: Vec<f64>,
    pub success: Vec<u64>,
    pub failure: Vec<u64>,
}

impl LatencyHistogram {
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.edges.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.success
            .iter()
            .chain(&self.failure)
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// `(left edge, right edge)` of each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.edges.iter().copied().zip(self.edges.iter().skip(1).copied())
    }
}

/// Histogram from 0 to the 95th percentile of all latencies, capped at
/// [`HISTOGRAM_CEILING_MS`].
///
/// Latencies above the upper edge are left out. The last bin includes its
/// right edge. A non-positive upper edge is widened to 1 ms.
#[must_use]
pub fn latency_histogram(records: &[LogRecord]) -> LatencyHistogram {
    let mut latencies: Vec<f64> = records.iter().map(|record| record.latency_ms).collect();
    latencies.sort_by(f64::total_cmp);

    let mut upper = percentile(&latencies, HISTOGRAM_PERCENTILE).min(HISTOGRAM_CEILING_MS);
    if upper <= 0.0 {
        upper = 1.0;
    }

    let bin_count = HISTOGRAM_EDGES.saturating_sub(1);
    let step = upper / bin_count as f64;
    let edges: Vec<f64> = (0..HISTOGRAM_EDGES)
        .map(|idx| step * idx as f64)
        .collect();

    let mut success = vec![0u64; bin_count];
    let mut failure = vec![0u64; bin_count];
    for record in records {
        let value = record.latency_ms;
        if !(0.0..=upper).contains(&value) {
            continue;
        }
        let idx = ((value / step).floor() as usize).min(bin_count.saturating_sub(1));
        let counts = if record.success {
            &mut success
        } else {
            &mut failure
        };
        if let Some(slot) = counts.get_mut(idx) {
            *slot = slot.saturating_add(1);
        }
    }

    LatencyHistogram {
        edges,
        success,
        failure,
    }
}

/// Success and failure totals of one window, as drawn in the bar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCounts {
    pub label: &'static str,
    pub success: u64,
    pub failure: u64,
}

const CHARTED_PERIODS: [(TimeWindow, &str); 4] = [
    (TimeWindow::Today, "Today"),
    (TimeWindow::Last7Days, "Last 7 Days"),
    (TimeWindow::Last30Days, "Last 30 Days"),
    (TimeWindow::AllTime, "All Time"),
];

#[must_use]
pub fn period_counts(result: &AnalysisResult) -> Vec<PeriodCounts> {
    CHARTED_PERIODS
        .iter()
        .map(|(window, label)| {
            let metrics = result.window(*window);
            PeriodCounts {
                label: *label,
                success: metrics.map_or(0, |set| set.success_count),
                failure: metrics.map_or(0, |set| set.failure_count),
            }
        })
        .collect()
}
