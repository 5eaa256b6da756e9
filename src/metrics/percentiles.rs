//! Order statistics over latency samples.

/// Scale used for two-decimal rounding.
const ROUNDING_SCALE: f64 = 100.0;
/// Divisor turning a percentile label into a fraction.
const PERCENT_DIVISOR: f64 = 100.0;

/// Linearly interpolated percentile of an ascending slice.
///
/// Uses rank `pct / 100 * (n - 1)` and interpolates between the two
/// bracketing order statistics, the default of numpy and pandas. Returns 0.0
/// for an empty slice.
#[must_use]
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let Some(last_index) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let rank = (pct / PERCENT_DIVISOR).clamp(0.0, 1.0) * last_index as f64;
    let lower_rank = rank.floor();
    let fraction = rank - lower_rank;
    let lower_index = (lower_rank as usize).min(last_index);
    let upper_index = lower_index.saturating_add(1).min(last_index);
    let lower = sorted.get(lower_index).copied().unwrap_or(0.0);
    let upper = sorted.get(upper_index).copied().unwrap_or(lower);
    lower + (upper - lower) * fraction
}

#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimals, ties to even.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * ROUNDING_SCALE).round_ties_even() / ROUNDING_SCALE
}

pub(super) fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

pub(super) fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}
