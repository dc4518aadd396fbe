//! Utilization trend classification.
//!
//! Given an ordered sequence of per-day utilization percentages, this module
//! decides whether load is trending up, down, or holding steady by comparing
//! the mean of the first half against the mean of the second half.

use rust_decimal::Decimal;

use crate::models::TrendDirection;

/// Minimum number of data points required before a trend can be inferred.
pub const TREND_MIN_SAMPLES: usize = 3;

/// The half-mean difference, in percentage points, required to call a trend.
///
/// Fixed design constant, not derived from the data.
pub const TREND_THRESHOLD: u32 = 5;

/// Classifies the trend of an ordered utilization sequence.
///
/// Sequences shorter than [`TREND_MIN_SAMPLES`] are always `Stable`. Otherwise
/// the sequence splits into first and second halves (for odd lengths the middle
/// element belongs to neither) and the half means are compared against
/// [`TREND_THRESHOLD`].
///
/// # Example
///
/// ```
/// use workload_engine::calculation::analyze_trend;
/// use workload_engine::models::TrendDirection;
///
/// assert_eq!(analyze_trend(&[50, 60, 80, 90]), TrendDirection::Increasing);
/// assert_eq!(analyze_trend(&[90, 80, 60, 50]), TrendDirection::Decreasing);
/// assert_eq!(analyze_trend(&[75, 75]), TrendDirection::Stable);
/// ```
pub fn analyze_trend(utilization: &[u32]) -> TrendDirection {
    if utilization.len() < TREND_MIN_SAMPLES {
        return TrendDirection::Stable;
    }

    let half = utilization.len() / 2;
    let first_mean = mean(&utilization[..half]);
    let second_mean = mean(&utilization[utilization.len() - half..]);
    let threshold = Decimal::from(TREND_THRESHOLD);

    if second_mean > first_mean + threshold {
        TrendDirection::Increasing
    } else if second_mean < first_mean - threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[u32]) -> Decimal {
    // Callers guarantee non-empty halves; guard anyway so the function is total.
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().map(|v| Decimal::from(*v)).sum();
    sum / Decimal::from(values.len() as u64)
}
