//! Capacity aggregation into period summaries.
//!
//! Rolls per-day workload records into a per-consultant summary, and rolls
//! multiple consultants' records into a team-level summary. The team summary is
//! the same summarization applied to the flattened union of member periods —
//! never an average of member averages — so zero-capacity periods correctly
//! pull the team figure down.

use rust_decimal::Decimal;

use crate::models::{PeriodSummary, TrendDirection, WorkloadPeriod};

use super::trend::analyze_trend;
use super::utilization::utilization_percent;

/// Summarizes an ordered sequence of workload periods.
///
/// Sums capacity and assigned hours, derives the average utilization from
/// those totals, counts overallocated and underutilized periods, and infers
/// the trend over the ordered utilization sequence. An empty input yields an
/// all-zero summary with a `Stable` trend, never an error.
///
/// # Example
///
/// ```
/// use workload_engine::calculation::summarize_periods;
/// use workload_engine::models::TrendDirection;
///
/// let summary = summarize_periods(&[]);
/// assert_eq!(summary.avg_utilization, 0);
/// assert_eq!(summary.trend, TrendDirection::Stable);
/// ```
pub fn summarize_periods(periods: &[WorkloadPeriod]) -> PeriodSummary {
    let total_capacity: Decimal = periods.iter().map(|p| p.payroll_capacity_hours).sum();
    let total_assigned: Decimal = periods.iter().map(|p| p.assigned_hours).sum();
    let avg_utilization = utilization_percent(total_assigned, total_capacity);

    let utilization_sequence: Vec<u32> = periods.iter().map(|p| p.utilization).collect();
    let peak_utilization = utilization_sequence.iter().copied().max().unwrap_or(0);
    let min_utilization = utilization_sequence.iter().copied().min().unwrap_or(0);

    PeriodSummary {
        total_capacity,
        total_assigned,
        avg_utilization,
        capacity_efficiency: avg_utilization,
        overallocated_periods: periods.iter().filter(|p| p.is_overallocated()).count(),
        underutilized_periods: periods.iter().filter(|p| p.is_underutilized()).count(),
        peak_utilization,
        min_utilization,
        trend: analyze_trend(&utilization_sequence),
    }
}

/// Summarizes a team by flattening every member's periods into one sequence.
///
/// Member order is preserved, and each member's periods keep their own date
/// order within the flattened sequence.
pub fn summarize_team(member_periods: &[Vec<WorkloadPeriod>]) -> PeriodSummary {
    let combined: Vec<WorkloadPeriod> = member_periods
        .iter()
        .flat_map(|periods| periods.iter().cloned())
        .collect();
    summarize_periods(&combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UtilizationLevel;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_period(day: u32, capacity: &str, assigned: &str) -> WorkloadPeriod {
        let capacity = dec(capacity);
        let assigned = dec(assigned);
        let utilization = utilization_percent(assigned, capacity);
        WorkloadPeriod {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            payroll_capacity_hours: capacity,
            assigned_hours: assigned,
            utilization,
            overflow_hours: (assigned - capacity).max(Decimal::ZERO),
            assignments: vec![],
            classification: UtilizationLevel::from_utilization(utilization),
        }
    }

    #[test]
    fn test_empty_input_yields_zero_summary() {
        let summary = summarize_periods(&[]);
        assert_eq!(summary.total_capacity, Decimal::ZERO);
        assert_eq!(summary.total_assigned, Decimal::ZERO);
        assert_eq!(summary.avg_utilization, 0);
        assert_eq!(summary.capacity_efficiency, 0);
        assert_eq!(summary.overallocated_periods, 0);
        assert_eq!(summary.underutilized_periods, 0);
        assert_eq!(summary.peak_utilization, 0);
        assert_eq!(summary.min_utilization, 0);
        assert_eq!(summary.trend, TrendDirection::Stable);
    }

    #[test]
    fn test_totals_and_average() {
        let periods = vec![
            make_period(11, "6", "3"),
            make_period(12, "6", "6"),
            make_period(13, "6", "9"),
        ];
        let summary = summarize_periods(&periods);
        assert_eq!(summary.total_capacity, dec("18"));
        assert_eq!(summary.total_assigned, dec("18"));
        // Average derives from the totals, not from per-day percentages.
        assert_eq!(summary.avg_utilization, 100);
        assert_eq!(summary.capacity_efficiency, 100);
    }

    #[test]
    fn test_classification_counts() {
        let periods = vec![
            make_period(11, "10", "2"),  // 20% underutilized
            make_period(12, "10", "8"),  // 80% optimal
            make_period(13, "10", "15"), // 150% overallocated
            make_period(14, "10", "12"), // 120% overallocated
        ];
        let summary = summarize_periods(&periods);
        assert_eq!(summary.underutilized_periods, 1);
        assert_eq!(summary.overallocated_periods, 2);
    }

    #[test]
    fn test_peak_and_min_utilization() {
        let periods = vec![
            make_period(11, "10", "2"),
            make_period(12, "10", "15"),
            make_period(13, "10", "8"),
        ];
        let summary = summarize_periods(&periods);
        assert_eq!(summary.peak_utilization, 150);
        assert_eq!(summary.min_utilization, 20);
    }

    #[test]
    fn test_trend_flows_from_ordered_sequence() {
        let periods = vec![
            make_period(11, "10", "2"),
            make_period(12, "10", "3"),
            make_period(13, "10", "8"),
            make_period(14, "10", "9"),
        ];
        let summary = summarize_periods(&periods);
        assert_eq!(summary.trend, TrendDirection::Increasing);
    }

    // Scenario: one idle member (capacity 10, assigned 0) and one overallocated
    // member (capacity 10, assigned 15) on the same day. The team average is
    // (0+15)/(10+10) = 75%, not the arithmetic mean of 0% and 150%.
    #[test]
    fn test_team_average_from_union_not_member_means() {
        let idle = vec![make_period(11, "10", "0")];
        let overallocated = vec![make_period(11, "10", "15")];

        let summary = summarize_team(&[idle, overallocated]);
        assert_eq!(summary.avg_utilization, 75);
        assert_eq!(summary.total_capacity, dec("20"));
        assert_eq!(summary.total_assigned, dec("15"));
        assert_eq!(summary.overallocated_periods, 1);
        assert_eq!(summary.underutilized_periods, 1);
        assert_eq!(summary.peak_utilization, 150);
        assert_eq!(summary.min_utilization, 0);
    }

    #[test]
    fn test_zero_capacity_periods_pull_team_average_down() {
        // A member with declared capacity but nothing assigned halves the
        // combined utilization.
        let busy = vec![make_period(11, "8", "8")];
        let idle = vec![make_period(11, "8", "0")];

        let summary = summarize_team(&[busy, idle]);
        assert_eq!(summary.avg_utilization, 50);
    }

    #[test]
    fn test_team_of_one_matches_member_summary() {
        let periods = vec![make_period(11, "6", "3"), make_period(12, "6", "5")];
        let member = summarize_periods(&periods);
        let team = summarize_team(std::slice::from_ref(&periods));
        assert_eq!(member, team);
    }

    #[test]
    fn test_empty_team_yields_zero_summary() {
        let summary = summarize_team(&[]);
        assert_eq!(summary.total_capacity, Decimal::ZERO);
        assert_eq!(summary.trend, TrendDirection::Stable);
    }
}
