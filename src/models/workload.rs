//! Derived workload result models.
//!
//! This module contains the per-day [`WorkloadPeriod`] record, the rolled-up
//! [`PeriodSummary`], and the [`UtilizationLevel`] / [`TrendDirection`]
//! classifications. All of these are pure derivations of their inputs, created
//! fresh per query and never mutated incrementally.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AssignmentStatus;

/// Utilization below this percentage classifies a period as underutilized.
pub const OPTIMAL_UTILIZATION_MIN: u32 = 70;

/// Utilization above this percentage (up to 100) classifies a period as high.
pub const OPTIMAL_UTILIZATION_MAX: u32 = 85;

/// Classification band for a period's utilization percentage.
///
/// Exactly one band applies to any utilization value:
/// `<70` underutilized, `70–85` optimal, `>85..=100` high, `>100` overallocated.
///
/// # Example
///
/// ```
/// use workload_engine::models::UtilizationLevel;
///
/// assert_eq!(UtilizationLevel::from_utilization(0), UtilizationLevel::Underutilized);
/// assert_eq!(UtilizationLevel::from_utilization(70), UtilizationLevel::Optimal);
/// assert_eq!(UtilizationLevel::from_utilization(100), UtilizationLevel::High);
/// assert_eq!(UtilizationLevel::from_utilization(101), UtilizationLevel::Overallocated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationLevel {
    /// Utilization below 70%.
    Underutilized,
    /// Utilization from 70% to 85% inclusive.
    Optimal,
    /// Utilization above 85%, up to and including 100%.
    High,
    /// Utilization above 100%: more assigned work than declared capacity.
    Overallocated,
}

impl UtilizationLevel {
    /// Classifies a rounded utilization percentage.
    pub fn from_utilization(utilization: u32) -> Self {
        if utilization < OPTIMAL_UTILIZATION_MIN {
            UtilizationLevel::Underutilized
        } else if utilization <= OPTIMAL_UTILIZATION_MAX {
            UtilizationLevel::Optimal
        } else if utilization <= 100 {
            UtilizationLevel::High
        } else {
            UtilizationLevel::Overallocated
        }
    }
}

impl std::fmt::Display for UtilizationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UtilizationLevel::Underutilized => "underutilized",
            UtilizationLevel::Optimal => "optimal",
            UtilizationLevel::High => "high",
            UtilizationLevel::Overallocated => "overallocated",
        };
        write!(f, "{}", name)
    }
}

/// Direction of a utilization trend over an ordered sequence of periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// The second half of the sequence averages more than 5 points above the first.
    Increasing,
    /// The second half of the sequence averages more than 5 points below the first.
    Decreasing,
    /// Neither half dominates, or the sequence is too short to tell.
    Stable,
}

/// The share of one assignment's effort landing on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentAllocation {
    /// The assignment's unique identifier.
    pub assignment_id: String,
    /// Human-readable name of the pay run.
    pub name: String,
    /// The client this pay run belongs to.
    pub client_name: String,
    /// Hours allocated to this day.
    pub hours: Decimal,
    /// The assignment's lifecycle status.
    pub status: AssignmentStatus,
}

/// One calendar day's workload picture for a consultant.
///
/// Every day in the requested range produces a period, weekends and holidays
/// included; those simply carry whatever capacity their weekday declares,
/// typically zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadPeriod {
    /// The calendar date.
    pub date: NaiveDate,
    /// The capacity declared by the date's weekday schedule entry.
    pub payroll_capacity_hours: Decimal,
    /// Total hours distributed onto this date across all assignments.
    pub assigned_hours: Decimal,
    /// `round(assigned/capacity*100)`, or 0 when capacity is 0.
    pub utilization: u32,
    /// Hours assigned beyond capacity: `max(0, assigned - capacity)`.
    pub overflow_hours: Decimal,
    /// Per-assignment breakdown of the assigned hours.
    pub assignments: Vec<AssignmentAllocation>,
    /// Classification band for this day's utilization.
    pub classification: UtilizationLevel,
}

impl WorkloadPeriod {
    /// Returns true when utilization exceeds 100%.
    pub fn is_overallocated(&self) -> bool {
        self.utilization > 100
    }

    /// Returns true when utilization is below 70%.
    pub fn is_underutilized(&self) -> bool {
        self.utilization < OPTIMAL_UTILIZATION_MIN
    }
}

/// Rolled-up workload figures for a consultant or a team over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of capacity hours across all periods.
    pub total_capacity: Decimal,
    /// Sum of assigned hours across all periods.
    pub total_assigned: Decimal,
    /// `round(total_assigned/total_capacity*100)`, or 0 when capacity is 0.
    pub avg_utilization: u32,
    /// Alias of `avg_utilization` kept for dashboard consumers.
    pub capacity_efficiency: u32,
    /// Number of periods classified as overallocated.
    pub overallocated_periods: usize,
    /// Number of periods classified as underutilized.
    pub underutilized_periods: usize,
    /// Highest per-period utilization observed.
    pub peak_utilization: u32,
    /// Lowest per-period utilization observed.
    pub min_utilization: u32,
    /// Trend over the ordered per-period utilization sequence.
    pub trend: TrendDirection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_period(utilization: u32) -> WorkloadPeriod {
        WorkloadPeriod {
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            payroll_capacity_hours: dec("6"),
            assigned_hours: dec("3"),
            utilization,
            overflow_hours: Decimal::ZERO,
            assignments: vec![],
            classification: UtilizationLevel::from_utilization(utilization),
        }
    }

    #[test]
    fn test_classification_band_edges() {
        assert_eq!(
            UtilizationLevel::from_utilization(69),
            UtilizationLevel::Underutilized
        );
        assert_eq!(
            UtilizationLevel::from_utilization(70),
            UtilizationLevel::Optimal
        );
        assert_eq!(
            UtilizationLevel::from_utilization(85),
            UtilizationLevel::Optimal
        );
        assert_eq!(UtilizationLevel::from_utilization(86), UtilizationLevel::High);
        assert_eq!(
            UtilizationLevel::from_utilization(100),
            UtilizationLevel::High
        );
        assert_eq!(
            UtilizationLevel::from_utilization(101),
            UtilizationLevel::Overallocated
        );
    }

    #[test]
    fn test_exactly_one_band_applies() {
        for utilization in 0..=250 {
            let level = UtilizationLevel::from_utilization(utilization);
            let matches = [
                utilization < 70,
                (70..=85).contains(&utilization),
                (86..=100).contains(&utilization),
                utilization > 100,
            ];
            assert_eq!(matches.iter().filter(|m| **m).count(), 1);
            let expected = match matches.iter().position(|m| *m).unwrap() {
                0 => UtilizationLevel::Underutilized,
                1 => UtilizationLevel::Optimal,
                2 => UtilizationLevel::High,
                _ => UtilizationLevel::Overallocated,
            };
            assert_eq!(level, expected);
        }
    }

    #[test]
    fn test_is_overallocated_boundary() {
        assert!(!make_period(100).is_overallocated());
        assert!(make_period(101).is_overallocated());
    }

    #[test]
    fn test_is_underutilized_boundary() {
        assert!(make_period(69).is_underutilized());
        assert!(!make_period(70).is_underutilized());
    }

    #[test]
    fn test_utilization_level_serialization() {
        assert_eq!(
            serde_json::to_string(&UtilizationLevel::Overallocated).unwrap(),
            "\"overallocated\""
        );
        let deserialized: UtilizationLevel = serde_json::from_str("\"optimal\"").unwrap();
        assert_eq!(deserialized, UtilizationLevel::Optimal);
    }

    #[test]
    fn test_trend_direction_serialization() {
        assert_eq!(
            serde_json::to_string(&TrendDirection::Increasing).unwrap(),
            "\"increasing\""
        );
    }

    #[test]
    fn test_utilization_level_display() {
        assert_eq!(format!("{}", UtilizationLevel::High), "high");
        assert_eq!(
            format!("{}", UtilizationLevel::Underutilized),
            "underutilized"
        );
    }

    #[test]
    fn test_workload_period_serialization_round_trip() {
        let period = make_period(50);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: WorkloadPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
