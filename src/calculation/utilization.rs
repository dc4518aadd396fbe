//! Per-day utilization calculation over a date range.
//!
//! For every calendar date in the requested range (weekends and holidays
//! included) this module merges the distributed assignment hours against the
//! weekday's declared capacity, producing a [`WorkloadPeriod`] with a rounded
//! utilization percentage and its classification band.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AssignmentAllocation, DateRange, HolidaySet, PayrollAssignment, UtilizationLevel,
    WeeklySchedule, WorkloadPeriod,
};

use super::distribution::distribute_processing_time;

/// Hard cap on the number of days walked for a single range.
///
/// This is a contract, not a safeguard: a malformed multi-year range is
/// truncated at one leap year's worth of days rather than rejected, so the
/// walk always terminates.
pub const MAX_RANGE_DAYS: usize = 366;

/// Computes the rounded utilization percentage for assigned hours against capacity.
///
/// Zero capacity always yields zero utilization, regardless of assigned hours.
pub(crate) fn utilization_percent(assigned: Decimal, capacity: Decimal) -> u32 {
    if capacity <= Decimal::ZERO {
        return 0;
    }
    (assigned / capacity * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Computes one [`WorkloadPeriod`] per calendar day in the range.
///
/// Every date in `[start, end]` inclusive appears in the output, capped at
/// [`MAX_RANGE_DAYS`] iterations. Weekend and holiday dates still produce
/// periods with whatever capacity their weekday declares, typically zero.
/// Absent inputs (no assignments, empty schedule, empty holiday set) yield
/// zero-valued periods, never an error.
///
/// # Arguments
///
/// * `range` - The inclusive date range to walk
/// * `schedule` - The consultant's weekly working pattern
/// * `assignments` - Assignments whose distributed hours land in or around the range
/// * `holidays` - Exact-date holiday set for the consultant's country
pub fn compute_range(
    range: &DateRange,
    schedule: &WeeklySchedule,
    assignments: &[PayrollAssignment],
    holidays: &HolidaySet,
) -> Vec<WorkloadPeriod> {
    // Distribute every assignment once, then bucket allocations by date.
    let mut by_date: HashMap<NaiveDate, Vec<AssignmentAllocation>> = HashMap::new();
    for assignment in assignments {
        for allocation in distribute_processing_time(assignment, schedule, holidays) {
            by_date
                .entry(allocation.date)
                .or_default()
                .push(AssignmentAllocation {
                    assignment_id: assignment.id.clone(),
                    name: assignment.name.clone(),
                    client_name: assignment.client_name.clone(),
                    hours: allocation.hours,
                    status: assignment.status,
                });
        }
    }

    let mut periods = Vec::new();
    let mut date = range.start_date;
    while date <= range.end_date && periods.len() < MAX_RANGE_DAYS {
        let capacity = schedule.capacity_for(date);
        let allocations = by_date.remove(&date).unwrap_or_default();
        let assigned: Decimal = allocations.iter().map(|a| a.hours).sum();
        let utilization = utilization_percent(assigned, capacity);
        let overflow = (assigned - capacity).max(Decimal::ZERO);

        periods.push(WorkloadPeriod {
            date,
            payroll_capacity_hours: capacity,
            assigned_hours: assigned,
            utilization,
            overflow_hours: overflow,
            assignments: allocations,
            classification: UtilizationLevel::from_utilization(utilization),
        });

        date += Duration::days(1);
    }

    periods
}
