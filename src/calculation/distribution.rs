//! Processing-time distribution across an assignment's window.
//!
//! For one payroll assignment this module spreads the total required processing
//! hours across the business days of its processing window, weighted by each
//! day's declared payroll capacity. The window ends the day before the EFT date
//! (work must finish before funds move) and spans the declared number of
//! processing days, with a minimum of one.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HolidaySet, PayrollAssignment, WeeklySchedule};

use super::business_calendar::is_business_day;

/// Hours allocated to a single date for one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingAllocation {
    /// The date the hours land on.
    pub date: NaiveDate,
    /// The hours allocated to that date.
    pub hours: Decimal,
}

/// Distributes an assignment's processing hours across its window.
///
/// The window runs from `eft_date - processing_days` to `eft_date - 1 day`
/// inclusive. A day participates only if it is a business day and its weekday
/// declares payroll capacity above zero. Each participating day receives a
/// capacity-weighted proportional share:
/// `hours = total * day_capacity / window_capacity`.
///
/// When no day in the window participates, the entire amount falls back to the
/// assignment's explicit processing date if one is set; otherwise the
/// assignment contributes no workload. No date is ever fabricated.
///
/// # Returns
///
/// Date-ordered allocations, at most one entry per date. Output is empty when
/// the assignment has no effective processing hours.
///
/// # Example
///
/// ```
/// use workload_engine::calculation::distribute_processing_time;
/// use workload_engine::models::{
///     AssignmentStatus, DayOfWeek, HolidaySet, PayrollAssignment, WeeklySchedule,
///     WorkScheduleDay,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = WeeklySchedule::new(
///     [DayOfWeek::Tuesday, DayOfWeek::Wednesday, DayOfWeek::Thursday]
///         .into_iter()
///         .map(|weekday| WorkScheduleDay {
///             weekday,
///             work_hours: Decimal::new(8, 0),
///             admin_hours: Decimal::ZERO,
///             payroll_capacity_hours: Decimal::new(3, 0),
///         })
///         .collect(),
/// );
/// let assignment = PayrollAssignment {
///     id: "pa_001".to_string(),
///     name: "Acme monthly".to_string(),
///     client_name: "Acme Pty Ltd".to_string(),
///     eft_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     processing_days_before_eft: 3,
///     total_processing_hours: Some(Decimal::new(9, 0)),
///     explicit_processing_date: None,
///     status: AssignmentStatus::Pending,
/// };
///
/// let allocations = distribute_processing_time(&assignment, &schedule, &HolidaySet::default());
/// assert_eq!(allocations.len(), 3);
/// assert!(allocations.iter().all(|a| a.hours == Decimal::new(3, 0)));
/// ```
pub fn distribute_processing_time(
    assignment: &PayrollAssignment,
    schedule: &WeeklySchedule,
    holidays: &HolidaySet,
) -> Vec<ProcessingAllocation> {
    let total_hours = assignment.effective_processing_hours();
    if total_hours.is_zero() {
        return Vec::new();
    }

    let window_days = assignment.effective_window_days();
    let end = assignment.eft_date - Duration::days(1);
    let start = end - Duration::days(window_days - 1);

    // Eligible days carry their weekday capacity as the allocation weight.
    let mut eligible: Vec<(NaiveDate, Decimal)> = Vec::new();
    let mut date = start;
    while date <= end {
        if is_business_day(date, holidays) {
            let capacity = schedule.capacity_for(date);
            if capacity > Decimal::ZERO {
                eligible.push((date, capacity));
            }
        }
        date += Duration::days(1);
    }

    if eligible.is_empty() {
        return match assignment.explicit_processing_date {
            Some(date) => vec![ProcessingAllocation {
                date,
                hours: total_hours,
            }],
            None => Vec::new(),
        };
    }

    let window_capacity: Decimal = eligible.iter().map(|(_, capacity)| *capacity).sum();

    eligible
        .into_iter()
        .map(|(date, capacity)| ProcessingAllocation {
            date,
            // Multiply before dividing so even splits stay exact.
            hours: total_hours * capacity / window_capacity,
        })
        .collect()
}
