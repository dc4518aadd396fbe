//! Core data models for the workload engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod holiday;
mod period;
mod schedule;
mod workload;

pub use assignment::{AssignmentStatus, PayrollAssignment};
pub use holiday::{Holiday, HolidaySet};
pub use period::{DateRange, PeriodSelector};
pub use schedule::{DayOfWeek, WeeklySchedule, WorkScheduleDay};
pub use workload::{
    AssignmentAllocation, OPTIMAL_UTILIZATION_MAX, OPTIMAL_UTILIZATION_MIN, PeriodSummary,
    TrendDirection, UtilizationLevel, WorkloadPeriod,
};
