//! Supplier boundary for engine inputs.
//!
//! The engine is a library, not a service: it consumes already-resolved,
//! read-only snapshots of schedules, assignments, and holidays through the
//! three traits defined here. Upstream fetch failures are the collaborator
//! layer's concern; a supplier that has nothing for a consultant or country
//! returns an empty snapshot and the engine degrades to zero-valued output.

use std::collections::HashMap;

use crate::models::{DateRange, HolidaySet, PayrollAssignment, WeeklySchedule};

/// Supplies a consultant's declared weekly working pattern.
pub trait WorkScheduleSource {
    /// Returns the schedule for a consultant, or `None` when no schedule is
    /// declared. A missing schedule means zero capacity everywhere.
    fn schedule_for(&self, consultant_id: &str) -> Option<WeeklySchedule>;
}

/// Supplies the payroll assignments relevant to a consultant for a range.
pub trait PayrollAssignmentSource {
    /// Returns assignments whose processing may touch the range. Suppliers may
    /// over-return; the calculator ignores allocations landing outside the
    /// range.
    fn assignments_for(&self, consultant_id: &str, range: &DateRange) -> Vec<PayrollAssignment>;
}

/// Supplies gazetted holiday dates for a country code.
pub trait HolidaySource {
    /// Returns the holiday date set for a country over a range.
    ///
    /// Absence or upstream failure must degrade to an empty set so workload
    /// computation falls back to weekend-only filtering; it is never fatal.
    fn holiday_set(&self, country_code: &str, range: &DateRange) -> HolidaySet;
}

/// In-memory schedule snapshots keyed by consultant id.
#[derive(Debug, Clone, Default)]
pub struct StaticSchedules {
    schedules: HashMap<String, WeeklySchedule>,
}

impl StaticSchedules {
    /// Builds a snapshot from `(consultant_id, schedule)` pairs.
    pub fn new(schedules: impl IntoIterator<Item = (String, WeeklySchedule)>) -> Self {
        Self {
            schedules: schedules.into_iter().collect(),
        }
    }
}

impl WorkScheduleSource for StaticSchedules {
    fn schedule_for(&self, consultant_id: &str) -> Option<WeeklySchedule> {
        self.schedules.get(consultant_id).cloned()
    }
}

/// In-memory assignment snapshots keyed by consultant id.
#[derive(Debug, Clone, Default)]
pub struct StaticAssignments {
    assignments: HashMap<String, Vec<PayrollAssignment>>,
}

impl StaticAssignments {
    /// Builds a snapshot from `(consultant_id, assignments)` pairs.
    pub fn new(assignments: impl IntoIterator<Item = (String, Vec<PayrollAssignment>)>) -> Self {
        Self {
            assignments: assignments.into_iter().collect(),
        }
    }
}

impl PayrollAssignmentSource for StaticAssignments {
    fn assignments_for(&self, consultant_id: &str, _range: &DateRange) -> Vec<PayrollAssignment> {
        self.assignments
            .get(consultant_id)
            .cloned()
            .unwrap_or_default()
    }
}

/// An in-memory holiday snapshot for a single country code.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    country_code: String,
    dates: HolidaySet,
}

impl StaticHolidays {
    /// Builds a snapshot holding dates for one country.
    pub fn new(country_code: impl Into<String>, dates: HolidaySet) -> Self {
        Self {
            country_code: country_code.into(),
            dates,
        }
    }
}

impl HolidaySource for StaticHolidays {
    fn holiday_set(&self, country_code: &str, _range: &DateRange) -> HolidaySet {
        if country_code == self.country_code {
            self.dates.clone()
        } else {
            HolidaySet::default()
        }
    }
}
