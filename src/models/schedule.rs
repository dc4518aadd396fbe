//! Working-hours schedule models.
//!
//! This module defines the [`WorkScheduleDay`] and [`WeeklySchedule`] types that
//! describe a consultant's declared weekly working pattern, along with the
//! [`DayOfWeek`] enum used to key schedule entries.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a day of the week for schedule lookup.
///
/// Schedule entries are keyed by weekday; a weekday with no entry declares
/// zero payroll capacity.
///
/// # Example
///
/// ```
/// use workload_engine::models::DayOfWeek;
/// use chrono::NaiveDate;
///
/// // 2024-03-15 is a Friday
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(DayOfWeek::from_date(date), DayOfWeek::Friday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayOfWeek {
    /// Returns the day of the week for a given date.
    pub fn from_date(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// One weekday's declared working hours for a consultant.
///
/// The schedule source declares, per weekday, total work hours, admin time,
/// and the hours available for payroll processing. Only
/// `payroll_capacity_hours` participates in workload calculations; the other
/// figures are carried for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkScheduleDay {
    /// The weekday this entry applies to.
    pub weekday: DayOfWeek,
    /// Total declared working hours for the weekday.
    pub work_hours: Decimal,
    /// Hours reserved for administrative work.
    pub admin_hours: Decimal,
    /// Hours available for payroll processing.
    pub payroll_capacity_hours: Decimal,
}

/// A consultant's weekly working pattern, keyed by weekday.
///
/// Weekdays without an entry have zero payroll capacity.
///
/// # Example
///
/// ```
/// use workload_engine::models::{DayOfWeek, WeeklySchedule, WorkScheduleDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = WeeklySchedule::new(vec![WorkScheduleDay {
///     weekday: DayOfWeek::Monday,
///     work_hours: Decimal::new(8, 0),
///     admin_hours: Decimal::new(1, 0),
///     payroll_capacity_hours: Decimal::new(6, 0),
/// }]);
///
/// // 2024-03-11 is a Monday, 2024-03-12 a Tuesday
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// let tuesday = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
/// assert_eq!(schedule.capacity_for(monday), Decimal::new(6, 0));
/// assert_eq!(schedule.capacity_for(tuesday), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Schedule entries keyed by weekday.
    days: HashMap<DayOfWeek, WorkScheduleDay>,
}

impl WeeklySchedule {
    /// Builds a schedule from a list of weekday entries.
    ///
    /// If the same weekday appears more than once, the last entry wins.
    pub fn new(entries: Vec<WorkScheduleDay>) -> Self {
        let days = entries.into_iter().map(|e| (e.weekday, e)).collect();
        Self { days }
    }

    /// Returns the schedule entry for a weekday, if declared.
    pub fn day(&self, weekday: DayOfWeek) -> Option<&WorkScheduleDay> {
        self.days.get(&weekday)
    }

    /// Returns the payroll capacity declared for a date's weekday.
    ///
    /// Weekdays without a schedule entry have zero capacity.
    pub fn capacity_for(&self, date: NaiveDate) -> Decimal {
        self.days
            .get(&DayOfWeek::from_date(date))
            .map(|d| d.payroll_capacity_hours)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns true if no weekday declares any payroll capacity.
    pub fn is_empty(&self) -> bool {
        self.days
            .values()
            .all(|d| d.payroll_capacity_hours <= Decimal::ZERO)
    }
}
