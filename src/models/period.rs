//! Reporting period models.
//!
//! This module defines the inclusive [`DateRange`] the engine computes over and
//! the [`PeriodSelector`] used by callers to name a period (current week,
//! current month) relative to an explicitly supplied reference date. The engine
//! never reads the clock itself.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range.
///
/// # Example
///
/// ```
/// use workload_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// };
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// assert_eq!(range.num_days(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The start date (inclusive).
    pub start_date: NaiveDate,
    /// The end date (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Checks if a date falls within this range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the range.
    ///
    /// A range whose end precedes its start spans zero days.
    pub fn num_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

/// Names a reporting period relative to a reference date.
///
/// Named variants resolve against the `as_of` date supplied by the caller,
/// keeping period resolution free of hidden clock reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeriodSelector {
    /// An explicit inclusive date range.
    Range {
        /// The start date (inclusive).
        start_date: NaiveDate,
        /// The end date (inclusive).
        end_date: NaiveDate,
    },
    /// The Monday-to-Sunday week containing the reference date.
    CurrentWeek,
    /// The calendar month containing the reference date.
    CurrentMonth,
    /// The calendar month after the one containing the reference date.
    NextMonth,
}

impl PeriodSelector {
    /// Resolves the selector to a concrete range relative to `as_of`.
    pub fn resolve(&self, as_of: NaiveDate) -> DateRange {
        match self {
            PeriodSelector::Range {
                start_date,
                end_date,
            } => DateRange {
                start_date: *start_date,
                end_date: *end_date,
            },
            PeriodSelector::CurrentWeek => {
                let offset = as_of.weekday().num_days_from_monday() as i64;
                let monday = as_of - Duration::days(offset);
                DateRange {
                    start_date: monday,
                    end_date: monday + Duration::days(6),
                }
            }
            PeriodSelector::CurrentMonth => month_of(as_of),
            PeriodSelector::NextMonth => {
                let first = first_of_month(as_of);
                month_of(advance_one_month(first))
            }
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

fn advance_one_month(first: NaiveDate) -> NaiveDate {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).expect("January 1 is valid")
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            .expect("day 1 exists in every month")
    }
}

fn month_of(date: NaiveDate) -> DateRange {
    let start = first_of_month(date);
    let end = advance_one_month(start) - Duration::days(1);
    DateRange {
        start_date: start,
        end_date: end,
    }
}
