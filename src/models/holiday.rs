//! Holiday models.
//!
//! This module defines the [`Holiday`] record supplied by the (external)
//! holiday-sync collaborator and the [`HolidaySet`] membership set the engine
//! consumes. Membership is by exact date for one country code; region tags are
//! carried for display but do not affect capacity calculations.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gazetted public holiday for a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Australia Day").
    pub name: String,
    /// Optional state/region tag (e.g., "VIC"). Not used for membership tests.
    #[serde(default)]
    pub region: Option<String>,
}

/// An exact-date membership set of holidays for one country code.
///
/// An empty set is the degraded form used when the holiday source is
/// unavailable; filtering then falls back to weekends only.
///
/// # Example
///
/// ```
/// use workload_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let good_friday = NaiveDate::from_ymd_opt(2024, 3, 29).unwrap();
/// let set = HolidaySet::from_dates(vec![good_friday]);
/// assert!(set.contains(good_friday));
/// assert!(!set.contains(NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Builds a set from a list of dates.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Builds a set from holiday records, keeping only the dates.
    pub fn from_holidays<'a>(holidays: impl IntoIterator<Item = &'a Holiday>) -> Self {
        Self::from_dates(holidays.into_iter().map(|h| h.date))
    }

    /// Returns true if the date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns true if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the number of holiday dates in the set.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Adds a date to the set.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Merges another set into this one.
    pub fn extend(&mut self, other: &HolidaySet) {
        self.dates.extend(other.dates.iter().copied());
    }
}
