//! Holiday calendar loading functionality.
//!
//! This module provides the [`HolidayCalendar`] type for loading per-country
//! holiday calendars from YAML files and serving them as holiday date sets.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Holiday, HolidaySet};
use crate::sources::HolidaySource;

/// Loads and provides access to per-country holiday calendars.
///
/// # Directory Structure
///
/// The calendar directory holds one YAML file per country:
/// ```text
/// config/holidays/
/// ├── au.yaml
/// └── nz.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use workload_engine::config::HolidayCalendar;
/// use workload_engine::models::DateRange;
/// use workload_engine::sources::HolidaySource;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::load("./config/holidays").unwrap();
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// };
/// let set = calendar.holiday_set("AU", &range);
/// assert!(set.contains(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    countries: HashMap<String, Vec<Holiday>>,
}

impl HolidayCalendar {
    /// Loads every `*.yaml` calendar file from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or unreadable, a file
    /// contains invalid YAML, two files declare the same country code, or no
    /// calendar file is found at all.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut countries: HashMap<String, Vec<Holiday>> = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let file_path = entry.path();
            if !file_path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }

            let calendar = Self::load_yaml(&file_path)?;
            let code = calendar.country_code.to_uppercase();
            if countries.insert(code.clone(), calendar.holidays).is_some() {
                return Err(EngineError::InvalidCalendar {
                    country_code: code,
                    message: "duplicate country code".to_string(),
                });
            }
        }

        if countries.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no calendar files found)", dir_str),
            });
        }

        Ok(Self { countries })
    }

    /// Builds a calendar directly from in-memory holiday lists.
    pub fn from_countries(countries: HashMap<String, Vec<Holiday>>) -> Self {
        let countries = countries
            .into_iter()
            .map(|(code, holidays)| (code.to_uppercase(), holidays))
            .collect();
        Self { countries }
    }

    /// Loads and parses one calendar file.
    fn load_yaml(path: &Path) -> EngineResult<super::CountryHolidays> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the country codes with a loaded calendar.
    pub fn country_codes(&self) -> Vec<&str> {
        self.countries.keys().map(String::as_str).collect()
    }
}

impl HolidaySource for HolidayCalendar {
    /// Returns the holiday dates for a country within the range.
    ///
    /// An unknown country code is not an error: it degrades to an empty set so
    /// business-day filtering falls back to weekends only.
    fn holiday_set(&self, country_code: &str, range: &DateRange) -> HolidaySet {
        match self.countries.get(&country_code.to_uppercase()) {
            Some(holidays) => HolidaySet::from_dates(
                holidays
                    .iter()
                    .map(|h| h.date)
                    .filter(|date| range.contains(*date)),
            ),
            None => {
                warn!(country_code, "no holiday calendar; using weekend-only filtering");
                HolidaySet::default()
            }
        }
    }
}
