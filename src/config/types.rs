//! Configuration types for holiday calendars.
//!
//! This module contains the strongly-typed structures deserialized from the
//! per-country YAML calendar files.

use serde::Deserialize;

use crate::models::Holiday;

/// One country's holiday calendar file.
///
/// # File format
///
/// ```yaml
/// country_code: AU
/// holidays:
///   - date: 2024-01-01
///     name: "New Year's Day"
///   - date: 2024-03-11
///     name: "Labour Day"
///     region: VIC
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CountryHolidays {
    /// The ISO country code this calendar covers (e.g., "AU").
    pub country_code: String,
    /// The gazetted holidays for that country.
    pub holidays: Vec<Holiday>,
}
