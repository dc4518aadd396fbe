//! Holiday calendar configuration.
//!
//! This module loads per-country holiday calendars from YAML files and serves
//! them to the engine as exact-date holiday sets.

mod loader;
mod types;

pub use loader::HolidayCalendar;
pub use types::CountryHolidays;
