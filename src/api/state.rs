//! Application state for the workload engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::HolidayCalendar;

/// Shared application state.
///
/// Contains resources shared across all request handlers, currently the
/// loaded holiday calendars.
#[derive(Clone)]
pub struct AppState {
    /// The loaded holiday calendars.
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state with the given holiday calendar.
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
