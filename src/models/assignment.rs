//! Payroll assignment model.
//!
//! This module defines the [`PayrollAssignment`] struct and [`AssignmentStatus`]
//! enum representing one unit of payroll processing work tied to an EFT due date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The lifecycle status of a payroll assignment.
///
/// Status is carried through to per-day allocation breakdowns for dashboard
/// display; it does not change how hours are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Processing has not started.
    Pending,
    /// Processing is underway.
    InProgress,
    /// Processing finished before the EFT date.
    Completed,
    /// The pay run was cancelled by the client.
    Cancelled,
}

/// One unit of required payroll processing work tied to a due date.
///
/// The EFT date is the date funds must be available; processing must finish the
/// day before it. Read-only input owned by the external assignment source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollAssignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// Human-readable name of the pay run.
    pub name: String,
    /// The client this pay run belongs to.
    pub client_name: String,
    /// The date funds must be available.
    pub eft_date: NaiveDate,
    /// Length of the processing window in days, ending the day before the EFT
    /// date. Values below 1 are treated as 1.
    pub processing_days_before_eft: i64,
    /// Total processing effort required. Missing or negative values contribute
    /// no workload.
    #[serde(default)]
    pub total_processing_hours: Option<Decimal>,
    /// Optional fixed processing date used when the window has no eligible
    /// business day.
    #[serde(default)]
    pub explicit_processing_date: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: AssignmentStatus,
}

impl PayrollAssignment {
    /// Returns the processing effort, clamping missing or negative values to zero.
    pub fn effective_processing_hours(&self) -> Decimal {
        self.total_processing_hours
            .filter(|h| *h > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the window length in days, with a minimum of one day.
    pub fn effective_window_days(&self) -> i64 {
        self.processing_days_before_eft.max(1)
    }
}
