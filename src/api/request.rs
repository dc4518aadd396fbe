//! Request types for the workload engine API.
//!
//! This module defines the JSON request structures for the `/workload` and
//! `/team-capacity` endpoints. Requests carry already-resolved snapshots of
//! schedules and assignments; holidays come from the server's configured
//! calendars, optionally extended with inline dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AssignmentStatus, DayOfWeek, HolidaySet, PayrollAssignment, PeriodSelector, WeeklySchedule,
    WorkScheduleDay,
};

/// Request body for the `/workload` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRequest {
    /// The consultant whose workload is requested.
    pub consultant_id: String,
    /// ISO country code selecting the holiday calendar.
    pub country_code: String,
    /// Reference date for resolving named periods.
    pub as_of: NaiveDate,
    /// The reporting period.
    pub period: PeriodSelector,
    /// The consultant's weekly schedule snapshot.
    pub schedule: Vec<ScheduleDayRequest>,
    /// The consultant's assignment snapshot.
    pub assignments: Vec<AssignmentRequest>,
    /// Additional holiday dates unioned with the configured calendar.
    #[serde(default)]
    pub extra_holidays: Vec<HolidayDateRequest>,
}

/// Request body for the `/team-capacity` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCapacityRequest {
    /// The team members' snapshots.
    pub members: Vec<TeamMemberRequest>,
    /// ISO country code selecting the holiday calendar.
    pub country_code: String,
    /// Reference date for resolving named periods.
    pub as_of: NaiveDate,
    /// The reporting period shared by all members.
    pub period: PeriodSelector,
    /// Additional holiday dates unioned with the configured calendar.
    #[serde(default)]
    pub extra_holidays: Vec<HolidayDateRequest>,
}

/// One team member's snapshot in a team-capacity request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberRequest {
    /// The member's consultant id.
    pub consultant_id: String,
    /// The member's weekly schedule snapshot.
    pub schedule: Vec<ScheduleDayRequest>,
    /// The member's assignment snapshot.
    pub assignments: Vec<AssignmentRequest>,
}

/// One weekday's schedule entry in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDayRequest {
    /// The weekday this entry applies to.
    pub weekday: DayOfWeek,
    /// Total declared working hours for the weekday.
    #[serde(default)]
    pub work_hours: Decimal,
    /// Hours reserved for administrative work.
    #[serde(default)]
    pub admin_hours: Decimal,
    /// Hours available for payroll processing.
    pub payroll_capacity_hours: Decimal,
}

/// One payroll assignment in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Unique identifier for the assignment.
    pub id: String,
    /// Human-readable name of the pay run.
    pub name: String,
    /// The client this pay run belongs to.
    pub client_name: String,
    /// The date funds must be available.
    pub eft_date: NaiveDate,
    /// Length of the processing window in days.
    pub processing_days_before_eft: i64,
    /// Total processing effort required.
    #[serde(default)]
    pub total_processing_hours: Option<Decimal>,
    /// Optional fixed processing date fallback.
    #[serde(default)]
    pub explicit_processing_date: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: AssignmentStatus,
}

/// An inline holiday date in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayDateRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ScheduleDayRequest> for WorkScheduleDay {
    fn from(req: ScheduleDayRequest) -> Self {
        WorkScheduleDay {
            weekday: req.weekday,
            work_hours: req.work_hours,
            admin_hours: req.admin_hours,
            payroll_capacity_hours: req.payroll_capacity_hours,
        }
    }
}

impl From<AssignmentRequest> for PayrollAssignment {
    fn from(req: AssignmentRequest) -> Self {
        PayrollAssignment {
            id: req.id,
            name: req.name,
            client_name: req.client_name,
            eft_date: req.eft_date,
            processing_days_before_eft: req.processing_days_before_eft,
            total_processing_hours: req.total_processing_hours,
            explicit_processing_date: req.explicit_processing_date,
            status: req.status,
        }
    }
}

/// Builds a weekly schedule from request entries.
pub(super) fn schedule_from_requests(entries: Vec<ScheduleDayRequest>) -> WeeklySchedule {
    WeeklySchedule::new(entries.into_iter().map(Into::into).collect())
}

/// Builds a holiday set from inline request dates.
pub(super) fn holidays_from_requests(entries: &[HolidayDateRequest]) -> HolidaySet {
    HolidaySet::from_dates(entries.iter().map(|h| h.date))
}
