//! Workload orchestration over the supplier boundary.
//!
//! [`WorkloadEngine`] ties the suppliers to the calculation pipeline and
//! exposes the two consumer-facing operations: per-consultant workload and
//! team capacity. One parametrized engine serves every scope — a single
//! consultant, a named team, or a manager's reports — because the caller
//! simply supplies the relevant consultant-id set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DateRange, PeriodSummary, WeeklySchedule, WorkloadPeriod};
use crate::sources::{HolidaySource, PayrollAssignmentSource, WorkScheduleSource};

use super::aggregation::{summarize_periods, summarize_team};
use super::utilization::compute_range;

/// Per-consultant workload result: day records plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadReport {
    /// One record per calendar day in the requested range.
    pub periods: Vec<WorkloadPeriod>,
    /// Rolled-up figures over those periods.
    pub summary: PeriodSummary,
}

/// Team capacity result: each member's workload plus the combined summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCapacityReport {
    /// Per-member workload reports, keyed by consultant id.
    pub per_member: BTreeMap<String, WorkloadReport>,
    /// Summary over the union of all members' periods.
    pub team_summary: PeriodSummary,
}

/// Computes workload and capacity over supplier-provided snapshots.
///
/// The engine is stateless and pure: identical snapshots always produce
/// identical reports, and nothing is cached or mutated between calls.
/// Memoization is the caller's concern.
#[derive(Debug, Clone)]
pub struct WorkloadEngine<S, A, H> {
    schedules: S,
    assignments: A,
    holidays: H,
}

impl<S, A, H> WorkloadEngine<S, A, H>
where
    S: WorkScheduleSource,
    A: PayrollAssignmentSource,
    H: HolidaySource,
{
    /// Creates an engine over the three suppliers.
    pub fn new(schedules: S, assignments: A, holidays: H) -> Self {
        Self {
            schedules,
            assignments,
            holidays,
        }
    }

    /// Computes one consultant's workload over a range.
    ///
    /// A consultant with no declared schedule or no assignments still gets a
    /// full set of zero-valued periods; nothing here errors.
    pub fn compute_workload(
        &self,
        consultant_id: &str,
        range: &DateRange,
        country_code: &str,
    ) -> WorkloadReport {
        let schedule = self
            .schedules
            .schedule_for(consultant_id)
            .unwrap_or_else(WeeklySchedule::default);
        let assignments = self.assignments.assignments_for(consultant_id, range);
        let holidays = self.holidays.holiday_set(country_code, range);

        debug!(
            consultant_id,
            assignments = assignments.len(),
            holidays = holidays.len(),
            "computing workload"
        );

        let periods = compute_range(range, &schedule, &assignments, &holidays);
        let summary = summarize_periods(&periods);

        WorkloadReport { periods, summary }
    }

    /// Computes capacity for a set of consultants over a shared range.
    ///
    /// The team summary is recomputed from the union of all members' raw
    /// periods rather than averaged from member summaries.
    pub fn compute_team_capacity(
        &self,
        consultant_ids: &[String],
        range: &DateRange,
        country_code: &str,
    ) -> TeamCapacityReport {
        let mut per_member = BTreeMap::new();
        let mut all_periods = Vec::with_capacity(consultant_ids.len());

        for consultant_id in consultant_ids {
            let report = self.compute_workload(consultant_id, range, country_code);
            all_periods.push(report.periods.clone());
            per_member.insert(consultant_id.clone(), report);
        }

        let team_summary = summarize_team(&all_periods);

        TeamCapacityReport {
            per_member,
            team_summary,
        }
    }
}
