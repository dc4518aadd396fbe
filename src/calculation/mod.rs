//! Calculation logic for the workload engine.
//!
//! This module contains the five engine components: business-day
//! determination, processing-time distribution, per-day utilization
//! calculation, trend analysis, and capacity aggregation, plus the
//! [`WorkloadEngine`] orchestration over the supplier boundary.

mod aggregation;
mod business_calendar;
mod distribution;
mod trend;
mod utilization;
mod workload;

pub use aggregation::{summarize_periods, summarize_team};
pub use business_calendar::is_business_day;
pub use distribution::{ProcessingAllocation, distribute_processing_time};
pub use trend::{TREND_MIN_SAMPLES, TREND_THRESHOLD, analyze_trend};
pub use utilization::{MAX_RANGE_DAYS, compute_range};
pub use workload::{TeamCapacityReport, WorkloadEngine, WorkloadReport};
