//! HTTP API layer for the workload engine.
//!
//! This module provides the REST API surface: request and response types,
//! handlers, shared application state, and router construction.

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use request::{
    AssignmentRequest, HolidayDateRequest, ScheduleDayRequest, TeamCapacityRequest,
    TeamMemberRequest, WorkloadRequest,
};
pub use response::{ApiError, ApiErrorResponse, WorkloadResponse};
pub use state::AppState;
