//! HTTP request handlers for the workload engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::WorkloadEngine;
use crate::sources::{HolidaySource, StaticAssignments, StaticHolidays, StaticSchedules};

use super::request::{
    TeamCapacityRequest, WorkloadRequest, holidays_from_requests, schedule_from_requests,
};
use super::response::{ApiError, WorkloadResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/workload", post(workload_handler))
        .route("/team-capacity", post(team_capacity_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /workload.
///
/// Computes one consultant's per-day workload and period summary from the
/// snapshot carried in the request.
async fn workload_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkloadRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workload request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let range = request.period.resolve(request.as_of);
    let mut holidays = state.calendar().holiday_set(&request.country_code, &range);
    holidays.extend(&holidays_from_requests(&request.extra_holidays));

    let engine = WorkloadEngine::new(
        StaticSchedules::new(vec![(
            request.consultant_id.clone(),
            schedule_from_requests(request.schedule),
        )]),
        StaticAssignments::new(vec![(
            request.consultant_id.clone(),
            request.assignments.into_iter().map(Into::into).collect(),
        )]),
        StaticHolidays::new(request.country_code.clone(), holidays),
    );

    let start_time = Instant::now();
    let report = engine.compute_workload(&request.consultant_id, &range, &request.country_code);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        consultant_id = %request.consultant_id,
        periods = report.periods.len(),
        avg_utilization = report.summary.avg_utilization,
        duration_us = duration.as_micros(),
        "Workload computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(WorkloadResponse {
            consultant_id: request.consultant_id,
            periods: report.periods,
            summary: report.summary,
        }),
    )
        .into_response()
}

/// Handler for POST /team-capacity.
///
/// Computes each member's workload plus the team summary recomputed from the
/// union of all members' periods.
async fn team_capacity_handler(
    State(state): State<AppState>,
    payload: Result<Json<TeamCapacityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing team capacity request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let range = request.period.resolve(request.as_of);
    let mut holidays = state.calendar().holiday_set(&request.country_code, &range);
    holidays.extend(&holidays_from_requests(&request.extra_holidays));

    let mut consultant_ids = Vec::with_capacity(request.members.len());
    let mut schedules = Vec::with_capacity(request.members.len());
    let mut assignments = Vec::with_capacity(request.members.len());
    for member in request.members {
        consultant_ids.push(member.consultant_id.clone());
        schedules.push((
            member.consultant_id.clone(),
            schedule_from_requests(member.schedule),
        ));
        assignments.push((
            member.consultant_id,
            member
                .assignments
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>(),
        ));
    }

    let engine = WorkloadEngine::new(
        StaticSchedules::new(schedules),
        StaticAssignments::new(assignments),
        StaticHolidays::new(request.country_code.clone(), holidays),
    );

    let start_time = Instant::now();
    let report = engine.compute_team_capacity(&consultant_ids, &range, &request.country_code);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        members = report.per_member.len(),
        team_avg_utilization = report.team_summary.avg_utilization,
        duration_us = duration.as_micros(),
        "Team capacity computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
