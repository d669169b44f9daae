//! HTTP request handlers for the shift tracker API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler that reports live values samples the display clock once and
//! evaluates all rows and aggregates at that instant.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{employee_view, employee_views, summarize_at};
use crate::models::{EmployeeId, NewEmployee};

use super::response::{ApiError, ApiErrorResponse, EndShiftResponse, SummaryResponse};
use super::state::AppState;

type ApiResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", get(get_employee))
        .route("/employees/:id/start", post(start_shift))
        .route("/employees/:id/end", post(end_shift))
        .route("/shifts", get(list_shifts))
        .route("/summary", get(summary))
        .route("/reset", post(reset_daily))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> ApiResult {
    let snapshot = state.store().read().snapshot();
    let now = state.clock().now();
    Ok(json_response(
        StatusCode::OK,
        employee_views(snapshot.employees(), now),
    ))
}

/// Handler for GET /employees/:id.
async fn get_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> ApiResult {
    let employee = state.store().read().employee(id)?.clone();
    let now = state.clock().now();
    Ok(json_response(StatusCode::OK, employee_view(&employee, now)))
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let employee = {
        let mut store = state.store().write();
        let id = store.add_employee(input).inspect_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Employee rejected");
        })?;
        store.employee(id)?.clone()
    };
    info!(correlation_id = %correlation_id, employee_id = employee.id, "Employee created");

    let now = state.clock().now();
    Ok(json_response(
        StatusCode::CREATED,
        employee_view(&employee, now),
    ))
}

/// Handler for POST /employees/:id/start.
async fn start_shift(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> ApiResult {
    let correlation_id = Uuid::new_v4();

    let (started, employee) = {
        let mut store = state.store().write();
        let started = store.start_shift(id).inspect_err(|err| {
            warn!(correlation_id = %correlation_id, employee_id = id, error = %err, "Start rejected");
        })?;
        (started, store.employee(id)?.clone())
    };
    info!(correlation_id = %correlation_id, employee_id = id, started, "Start shift processed");

    let now = state.clock().now();
    Ok(json_response(StatusCode::OK, employee_view(&employee, now)))
}

/// Handler for POST /employees/:id/end.
async fn end_shift(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> ApiResult {
    let correlation_id = Uuid::new_v4();

    let (completed_shift, employee) = {
        let mut store = state.store().write();
        let completed = store.end_shift(id).inspect_err(|err| {
            warn!(correlation_id = %correlation_id, employee_id = id, error = %err, "End rejected");
        })?;
        (completed, store.employee(id)?.clone())
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        ended = completed_shift.is_some(),
        "End shift processed"
    );

    let now = state.clock().now();
    Ok(json_response(
        StatusCode::OK,
        EndShiftResponse {
            employee: employee_view(&employee, now),
            completed_shift,
        },
    ))
}

/// Handler for GET /shifts.
async fn list_shifts(State(state): State<AppState>) -> ApiResult {
    let shifts = state.store().read().completed_shifts().to_vec();
    Ok(json_response(StatusCode::OK, shifts))
}

/// Handler for GET /summary.
async fn summary(State(state): State<AppState>) -> ApiResult {
    let snapshot = state.store().read().snapshot();
    let now = state.clock().now();
    let department = state.department();
    Ok(json_response(
        StatusCode::OK,
        SummaryResponse {
            department: department.name.clone(),
            currency: department.currency.clone(),
            summary: summarize_at(snapshot.employees(), now),
        },
    ))
}

/// Handler for POST /reset.
async fn reset_daily(State(state): State<AppState>) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let totals = state.store().write().reset_daily();
    info!(correlation_id = %correlation_id, employees = totals.len(), "Day closed");
    Ok(json_response(StatusCode::OK, totals))
}
