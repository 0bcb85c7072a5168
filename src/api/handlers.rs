//! HTTP request handlers for the pay run desk API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{DeskError, DeskResult};
use crate::models::Session;
use crate::workflow::PayRunService;

use super::request::ProcessRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pay-runs", get(list_handler))
        .route("/pay-runs/process", post(process_handler))
        .route("/pay-runs/:id/approve", put(approve_handler))
        .route("/pay-runs/:id/reject", put(reject_handler))
        .route("/dashboard", get(dashboard_handler))
        .with_state(state)
}

fn ok_json<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: DeskError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

/// Reads the current operator session and scopes the workflow to it, so
/// payroll API calls carry its token.
async fn session_service(state: &AppState) -> DeskResult<(Option<Session>, PayRunService)> {
    let session = state.current_session().await?;
    let service = state.service().for_session(session.as_ref());
    Ok((session, service))
}

/// Handler for GET /pay-runs.
async fn list_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let service = match session_service(&state).await {
        Ok((_, service)) => service,
        Err(err) => return error_response(correlation_id, err),
    };
    match service.list().await {
        Ok(pay_runs) => {
            info!(correlation_id = %correlation_id, count = pay_runs.len(), "Listed pay runs");
            ok_json(StatusCode::OK, pay_runs)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /pay-runs/process.
///
/// Validates the requested period and, if every precondition holds, asks the
/// payroll API to process it.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ok_json(StatusCode::BAD_REQUEST, error);
        }
    };

    let service = match session_service(&state).await {
        Ok((_, service)) => service,
        Err(err) => return error_response(correlation_id, err),
    };
    match service.process(request.start_date, request.end_date).await {
        Ok(outcome) => ok_json(StatusCode::CREATED, outcome),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /pay-runs/:id/approve.
async fn approve_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let service = match session_service(&state).await {
        Ok((_, service)) => service,
        Err(err) => return error_response(correlation_id, err),
    };
    match service.approve(&id).await {
        Ok(outcome) => ok_json(StatusCode::OK, outcome),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /pay-runs/:id/reject.
///
/// Acts for the persisted operator session; without one the request is
/// unauthenticated. Every other handler also forwards the session's token
/// when one is persisted.
async fn reject_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let (session, service) = match session_service(&state).await {
        Ok((Some(session), service)) => (session, service),
        Ok((None, _)) => return error_response(correlation_id, DeskError::Unauthenticated),
        Err(err) => return error_response(correlation_id, err),
    };

    match service.reject(&id, &session).await {
        Ok(outcome) => ok_json(StatusCode::OK, outcome),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /dashboard.
async fn dashboard_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let service = match session_service(&state).await {
        Ok((_, service)) => service,
        Err(err) => return error_response(correlation_id, err),
    };
    match service.dashboard().await {
        Ok(dashboard) => ok_json(StatusCode::OK, dashboard),
        Err(err) => error_response(correlation_id, err),
    }
}
