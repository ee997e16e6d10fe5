//! HTTP request handlers for the leave tracker API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints. Every route lives under the configured API prefix.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::HeaderValue,
    routing::{delete, get},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::ServerSection;
use crate::error::TrackerError;
use crate::models::{Employee, LeaveEntry, LeaveTypeEntry, OvertimeEntry};
use crate::store::Filter;

use super::request::{
    CreateLeaveRequest, CreateLeaveTypeRequest, CreateOvertimeRequest, LeaveCriteriaQuery,
    LeaveListQuery,
};
use super::response::{ApiErrorResponse, StatusMessage};
use super::state::AppState;

/// Message returned by the status route.
pub const SERVICE_MESSAGE: &str = "İzin Yönetim Sistemi API";

const LEAVE_DELETED: &str = "İzin silindi";
const OVERTIME_DELETED: &str = "Fazla çalışma silindi";
const LEAVE_TYPE_DELETED: &str = "İzin türü silindi";

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let server = &state.config().server;
    let prefix = server.api_prefix.clone();
    let at = |path: &str| format!("{prefix}{path}");

    let mut router = Router::new()
        .route(&at("/"), get(status_handler))
        .route(&at("/employees"), get(list_employees_handler))
        .route(
            &at("/leaves"),
            get(list_leaves_handler)
                .post(create_leave_handler)
                .delete(delete_leave_by_criteria_handler),
        )
        .route(&at("/leaves/:id"), delete(delete_leave_handler))
        .route(
            &at("/overtime"),
            get(list_overtime_handler).post(create_overtime_handler),
        )
        .route(&at("/overtime/:id"), delete(delete_overtime_handler))
        .route(
            &at("/leave-types"),
            get(list_leave_types_handler).post(create_leave_type_handler),
        )
        .route(&at("/leave-types/:id"), delete(delete_leave_type_handler));

    // "/api" as well as "/api/"
    if !prefix.is_empty() {
        router = router.route(&prefix, get(status_handler));
    }

    router
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(server: &ServerSection) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // credentials forbid wildcards, so methods and headers are mirrored
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Logs a failed request and converts the error into a response.
fn failure(correlation_id: Uuid, operation: &'static str, err: TrackerError) -> ApiErrorResponse {
    if err.is_rejection() {
        warn!(correlation_id = %correlation_id, operation, error = %err, "Request rejected");
    } else {
        error!(correlation_id = %correlation_id, operation, error = %err, "Request failed");
    }
    err.into()
}

fn bad_body(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let response = ApiErrorResponse::from(rejection);
    warn!(
        correlation_id = %correlation_id,
        code = %response.error.code,
        error = %response.error.detail,
        "Invalid request body"
    );
    response
}

fn bad_query(correlation_id: Uuid, rejection: QueryRejection) -> ApiErrorResponse {
    let response = ApiErrorResponse::from(rejection);
    warn!(
        correlation_id = %correlation_id,
        error = %response.error.detail,
        "Invalid query string"
    );
    response
}

/// Handler for GET `<prefix>/`.
async fn status_handler() -> Json<StatusMessage> {
    Json(StatusMessage::new(SERVICE_MESSAGE))
}

/// Handler for GET `<prefix>/employees`.
///
/// Returns the roster in its fixed order.
async fn list_employees_handler(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.roster().list().to_vec())
}

/// Handler for POST `<prefix>/leaves`.
///
/// Runs the submission through the rule engine and returns the stored entry.
async fn create_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeaveRequest>, JsonRejection>,
) -> ApiResult<LeaveEntry> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| bad_body(correlation_id, rejection))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        "Processing leave submission"
    );

    match state.leaves().submit(request.into()).await {
        Ok(entry) => Ok(Json(entry)),
        Err(err) => Err(failure(correlation_id, "create_leave", err)),
    }
}

/// Handler for GET `<prefix>/leaves`.
async fn list_leaves_handler(
    State(state): State<AppState>,
    query: Result<Query<LeaveListQuery>, QueryRejection>,
) -> ApiResult<Vec<LeaveEntry>> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|rejection| bad_query(correlation_id, rejection))?;

    state
        .records()
        .list_leaves(query.week_filter())
        .await
        .map(Json)
        .map_err(|err| failure(correlation_id, "list_leaves", err))
}

/// Handler for DELETE `<prefix>/leaves/:id`.
async fn delete_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusMessage> {
    let correlation_id = Uuid::new_v4();

    state
        .records()
        .delete_by_id::<LeaveEntry>(&id)
        .await
        .map_err(|err| failure(correlation_id, "delete_leave", err))?;

    info!(correlation_id = %correlation_id, leave_id = %id, "Leave entry deleted");
    Ok(Json(StatusMessage::new(LEAVE_DELETED)))
}

/// Handler for DELETE `<prefix>/leaves?employee_id=..&date=..`.
async fn delete_leave_by_criteria_handler(
    State(state): State<AppState>,
    query: Result<Query<LeaveCriteriaQuery>, QueryRejection>,
) -> ApiResult<StatusMessage> {
    let correlation_id = Uuid::new_v4();
    let Query(criteria) = query.map_err(|rejection| bad_query(correlation_id, rejection))?;

    state
        .records()
        .delete_leave_by_criteria(&criteria.employee_id, criteria.date)
        .await
        .map_err(|err| failure(correlation_id, "delete_leave_by_criteria", err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %criteria.employee_id,
        date = %criteria.date,
        "Leave entry deleted"
    );
    Ok(Json(StatusMessage::new(LEAVE_DELETED)))
}

/// Handler for POST `<prefix>/overtime`.
async fn create_overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateOvertimeRequest>, JsonRejection>,
) -> ApiResult<OvertimeEntry> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| bad_body(correlation_id, rejection))?;

    state
        .entries()
        .record_overtime(request.into())
        .await
        .map(Json)
        .map_err(|err| failure(correlation_id, "create_overtime", err))
}

/// Handler for GET `<prefix>/overtime`.
async fn list_overtime_handler(State(state): State<AppState>) -> ApiResult<Vec<OvertimeEntry>> {
    state
        .records()
        .list::<OvertimeEntry>(&Filter::new())
        .await
        .map(Json)
        .map_err(|err| failure(Uuid::new_v4(), "list_overtime", err))
}

/// Handler for DELETE `<prefix>/overtime/:id`.
async fn delete_overtime_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusMessage> {
    let correlation_id = Uuid::new_v4();

    state
        .records()
        .delete_by_id::<OvertimeEntry>(&id)
        .await
        .map_err(|err| failure(correlation_id, "delete_overtime", err))?;

    info!(correlation_id = %correlation_id, overtime_id = %id, "Overtime entry deleted");
    Ok(Json(StatusMessage::new(OVERTIME_DELETED)))
}

/// Handler for POST `<prefix>/leave-types`.
async fn create_leave_type_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeaveTypeRequest>, JsonRejection>,
) -> ApiResult<LeaveTypeEntry> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| bad_body(correlation_id, rejection))?;

    state
        .entries()
        .record_leave_type(request.into())
        .await
        .map(Json)
        .map_err(|err| failure(correlation_id, "create_leave_type", err))
}

/// Handler for GET `<prefix>/leave-types`.
async fn list_leave_types_handler(
    State(state): State<AppState>,
) -> ApiResult<Vec<LeaveTypeEntry>> {
    state
        .records()
        .list::<LeaveTypeEntry>(&Filter::new())
        .await
        .map(Json)
        .map_err(|err| failure(Uuid::new_v4(), "list_leave_types", err))
}

/// Handler for DELETE `<prefix>/leave-types/:id`.
async fn delete_leave_type_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusMessage> {
    let correlation_id = Uuid::new_v4();

    state
        .records()
        .delete_by_id::<LeaveTypeEntry>(&id)
        .await
        .map_err(|err| failure(correlation_id, "delete_leave_type", err))?;

    info!(correlation_id = %correlation_id, leave_type_id = %id, "Leave type entry deleted");
    Ok(Json(StatusMessage::new(LEAVE_TYPE_DELETED)))
}
