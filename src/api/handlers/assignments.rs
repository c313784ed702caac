//! Assignment REST API handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{error_response, AppState};
use crate::api::dto::{
    ApiResponse, AssignCageRequest, AssignmentDto, CheckOutRequest, PaginatedResponse,
    PaginationParams, StayCostDto,
};
use crate::api::extract::ValidatedJson;
use crate::application::services::CheckInRequest;

type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Check a pet into a cage
///
/// Creates an active assignment and marks the cage occupied, atomically.
/// The per-day rate is snapshotted: an explicit `daily_rate` override if
/// given, the cage's current list rate otherwise.
#[utoipa::path(
    post,
    path = "/api/v1/cages/{cage_id}/assign",
    tag = "Assignments",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    request_body = AssignCageRequest,
    responses(
        (status = 201, description = "Assignment created", body = ApiResponse<AssignmentDto>),
        (status = 400, description = "Cage not available"),
        (status = 404, description = "Cage, pet or employee not found"),
        (status = 409, description = "Pet already boarded")
    )
)]
pub async fn assign_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<AssignCageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AssignmentDto>>), ErrorResponse> {
    let assignment = state
        .boarding
        .check_in(CheckInRequest {
            cage_id,
            pet_id: request.pet_id,
            check_in_date: request.check_in_date,
            expected_check_out_date: request.expected_check_out_date,
            daily_rate_override: request.daily_rate,
            assigned_by_id: request.assigned_by_id,
            notes: request.notes,
        })
        .await
        .map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(assignment.into())),
    ))
}

/// Check a pet out of its cage
///
/// Closes the assignment and returns the cage to available. Send `{}` to
/// check out as of today.
#[utoipa::path(
    put,
    path = "/api/v1/cages/assignments/{assignment_id}/checkout",
    tag = "Assignments",
    params(("assignment_id" = i64, Path, description = "Assignment ID")),
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Closed assignment", body = ApiResponse<AssignmentDto>),
        (status = 400, description = "Assignment not active"),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn checkout_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Json(request): Json<CheckOutRequest>,
) -> Result<Json<ApiResponse<AssignmentDto>>, ErrorResponse> {
    let assignment = state
        .boarding
        .check_out(assignment_id, request.check_out_date)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(assignment.into())))
}

/// Get an assignment by id
#[utoipa::path(
    get,
    path = "/api/v1/cages/assignments/{assignment_id}",
    tag = "Assignments",
    params(("assignment_id" = i64, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment details", body = ApiResponse<AssignmentDto>),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Result<Json<ApiResponse<AssignmentDto>>, ErrorResponse> {
    let assignment = state
        .boarding
        .get(assignment_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(assignment.into())))
}

/// Computed cost of a stay
///
/// Exposed for the downstream billing process. `days` and `total` are
/// `null` while the stay is still open.
#[utoipa::path(
    get,
    path = "/api/v1/cages/assignments/{assignment_id}/cost",
    tag = "Assignments",
    params(("assignment_id" = i64, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Stay cost", body = ApiResponse<StayCostDto>),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn assignment_cost(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Result<Json<ApiResponse<StayCostDto>>, ErrorResponse> {
    let (assignment, cost) = state
        .billing
        .stay_cost(assignment_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(StayCostDto::from_parts(
        &assignment,
        cost,
    ))))
}

/// Stay history of a cage, newest first
#[utoipa::path(
    get,
    path = "/api/v1/cages/{cage_id}/assignments",
    tag = "Assignments",
    params(
        ("cage_id" = i64, Path, description = "Cage ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Assignments for the cage", body = ApiResponse<PaginatedResponse<AssignmentDto>>),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn cage_assignments(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<AssignmentDto>>>, ErrorResponse> {
    let assignments = state
        .boarding
        .assignments_for_cage(cage_id)
        .await
        .map_err(error_response)?;
    let dtos: Vec<AssignmentDto> = assignments.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::paginate(
        dtos,
        &pagination,
    ))))
}

/// The assignment currently occupying a cage, if any
#[utoipa::path(
    get,
    path = "/api/v1/cages/{cage_id}/current-assignment",
    tag = "Assignments",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Current assignment, or null when the cage is free", body = ApiResponse<AssignmentDto>),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn current_assignment(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<Option<AssignmentDto>>>, ErrorResponse> {
    let assignment = state
        .boarding
        .current_assignment(cage_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(assignment.map(Into::into))))
}

/// All active assignments across the clinic
#[utoipa::path(
    get,
    path = "/api/v1/cages/assignments/active",
    tag = "Assignments",
    params(PaginationParams),
    responses(
        (status = 200, description = "Active assignments", body = ApiResponse<PaginatedResponse<AssignmentDto>>)
    )
)]
pub async fn active_assignments(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<AssignmentDto>>>, ErrorResponse> {
    let assignments = state
        .boarding
        .active_assignments()
        .await
        .map_err(error_response)?;
    let dtos: Vec<AssignmentDto> = assignments.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::paginate(
        dtos,
        &pagination,
    ))))
}
