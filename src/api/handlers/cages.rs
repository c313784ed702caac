//! Cage REST API handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{error_response, AppState};
use crate::api::dto::{
    ApiResponse, AvailableCagesQuery, CageDto, CreateCageRequest, ListCagesQuery,
    UpdateCageRequest,
};
use crate::api::extract::ValidatedJson;
use crate::application::services::{CageUpdate, DateRange, NewCage};
use crate::domain::{CageFilter, CageSize, CageStatus, DomainError};

type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

fn parse_size(s: &str) -> Result<CageSize, ErrorResponse> {
    CageSize::from_str(s)
        .ok_or_else(|| error_response(DomainError::Validation(format!("unknown cage size '{s}'"))))
}

fn parse_status(s: &str) -> Result<CageStatus, ErrorResponse> {
    CageStatus::from_str(s).ok_or_else(|| {
        error_response(DomainError::Validation(format!("unknown cage status '{s}'")))
    })
}

/// List cages, optionally filtered by size and status
#[utoipa::path(
    get,
    path = "/api/v1/cages",
    tag = "Cages",
    params(ListCagesQuery),
    responses(
        (status = 200, description = "Cages ordered by cage number", body = ApiResponse<Vec<CageDto>>),
        (status = 400, description = "Unknown size or status value")
    )
)]
pub async fn list_cages(
    State(state): State<AppState>,
    Query(query): Query<ListCagesQuery>,
) -> Result<Json<ApiResponse<Vec<CageDto>>>, ErrorResponse> {
    let size = query.size.as_deref().map(parse_size).transpose()?;
    let status = match query.status.as_deref() {
        Some(s) => Some(parse_status(s)?),
        None if query.is_available == Some(true) => Some(CageStatus::Available),
        None => None,
    };

    let cages = state
        .availability
        .list_cages(CageFilter { size, status })
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        cages.into_iter().map(Into::into).collect(),
    )))
}

/// List cages currently available for boarding
///
/// The optional date window is accepted for compatibility but not applied:
/// results reflect current status only (see the availability notes).
#[utoipa::path(
    get,
    path = "/api/v1/cages/available",
    tag = "Cages",
    params(AvailableCagesQuery),
    responses(
        (status = 200, description = "Available cages ordered by cage number", body = ApiResponse<Vec<CageDto>>)
    )
)]
pub async fn available_cages(
    State(state): State<AppState>,
    Query(query): Query<AvailableCagesQuery>,
) -> Result<Json<ApiResponse<Vec<CageDto>>>, ErrorResponse> {
    let size = query.size.as_deref().map(parse_size).transpose()?;
    let date_range = match (query.date_from, query.date_to) {
        (Some(from), Some(to)) => Some(DateRange { from, to }),
        _ => None,
    };

    let cages = state
        .availability
        .list_available(size, date_range)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        cages.into_iter().map(Into::into).collect(),
    )))
}

/// Register a new cage
#[utoipa::path(
    post,
    path = "/api/v1/cages",
    tag = "Cages",
    request_body = CreateCageRequest,
    responses(
        (status = 201, description = "Cage created", body = ApiResponse<CageDto>),
        (status = 409, description = "Cage number already in use"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_cage(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CageDto>>), ErrorResponse> {
    let size = parse_size(&request.size)?;
    let cage = state
        .cages
        .create(NewCage {
            cage_number: request.cage_number,
            size,
            location: request.location,
            daily_rate: request.daily_rate,
            notes: request.notes,
        })
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(cage.into()))))
}

/// Get a cage by id
#[utoipa::path(
    get,
    path = "/api/v1/cages/{cage_id}",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Cage details", body = ApiResponse<CageDto>),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn get_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let cage = state.cages.get(cage_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}

/// Update cage attributes
///
/// Partial update; omitted fields keep their value. Status is changed
/// only through the transition endpoints.
#[utoipa::path(
    put,
    path = "/api/v1/cages/{cage_id}",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    request_body = UpdateCageRequest,
    responses(
        (status = 200, description = "Updated cage", body = ApiResponse<CageDto>),
        (status = 404, description = "Cage not found"),
        (status = 409, description = "Cage number already in use")
    )
)]
pub async fn update_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateCageRequest>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let size = request.size.as_deref().map(parse_size).transpose()?;
    let cage = state
        .cages
        .update(
            cage_id,
            CageUpdate {
                cage_number: request.cage_number,
                size,
                location: request.location,
                daily_rate: request.daily_rate,
                notes: request.notes,
            },
        )
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}

/// Decommission a cage (soft delete)
///
/// The cage row is kept with status `OutOfService` so stay history stays
/// valid; the cage number remains taken forever.
#[utoipa::path(
    delete,
    path = "/api/v1/cages/{cage_id}",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Decommissioned cage", body = ApiResponse<CageDto>),
        (status = 404, description = "Cage not found"),
        (status = 409, description = "Cage has an active assignment")
    )
)]
pub async fn delete_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let cage = state
        .cages
        .decommission(cage_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}

/// Take a cage out for maintenance
#[utoipa::path(
    put,
    path = "/api/v1/cages/{cage_id}/maintenance",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Cage in maintenance", body = ApiResponse<CageDto>),
        (status = 400, description = "Transition not allowed from the current status"),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn enter_maintenance(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let cage = state
        .cages
        .enter_maintenance(cage_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}

/// Return a cage from maintenance to available
#[utoipa::path(
    put,
    path = "/api/v1/cages/{cage_id}/complete-maintenance",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Cage available again", body = ApiResponse<CageDto>),
        (status = 400, description = "Transition not allowed from the current status"),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn complete_maintenance(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let cage = state
        .cages
        .complete_maintenance(cage_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}

/// Reserve an available cage
#[utoipa::path(
    put,
    path = "/api/v1/cages/{cage_id}/reserve",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Reserved cage", body = ApiResponse<CageDto>),
        (status = 400, description = "Transition not allowed from the current status"),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn reserve(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let cage = state.cages.reserve(cage_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}

/// Cancel a cage reservation
#[utoipa::path(
    put,
    path = "/api/v1/cages/{cage_id}/cancel-reservation",
    tag = "Cages",
    params(("cage_id" = i64, Path, description = "Cage ID")),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<CageDto>),
        (status = 400, description = "Transition not allowed from the current status"),
        (status = 404, description = "Cage not found")
    )
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(cage_id): Path<i64>,
) -> Result<Json<ApiResponse<CageDto>>, ErrorResponse> {
    let cage = state
        .cages
        .cancel_reservation(cage_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(cage.into())))
}
