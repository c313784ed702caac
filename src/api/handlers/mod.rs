//! REST API handlers

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::application::services::{
    AvailabilityQuery, BillingService, BoardingService, CageService,
};
use crate::domain::DomainError;

pub mod assignments;
pub mod cages;
pub mod health;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub cages: Arc<CageService>,
    pub boarding: Arc<BoardingService>,
    pub availability: Arc<AvailabilityQuery>,
    pub billing: Arc<BillingService>,
}

/// Map a domain error to an HTTP status and envelope.
pub(crate) fn error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::InvalidState(_) | DomainError::InvalidTransition { .. } => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────
