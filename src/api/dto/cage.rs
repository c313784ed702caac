//! Cage API DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Cage;

/// Boarding cage
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CageDto {
    pub id: i64,
    /// Human-facing label, e.g. "S-01"
    pub cage_number: String,
    /// `Small`, `Medium` or `Large`
    pub size: String,
    pub location: Option<String>,
    /// `Available`, `Occupied`, `Maintenance`, `Reserved` or `OutOfService`
    pub status: String,
    /// Current list price per day, in smallest currency unit
    pub daily_rate: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cage> for CageDto {
    fn from(c: Cage) -> Self {
        Self {
            id: c.id,
            cage_number: c.cage_number,
            size: c.size.as_str().to_string(),
            location: c.location,
            status: c.status.as_str().to_string(),
            daily_rate: c.daily_rate,
            notes: c.notes,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request to register a new cage
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCageRequest {
    /// Unique label (1-20 characters)
    #[validate(length(min = 1, max = 20))]
    pub cage_number: String,
    /// `Small`, `Medium` or `Large`
    pub size: String,
    pub location: Option<String>,
    /// List price per day, in smallest currency unit
    #[validate(range(min = 0))]
    pub daily_rate: i64,
    pub notes: Option<String>,
}

/// Partial cage update; omitted fields keep their value.
/// Status is not updatable here, only through the transition endpoints.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCageRequest {
    #[validate(length(min = 1, max = 20))]
    pub cage_number: Option<String>,
    /// `Small`, `Medium` or `Large`
    pub size: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 0))]
    pub daily_rate: Option<i64>,
    pub notes: Option<String>,
}

/// Filters for the cage listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCagesQuery {
    /// Filter by size: `Small`, `Medium` or `Large`
    pub size: Option<String>,
    /// Filter by exact status
    pub status: Option<String>,
    /// Shorthand for `status=Available`; ignored when `status` is set
    pub is_available: Option<bool>,
}

/// Filters for the availability listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailableCagesQuery {
    /// Filter by size: `Small`, `Medium` or `Large`
    pub size: Option<String>,
    /// Requested boarding window start. Accepted for interface
    /// compatibility; the window is not applied to the result.
    pub date_from: Option<NaiveDate>,
    /// Requested boarding window end. Accepted but not applied.
    pub date_to: Option<NaiveDate>,
}
