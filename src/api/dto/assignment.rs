//! Assignment API DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Assignment, StayCost};

/// One boarding stay
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i64,
    pub cage_id: i64,
    pub pet_id: i64,
    pub check_in_date: NaiveDate,
    /// Informational; does not gate any behavior
    pub expected_check_out_date: Option<NaiveDate>,
    /// Set by check-out
    pub actual_check_out_date: Option<NaiveDate>,
    /// Per-day price snapshotted at check-in, in smallest currency unit
    pub daily_rate: i64,
    /// Staff member who performed the check-in
    pub assigned_by_id: Option<i64>,
    /// `Active`, `Completed` or `Cancelled`
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Assignment> for AssignmentDto {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id,
            cage_id: a.cage_id,
            pet_id: a.pet_id,
            check_in_date: a.check_in_date,
            expected_check_out_date: a.expected_check_out_date,
            actual_check_out_date: a.actual_check_out_date,
            daily_rate: a.daily_rate,
            assigned_by_id: a.assigned_by_id,
            status: a.status.as_str().to_string(),
            notes: a.notes,
            created_at: a.created_at,
        }
    }
}

/// Request to board a pet into a cage
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignCageRequest {
    pub pet_id: i64,
    pub check_in_date: NaiveDate,
    pub expected_check_out_date: Option<NaiveDate>,
    /// Per-day price override; defaults to the cage's current list rate
    #[validate(range(min = 0))]
    pub daily_rate: Option<i64>,
    pub assigned_by_id: Option<i64>,
    pub notes: Option<String>,
}

/// Check-out request. Send `{}` to check out as of today.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckOutRequest {
    pub check_out_date: Option<NaiveDate>,
}

/// Computed cost of a stay. `days` and `total` are `null` while the
/// stay is still open.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StayCostDto {
    pub assignment_id: i64,
    pub days: Option<i64>,
    /// Snapshotted per-day rate the total is computed from
    pub daily_rate: i64,
    pub total: Option<i64>,
}

impl StayCostDto {
    pub fn from_parts(assignment: &Assignment, cost: Option<StayCost>) -> Self {
        Self {
            assignment_id: assignment.id,
            days: cost.as_ref().map(|c| c.days),
            daily_rate: assignment.daily_rate,
            total: cost.map(|c| c.total),
        }
    }
}
