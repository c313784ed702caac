//! API data transfer objects

pub mod assignment;
pub mod cage;
pub mod common;

pub use assignment::{AssignCageRequest, AssignmentDto, CheckOutRequest, StayCostDto};
pub use cage::{
    AvailableCagesQuery, CageDto, CreateCageRequest, ListCagesQuery, UpdateCageRequest,
};
pub use common::{ApiResponse, PaginatedResponse, PaginationParams};
