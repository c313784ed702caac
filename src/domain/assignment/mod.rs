//! Assignment aggregate: entity, lifecycle, repository interface

pub mod model;
pub mod repository;

pub use model::{Assignment, AssignmentStatus, StayCost};
pub use repository::AssignmentRepository;
