//! Cage aggregate: entity, status state machine, repository interface

pub mod model;
pub mod repository;

pub use model::{transition, Cage, CageOperation, CageSize, CageStatus};
pub use repository::{CageFilter, CageRepository};
