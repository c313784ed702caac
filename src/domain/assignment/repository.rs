//! Assignment repository interface

use async_trait::async_trait;

use super::model::Assignment;
use crate::domain::DomainResult;

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Persist a new assignment and return it with its assigned id.
    async fn save(&self, assignment: Assignment) -> DomainResult<Assignment>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Assignment>>;
    async fn update(&self, assignment: Assignment) -> DomainResult<()>;
    /// The single active assignment occupying a cage, if any.
    async fn find_active_for_cage(&self, cage_id: i64) -> DomainResult<Option<Assignment>>;
    /// The single active assignment boarding a pet, if any.
    async fn find_active_for_pet(&self, pet_id: i64) -> DomainResult<Option<Assignment>>;
    /// Full stay history of a cage, newest first.
    async fn find_by_cage(&self, cage_id: i64) -> DomainResult<Vec<Assignment>>;
    /// All currently active assignments.
    async fn find_active(&self) -> DomainResult<Vec<Assignment>>;
}
