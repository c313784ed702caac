//! Cage repository interface

use async_trait::async_trait;

use super::model::{Cage, CageSize, CageStatus};
use crate::domain::DomainResult;

/// Attribute filter for cage listings
#[derive(Debug, Clone, Copy, Default)]
pub struct CageFilter {
    pub size: Option<CageSize>,
    pub status: Option<CageStatus>,
}

#[async_trait]
pub trait CageRepository: Send + Sync {
    /// Persist a new cage and return it with its assigned id.
    /// Fails with `Conflict` when the cage number is already taken.
    async fn save(&self, cage: Cage) -> DomainResult<Cage>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Cage>>;
    async fn find_by_number(&self, cage_number: &str) -> DomainResult<Option<Cage>>;
    async fn update(&self, cage: Cage) -> DomainResult<()>;
    /// List cages matching the filter, ordered by cage number ascending.
    async fn list(&self, filter: CageFilter) -> DomainResult<Vec<Cage>>;
}
