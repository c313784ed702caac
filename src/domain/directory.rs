//! External directory collaborators
//!
//! The boarding engine validates pet and staff references against the wider
//! clinic system but owns neither: both are existence lookups at the seam,
//! nothing more.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Pet identity lookup
#[async_trait]
pub trait PetDirectory: Send + Sync {
    async fn exists(&self, pet_id: i64) -> DomainResult<bool>;
}

/// Staff identity lookup
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn exists(&self, employee_id: i64) -> DomainResult<bool>;
}
