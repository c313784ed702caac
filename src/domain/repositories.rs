//! Repository provider
//!
//! Aggregates the per-entity repositories and the directory collaborators
//! behind one handle, so services receive a single injected dependency and
//! tests can swap the whole set for in-memory fakes.

use crate::domain::assignment::AssignmentRepository;
use crate::domain::cage::CageRepository;
use crate::domain::directory::{EmployeeDirectory, PetDirectory};

pub trait RepositoryProvider: Send + Sync {
    fn cages(&self) -> &dyn CageRepository;
    fn assignments(&self) -> &dyn AssignmentRepository;
    fn pets(&self) -> &dyn PetDirectory;
    fn employees(&self) -> &dyn EmployeeDirectory;
}
