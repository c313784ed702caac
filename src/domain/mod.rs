pub mod assignment;
pub mod cage;
pub mod directory;
pub mod error;
pub mod repositories;

// Re-export commonly used types
pub use assignment::{Assignment, AssignmentRepository, AssignmentStatus, StayCost};
pub use cage::{Cage, CageFilter, CageOperation, CageRepository, CageSize, CageStatus};
pub use directory::{EmployeeDirectory, PetDirectory};
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
