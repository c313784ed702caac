//! SeaORM repository implementations

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::domain::{
    AssignmentRepository, CageRepository, DomainError, EmployeeDirectory, PetDirectory,
    RepositoryProvider,
};

pub mod assignment_repository;
pub mod cage_repository;
pub mod directory;

pub use assignment_repository::SeaOrmAssignmentRepository;
pub use cage_repository::SeaOrmCageRepository;
pub use directory::SeaOrmDirectory;

/// Map a database error to the domain taxonomy. Unique-constraint hits
/// become conflicts (the index is the concurrency backstop); everything
/// else keeps the "Database error:" prefix that marks it transient.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            DomainError::Conflict(format!("unique constraint violated: {msg}"))
        }
        _ => DomainError::Validation(format!("Database error: {e}")),
    }
}

/// SQL-backed repository set
pub struct SeaOrmRepositoryProvider {
    cages: SeaOrmCageRepository,
    assignments: SeaOrmAssignmentRepository,
    directory: SeaOrmDirectory,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cages: SeaOrmCageRepository::new(db.clone()),
            assignments: SeaOrmAssignmentRepository::new(db.clone()),
            directory: SeaOrmDirectory::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn cages(&self) -> &dyn CageRepository {
        &self.cages
    }

    fn assignments(&self) -> &dyn AssignmentRepository {
        &self.assignments
    }

    fn pets(&self) -> &dyn PetDirectory {
        &self.directory
    }

    fn employees(&self) -> &dyn EmployeeDirectory {
        &self.directory
    }
}
