//! SeaORM-backed directory lookups
//!
//! Existence checks against the pet and employee tables the wider clinic
//! system maintains.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::db_err;
use crate::domain::{DomainResult, EmployeeDirectory, PetDirectory};
use crate::infrastructure::database::entities::{employee, pet};

pub struct SeaOrmDirectory {
    db: DatabaseConnection,
}

impl SeaOrmDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetDirectory for SeaOrmDirectory {
    async fn exists(&self, pet_id: i64) -> DomainResult<bool> {
        let found = pet::Entity::find_by_id(pet_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl EmployeeDirectory for SeaOrmDirectory {
    async fn exists(&self, employee_id: i64) -> DomainResult<bool> {
        let found = employee::Entity::find_by_id(employee_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.is_some())
    }
}
