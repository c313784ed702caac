//! Database migrations

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_cages;
mod m20250101_000002_create_assignments;
mod m20250101_000003_create_directory_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_cages::Migration),
            Box::new(m20250101_000002_create_assignments::Migration),
            Box::new(m20250101_000003_create_directory_tables::Migration),
        ]
    }
}
