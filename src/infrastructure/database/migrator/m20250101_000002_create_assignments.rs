//! Create assignments table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_cages::Cages;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::CageId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::PetId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::CheckInDate).date().not_null())
                    .col(ColumnDef::new(Assignments::ExpectedCheckOutDate).date())
                    .col(ColumnDef::new(Assignments::ActualCheckOutDate).date())
                    .col(
                        ColumnDef::new(Assignments::DailyRate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::AssignedById).big_integer())
                    .col(
                        ColumnDef::new(Assignments::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(Assignments::Notes).string())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_cage")
                            .from(Assignments::Table, Assignments::CageId)
                            .to(Cages::Table, Cages::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Active-assignment lookups filter on (cage_id, status) and (pet_id, status)
        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_cage_status")
                    .table(Assignments::Table)
                    .col(Assignments::CageId)
                    .col(Assignments::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_pet_status")
                    .table(Assignments::Table)
                    .col(Assignments::PetId)
                    .col(Assignments::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Assignments {
    Table,
    Id,
    CageId,
    PetId,
    CheckInDate,
    ExpectedCheckOutDate,
    ActualCheckOutDate,
    DailyRate,
    AssignedById,
    Status,
    Notes,
    CreatedAt,
}
