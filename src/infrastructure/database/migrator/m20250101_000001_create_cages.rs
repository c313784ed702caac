//! Create cages table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cages::CageNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Cages::Size).string().not_null())
                    .col(ColumnDef::new(Cages::Location).string())
                    .col(
                        ColumnDef::new(Cages::Status)
                            .string()
                            .not_null()
                            .default("Available"),
                    )
                    .col(ColumnDef::new(Cages::DailyRate).big_integer().not_null())
                    .col(ColumnDef::new(Cages::Notes).string())
                    .col(
                        ColumnDef::new(Cages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability listings filter on status
        manager
            .create_index(
                Index::create()
                    .name("idx_cages_status")
                    .table(Cages::Table)
                    .col(Cages::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Cages {
    Table,
    Id,
    CageNumber,
    Size,
    Location,
    Status,
    DailyRate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
