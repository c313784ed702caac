//! Boarding assignment entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub cage_id: i64,
    pub pet_id: i64,

    pub check_in_date: Date,

    #[sea_orm(nullable)]
    pub expected_check_out_date: Option<Date>,

    #[sea_orm(nullable)]
    pub actual_check_out_date: Option<Date>,

    /// Per-day price snapshotted at check-in, in smallest currency unit
    pub daily_rate: i64,

    /// Staff member who performed the check-in
    #[sea_orm(nullable)]
    pub assigned_by_id: Option<i64>,

    /// Status: Active, Completed, Cancelled
    pub status: String,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cage::Entity",
        from = "Column::CageId",
        to = "super::cage::Column::Id"
    )]
    Cage,
}

impl Related<super::cage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
