//! Cage entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Human-facing label, unique across every cage ever created
    #[sea_orm(unique)]
    pub cage_number: String,

    /// Size: Small, Medium, Large
    pub size: String,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    /// Status: Available, Occupied, Maintenance, Reserved, OutOfService
    pub status: String,

    /// Current list price per day, in smallest currency unit
    pub daily_rate: i64,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
