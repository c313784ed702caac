//! SeaORM implementation of CageRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::ActiveValue::NotSet;
use tracing::debug;

use super::db_err;
use crate::domain::{Cage, CageFilter, CageRepository, CageSize, CageStatus, DomainError, DomainResult};
use crate::infrastructure::database::entities::cage;

pub struct SeaOrmCageRepository {
    db: DatabaseConnection,
}

impl SeaOrmCageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: cage::Model) -> DomainResult<Cage> {
    Ok(Cage {
        id: m.id,
        size: CageSize::from_str(&m.size)
            .ok_or_else(|| DomainError::Validation(format!("invalid stored cage size '{}'", m.size)))?,
        status: CageStatus::from_str(&m.status).ok_or_else(|| {
            DomainError::Validation(format!("invalid stored cage status '{}'", m.status))
        })?,
        cage_number: m.cage_number,
        location: m.location,
        daily_rate: m.daily_rate,
        notes: m.notes,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_fields(c: &Cage) -> cage::ActiveModel {
    cage::ActiveModel {
        id: NotSet,
        cage_number: Set(c.cage_number.clone()),
        size: Set(c.size.as_str().to_string()),
        location: Set(c.location.clone()),
        status: Set(c.status.as_str().to_string()),
        daily_rate: Set(c.daily_rate),
        notes: Set(c.notes.clone()),
        created_at: Set(c.created_at),
        updated_at: Set(c.updated_at),
    }
}

// ── CageRepository impl ─────────────────────────────────────────

#[async_trait]
impl CageRepository for SeaOrmCageRepository {
    async fn save(&self, new_cage: Cage) -> DomainResult<Cage> {
        debug!(cage_number = %new_cage.cage_number, "saving cage");
        if self.find_by_number(&new_cage.cage_number).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "cage number '{}' already in use",
                new_cage.cage_number
            )));
        }
        // The unique index on cage_number is the backstop for a concurrent
        // insert slipping past the pre-check; db_err maps it to Conflict.
        let saved = domain_fields(&new_cage)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Cage>> {
        let model = cage::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_by_number(&self, cage_number: &str) -> DomainResult<Option<Cage>> {
        let model = cage::Entity::find()
            .filter(cage::Column::CageNumber.eq(cage_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, updated: Cage) -> DomainResult<()> {
        debug!(cage_id = updated.id, "updating cage");
        let existing = cage::Entity::find_by_id(updated.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Cage", "id", updated.id));
        }

        let mut model = domain_fields(&updated);
        model.id = Set(updated.id);
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn list(&self, filter: CageFilter) -> DomainResult<Vec<Cage>> {
        let mut query = cage::Entity::find().order_by_asc(cage::Column::CageNumber);
        if let Some(size) = filter.size {
            query = query.filter(cage::Column::Size.eq(size.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(cage::Column::Status.eq(status.as_str()));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
