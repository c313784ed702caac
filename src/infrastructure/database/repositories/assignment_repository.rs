//! SeaORM implementation of AssignmentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::ActiveValue::NotSet;
use tracing::debug;

use super::db_err;
use crate::domain::{
    Assignment, AssignmentRepository, AssignmentStatus, DomainError, DomainResult,
};
use crate::infrastructure::database::entities::assignment;

pub struct SeaOrmAssignmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmAssignmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: assignment::Model) -> DomainResult<Assignment> {
    Ok(Assignment {
        id: m.id,
        cage_id: m.cage_id,
        pet_id: m.pet_id,
        check_in_date: m.check_in_date,
        expected_check_out_date: m.expected_check_out_date,
        actual_check_out_date: m.actual_check_out_date,
        daily_rate: m.daily_rate,
        assigned_by_id: m.assigned_by_id,
        status: AssignmentStatus::from_str(&m.status).ok_or_else(|| {
            DomainError::Validation(format!("invalid stored assignment status '{}'", m.status))
        })?,
        notes: m.notes,
        created_at: m.created_at,
    })
}

fn domain_fields(a: &Assignment) -> assignment::ActiveModel {
    assignment::ActiveModel {
        id: NotSet,
        cage_id: Set(a.cage_id),
        pet_id: Set(a.pet_id),
        check_in_date: Set(a.check_in_date),
        expected_check_out_date: Set(a.expected_check_out_date),
        actual_check_out_date: Set(a.actual_check_out_date),
        daily_rate: Set(a.daily_rate),
        assigned_by_id: Set(a.assigned_by_id),
        status: Set(a.status.as_str().to_string()),
        notes: Set(a.notes.clone()),
        created_at: Set(a.created_at),
    }
}

// ── AssignmentRepository impl ───────────────────────────────────

#[async_trait]
impl AssignmentRepository for SeaOrmAssignmentRepository {
    async fn save(&self, new_assignment: Assignment) -> DomainResult<Assignment> {
        debug!(
            cage_id = new_assignment.cage_id,
            pet_id = new_assignment.pet_id,
            "saving assignment"
        );
        let saved = domain_fields(&new_assignment)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Assignment>> {
        let model = assignment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, updated: Assignment) -> DomainResult<()> {
        debug!(assignment_id = updated.id, "updating assignment");
        let existing = assignment::Entity::find_by_id(updated.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Assignment", "id", updated.id));
        }

        let mut model = domain_fields(&updated);
        model.id = Set(updated.id);
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_active_for_cage(&self, cage_id: i64) -> DomainResult<Option<Assignment>> {
        let model = assignment::Entity::find()
            .filter(assignment::Column::CageId.eq(cage_id))
            .filter(assignment::Column::Status.eq(AssignmentStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_active_for_pet(&self, pet_id: i64) -> DomainResult<Option<Assignment>> {
        let model = assignment::Entity::find()
            .filter(assignment::Column::PetId.eq(pet_id))
            .filter(assignment::Column::Status.eq(AssignmentStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_by_cage(&self, cage_id: i64) -> DomainResult<Vec<Assignment>> {
        let models = assignment::Entity::find()
            .filter(assignment::Column::CageId.eq(cage_id))
            .order_by_desc(assignment::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_active(&self) -> DomainResult<Vec<Assignment>> {
        let models = assignment::Entity::find()
            .filter(assignment::Column::Status.eq(AssignmentStatus::Active.as_str()))
            .order_by_asc(assignment::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
