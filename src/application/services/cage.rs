//! Cage registry business logic
//!
//! Cage CRUD plus the staff-facing status transitions. The check-in/check-out
//! transitions (`occupy`/`release`) are deliberately absent here: those are
//! side effects of the boarding ledger and must not be reachable directly.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Cage, CageSize, DomainError, DomainResult, RepositoryProvider};

/// Parameters for creating a cage
#[derive(Debug, Clone)]
pub struct NewCage {
    pub cage_number: String,
    pub size: CageSize,
    pub location: Option<String>,
    /// List price per day, in smallest currency unit
    pub daily_rate: i64,
    pub notes: Option<String>,
}

/// Partial update; `None` keeps the existing value. Status is not updatable
/// here, only through the transition operations.
#[derive(Debug, Clone, Default)]
pub struct CageUpdate {
    pub cage_number: Option<String>,
    pub size: Option<CageSize>,
    pub location: Option<String>,
    pub daily_rate: Option<i64>,
    pub notes: Option<String>,
}

/// Service for cage registry operations
pub struct CageService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CageService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Register a new cage. The cage number must be unique across every
    /// cage ever created, decommissioned ones included.
    pub async fn create(&self, new_cage: NewCage) -> DomainResult<Cage> {
        let number = new_cage.cage_number.trim();
        if number.is_empty() {
            return Err(DomainError::Validation("cage number must not be empty".into()));
        }
        validate_rate(new_cage.daily_rate)?;

        if self.repos.cages().find_by_number(number).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "cage number '{number}' already in use"
            )));
        }

        let mut cage = Cage::new(number, new_cage.size, new_cage.daily_rate);
        cage.location = new_cage.location;
        cage.notes = new_cage.notes;

        let saved = self.repos.cages().save(cage).await?;
        info!(cage_id = saved.id, cage_number = %saved.cage_number, "cage created");
        Ok(saved)
    }

    pub async fn get(&self, cage_id: i64) -> DomainResult<Cage> {
        self.repos
            .cages()
            .find_by_id(cage_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cage", "id", cage_id))
    }

    /// Update cage attributes. Relabeling re-checks number uniqueness.
    pub async fn update(&self, cage_id: i64, update: CageUpdate) -> DomainResult<Cage> {
        let mut cage = self.get(cage_id).await?;

        if let Some(number) = update.cage_number {
            let number = number.trim().to_string();
            if number.is_empty() {
                return Err(DomainError::Validation("cage number must not be empty".into()));
            }
            if number != cage.cage_number {
                if self.repos.cages().find_by_number(&number).await?.is_some() {
                    return Err(DomainError::Conflict(format!(
                        "cage number '{number}' already in use"
                    )));
                }
                cage.cage_number = number;
            }
        }
        if let Some(rate) = update.daily_rate {
            validate_rate(rate)?;
            cage.daily_rate = rate;
        }
        if let Some(size) = update.size {
            cage.size = size;
        }
        if update.location.is_some() {
            cage.location = update.location;
        }
        if update.notes.is_some() {
            cage.notes = update.notes;
        }
        cage.updated_at = chrono::Utc::now();

        self.repos.cages().update(cage.clone()).await?;
        Ok(cage)
    }

    pub async fn enter_maintenance(&self, cage_id: i64) -> DomainResult<Cage> {
        self.transition(cage_id, "maintenance started", Cage::enter_maintenance)
            .await
    }

    pub async fn complete_maintenance(&self, cage_id: i64) -> DomainResult<Cage> {
        self.transition(cage_id, "maintenance completed", Cage::complete_maintenance)
            .await
    }

    pub async fn reserve(&self, cage_id: i64) -> DomainResult<Cage> {
        self.transition(cage_id, "reserved", Cage::reserve).await
    }

    pub async fn cancel_reservation(&self, cage_id: i64) -> DomainResult<Cage> {
        self.transition(cage_id, "reservation cancelled", Cage::cancel_reservation)
            .await
    }

    /// Soft delete: the cage row is kept, only its status retires it.
    /// Refused while an active assignment references the cage.
    pub async fn decommission(&self, cage_id: i64) -> DomainResult<Cage> {
        let active = self
            .repos
            .assignments()
            .find_active_for_cage(cage_id)
            .await?;
        if let Some(active) = active {
            return Err(DomainError::Conflict(format!(
                "cage has an active assignment ({})",
                active.id
            )));
        }
        self.transition(cage_id, "decommissioned", Cage::decommission)
            .await
    }

    async fn transition(
        &self,
        cage_id: i64,
        event: &'static str,
        apply: impl FnOnce(&mut Cage) -> DomainResult<()>,
    ) -> DomainResult<Cage> {
        let mut cage = self.get(cage_id).await?;
        apply(&mut cage)?;
        self.repos.cages().update(cage.clone()).await?;
        info!(cage_id, cage_number = %cage.cage_number, status = %cage.status, "cage {event}");
        Ok(cage)
    }
}

fn validate_rate(rate: i64) -> DomainResult<()> {
    if rate < 0 {
        return Err(DomainError::Validation("daily rate must not be negative".into()));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CageStatus;
    use crate::domain::{AssignmentRepository, CageRepository};
    use crate::infrastructure::storage::memory::InMemoryRepositories;

    fn new_cage(number: &str) -> NewCage {
        NewCage {
            cage_number: number.to_string(),
            size: CageSize::Medium,
            location: None,
            daily_rate: 75_000,
            notes: None,
        }
    }

    fn setup() -> (Arc<InMemoryRepositories>, CageService) {
        let repos = Arc::new(InMemoryRepositories::new());
        let provider: Arc<dyn RepositoryProvider> = repos.clone();
        (repos, CageService::new(provider))
    }

    #[tokio::test]
    async fn create_assigns_id_and_starts_available() {
        let (_repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();
        assert!(cage.id > 0);
        assert_eq!(cage.status, CageStatus::Available);
        assert_eq!(cage.daily_rate, 75_000);
    }

    #[tokio::test]
    async fn duplicate_number_is_conflict() {
        let (_repos, service) = setup();
        service.create(new_cage("M-01")).await.unwrap();
        let err = service.create(new_cage("M-01")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn decommissioned_number_stays_taken() {
        let (_repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();
        service.decommission(cage.id).await.unwrap();
        let err = service.create(new_cage("M-01")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_rejects_bad_input() {
        let (_repos, service) = setup();
        let mut bad = new_cage("  ");
        assert!(matches!(
            service.create(bad.clone()).await.unwrap_err(),
            DomainError::Validation(_)
        ));
        bad.cage_number = "M-02".into();
        bad.daily_rate = -5;
        assert!(matches!(
            service.create(bad).await.unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn update_changes_rate_and_relabels() {
        let (_repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();
        service.create(new_cage("M-02")).await.unwrap();

        let updated = service
            .update(
                cage.id,
                CageUpdate {
                    daily_rate: Some(80_000),
                    location: Some("ward B".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.daily_rate, 80_000);
        assert_eq!(updated.location.as_deref(), Some("ward B"));

        // relabeling onto a taken number is refused
        let err = service
            .update(
                cage.id,
                CageUpdate {
                    cage_number: Some("M-02".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_unknown_cage_is_not_found() {
        let (_repos, service) = setup();
        let err = service.update(404, CageUpdate::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn maintenance_and_reservation_flows() {
        let (_repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();

        let cage2 = service.enter_maintenance(cage.id).await.unwrap();
        assert_eq!(cage2.status, CageStatus::Maintenance);
        let cage3 = service.complete_maintenance(cage.id).await.unwrap();
        assert_eq!(cage3.status, CageStatus::Available);

        let cage4 = service.reserve(cage.id).await.unwrap();
        assert_eq!(cage4.status, CageStatus::Reserved);
        let cage5 = service.cancel_reservation(cage.id).await.unwrap();
        assert_eq!(cage5.status, CageStatus::Available);
    }

    #[tokio::test]
    async fn maintenance_on_occupied_cage_is_invalid_transition() {
        let (repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();
        let mut stored = repos.cages.find_by_id(cage.id).await.unwrap().unwrap();
        stored.occupy().unwrap();
        repos.cages.update(stored).await.unwrap();

        let err = service.enter_maintenance(cage.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        let after = repos.cages.find_by_id(cage.id).await.unwrap().unwrap();
        assert_eq!(after.status, CageStatus::Occupied);
    }

    #[tokio::test]
    async fn decommission_with_active_assignment_is_conflict() {
        let (repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();
        repos.pets.insert(10);
        let assignment = crate::domain::Assignment::new(
            cage.id,
            10,
            chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            cage.daily_rate,
        );
        repos.assignments.save(assignment).await.unwrap();

        let err = service.decommission(cage.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn decommission_is_terminal() {
        let (_repos, service) = setup();
        let cage = service.create(new_cage("M-01")).await.unwrap();
        let gone = service.decommission(cage.id).await.unwrap();
        assert_eq!(gone.status, CageStatus::OutOfService);
        // no way back
        let err = service.complete_maintenance(cage.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }
}
