//! Stay-cost exposure for the billing collaborator
//!
//! Boarding does not push anything to invoicing; the downstream billing
//! process pulls the computed cost of a closed stay from here. The
//! computation itself is pure and lives on the assignment entity.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Assignment, DomainError, DomainResult, RepositoryProvider, StayCost};

/// Service exposing stay-cost calculations
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// The assignment together with its computed cost.
    /// The cost is `None` while the stay is still open.
    pub async fn stay_cost(
        &self,
        assignment_id: i64,
    ) -> DomainResult<(Assignment, Option<StayCost>)> {
        let assignment = self
            .repos
            .assignments()
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment", "id", assignment_id))?;

        let cost = assignment.cost_breakdown();
        debug!(
            assignment_id,
            total = cost.as_ref().map(|c| c.total),
            "stay cost computed"
        );
        Ok((assignment, cost))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Assignment;
    use crate::domain::AssignmentRepository;
    use crate::infrastructure::storage::memory::InMemoryRepositories;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (Arc<InMemoryRepositories>, BillingService) {
        let repos = Arc::new(InMemoryRepositories::new());
        let provider: Arc<dyn RepositoryProvider> = repos.clone();
        (repos, BillingService::new(provider))
    }

    #[tokio::test]
    async fn closed_stay_has_cost() {
        let (repos, service) = setup();
        let mut assignment = Assignment::new(1, 10, date(2026, 1, 15), 50_000);
        assignment.complete(date(2026, 1, 20)).unwrap();
        let saved = repos.assignments.save(assignment).await.unwrap();

        let (_, cost) = service.stay_cost(saved.id).await.unwrap();
        let cost = cost.unwrap();
        assert_eq!(cost.days, 5);
        assert_eq!(cost.total, 250_000);
    }

    #[tokio::test]
    async fn open_stay_has_no_cost_yet() {
        let (repos, service) = setup();
        let assignment = Assignment::new(1, 10, date(2026, 1, 15), 50_000);
        let saved = repos.assignments.save(assignment).await.unwrap();

        let (returned, cost) = service.stay_cost(saved.id).await.unwrap();
        assert!(returned.is_active());
        assert!(cost.is_none());
    }

    #[tokio::test]
    async fn unknown_assignment_is_not_found() {
        let (_repos, service) = setup();
        let err = service.stay_cost(404).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
