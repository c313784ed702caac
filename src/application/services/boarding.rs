//! Boarding ledger: check-in / check-out lifecycle
//!
//! Owns the assignment lifecycle and drives the cage status machine as a
//! side effect. The precondition check and the paired writes (assignment +
//! cage status) happen under per-cage and per-pet locks, so two concurrent
//! check-ins against the same cage or the same pet serialize; unrelated
//! cages and pets proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use chrono::{NaiveDate, Utc};
use metrics::counter;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{error, info};

use crate::domain::{Assignment, DomainError, DomainResult, RepositoryProvider};
use crate::shared::retry::{retry_with_backoff, RetryConfig};

/// Check-in parameters
#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub cage_id: i64,
    pub pet_id: i64,
    pub check_in_date: NaiveDate,
    pub expected_check_out_date: Option<NaiveDate>,
    /// Explicit per-day price; falls back to the cage's current list rate
    pub daily_rate_override: Option<i64>,
    pub assigned_by_id: Option<i64>,
    pub notes: Option<String>,
}

/// Lock keyspace. Cage and pet keys are disjoint, and cage locks are always
/// acquired before pet locks, so lock acquisition cannot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ResourceKey {
    Cage(i64),
    Pet(i64),
}

/// Process-local registry of per-resource async locks.
#[derive(Default)]
struct LockRegistry {
    locks: StdMutex<HashMap<ResourceKey, Arc<Mutex<()>>>>,
}

impl LockRegistry {
    async fn acquire(&self, key: ResourceKey) -> OwnedMutexGuard<()> {
        let handle = {
            let mut map = self.locks.lock().expect("lock registry poisoned");
            Arc::clone(map.entry(key).or_default())
        };
        handle.lock_owned().await
    }
}

/// Service for the boarding check-in/check-out lifecycle
pub struct BoardingService {
    repos: Arc<dyn RepositoryProvider>,
    locks: LockRegistry,
    retry: RetryConfig,
}

impl BoardingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            locks: LockRegistry::default(),
            retry: RetryConfig::default(),
        }
    }

    /// Board a pet into a cage.
    ///
    /// Preconditions are checked in a fixed order, each with its own error
    /// kind: cage exists, cage bookable, pet exists, pet not already
    /// boarded, staff member exists. The assignment write and the cage
    /// status flip commit together or not at all.
    pub async fn check_in(&self, request: CheckInRequest) -> DomainResult<Assignment> {
        if let Some(rate) = request.daily_rate_override {
            if rate < 0 {
                return Err(DomainError::Validation(
                    "daily rate must not be negative".into(),
                ));
            }
        }

        let _cage_lock = self.locks.acquire(ResourceKey::Cage(request.cage_id)).await;
        let _pet_lock = self.locks.acquire(ResourceKey::Pet(request.pet_id)).await;

        let result = retry_with_backoff(
            &self.retry,
            || self.check_in_locked(&request),
            DomainError::is_transient,
            "check_in",
        )
        .await
        .map_err(surface_exhausted_retries)?;

        counter!("boarding_check_ins_total").increment(1);
        info!(
            assignment_id = result.id,
            cage_id = result.cage_id,
            pet_id = result.pet_id,
            daily_rate = result.daily_rate,
            "pet checked in"
        );
        Ok(result)
    }

    async fn check_in_locked(&self, request: &CheckInRequest) -> DomainResult<Assignment> {
        let cage = self
            .repos
            .cages()
            .find_by_id(request.cage_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cage", "id", request.cage_id))?;

        if !cage.status.is_bookable() {
            return Err(DomainError::InvalidState("cage not available".into()));
        }

        if !self.repos.pets().exists(request.pet_id).await? {
            return Err(DomainError::not_found("Pet", "id", request.pet_id));
        }

        if let Some(existing) = self
            .repos
            .assignments()
            .find_active_for_pet(request.pet_id)
            .await?
        {
            return Err(DomainError::Conflict(format!(
                "pet already boarded (assignment {})",
                existing.id
            )));
        }

        if let Some(employee_id) = request.assigned_by_id {
            if !self.repos.employees().exists(employee_id).await? {
                return Err(DomainError::not_found("Employee", "id", employee_id));
            }
        }

        // Snapshot the rate before any write so the stay cost stays
        // reproducible even if the list rate changes mid-stay.
        let mut assignment = Assignment::new(
            request.cage_id,
            request.pet_id,
            request.check_in_date,
            request.daily_rate_override.unwrap_or(cage.daily_rate),
        );
        assignment.expected_check_out_date = request.expected_check_out_date;
        assignment.assigned_by_id = request.assigned_by_id;
        assignment.notes = request.notes.clone();

        let before = cage.clone();
        let mut cage = cage;
        cage.occupy()?;
        self.repos.cages().update(cage).await?;

        match self.repos.assignments().save(assignment).await {
            Ok(saved) => Ok(saved),
            Err(err) => {
                // Roll the cage back so the two writes remain all-or-nothing.
                if let Err(revert) = self.repos.cages().update(before).await {
                    error!(
                        cage_id = request.cage_id,
                        error = %revert,
                        "failed to revert cage status after aborted check-in"
                    );
                }
                Err(err)
            }
        }
    }

    /// Close a stay. Defaults the check-out date to today.
    pub async fn check_out(
        &self,
        assignment_id: i64,
        check_out_date: Option<NaiveDate>,
    ) -> DomainResult<Assignment> {
        let assignment = self
            .repos
            .assignments()
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment", "id", assignment_id))?;

        // Serializes against check-ins for the same cage and against a
        // concurrent second check-out: whichever loses the lock re-reads a
        // non-active assignment and fails the guard.
        let _cage_lock = self.locks.acquire(ResourceKey::Cage(assignment.cage_id)).await;

        let date = check_out_date.unwrap_or_else(|| Utc::now().date_naive());
        let result = retry_with_backoff(
            &self.retry,
            || self.check_out_locked(assignment_id, date),
            DomainError::is_transient,
            "check_out",
        )
        .await
        .map_err(surface_exhausted_retries)?;

        counter!("boarding_check_outs_total").increment(1);
        info!(
            assignment_id = result.id,
            cage_id = result.cage_id,
            billed_days = result.billed_days(),
            "pet checked out"
        );
        Ok(result)
    }

    async fn check_out_locked(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> DomainResult<Assignment> {
        let mut assignment = self
            .repos
            .assignments()
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment", "id", assignment_id))?;

        let before = assignment.clone();
        assignment.complete(date)?;
        self.repos.assignments().update(assignment.clone()).await?;

        let cage = self
            .repos
            .cages()
            .find_by_id(assignment.cage_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cage", "id", assignment.cage_id))?;

        let mut cage = cage;
        let outcome = match cage.release() {
            Ok(()) => self.repos.cages().update(cage).await,
            Err(err) => Err(err),
        };

        if let Err(err) = outcome {
            if let Err(revert) = self.repos.assignments().update(before).await {
                error!(
                    assignment_id,
                    error = %revert,
                    "failed to revert assignment after aborted check-out"
                );
            }
            return Err(err);
        }

        Ok(assignment)
    }

    pub async fn get(&self, assignment_id: i64) -> DomainResult<Assignment> {
        self.repos
            .assignments()
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment", "id", assignment_id))
    }

    /// The assignment currently occupying a cage, if any.
    pub async fn current_assignment(&self, cage_id: i64) -> DomainResult<Option<Assignment>> {
        self.require_cage(cage_id).await?;
        self.repos.assignments().find_active_for_cage(cage_id).await
    }

    /// Full stay history of a cage.
    pub async fn assignments_for_cage(&self, cage_id: i64) -> DomainResult<Vec<Assignment>> {
        self.require_cage(cage_id).await?;
        self.repos.assignments().find_by_cage(cage_id).await
    }

    /// All active assignments across the clinic.
    pub async fn active_assignments(&self) -> DomainResult<Vec<Assignment>> {
        self.repos.assignments().find_active().await
    }

    async fn require_cage(&self, cage_id: i64) -> DomainResult<()> {
        self.repos
            .cages()
            .find_by_id(cage_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cage", "id", cage_id))?;
        Ok(())
    }
}

/// A transient failure that survived every retry is reported as a conflict,
/// not as the raw storage error.
fn surface_exhausted_retries(err: DomainError) -> DomainError {
    if err.is_transient() {
        DomainError::Conflict(format!("storage busy, try again: {err}"))
    } else {
        err
    }
}

// ── Tests ──────────────────────────────────────────────────────
