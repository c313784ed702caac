//! In-memory storage implementation
//!
//! DashMap-backed repositories for tests and development. Semantics mirror
//! the SQL implementations, including the cage-number uniqueness conflict.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Assignment, AssignmentRepository, Cage, CageFilter, CageRepository, DomainError, DomainResult,
    EmployeeDirectory, PetDirectory, RepositoryProvider,
};

/// In-memory cage store
#[derive(Default)]
pub struct InMemoryCageRepository {
    cages: DashMap<i64, Cage>,
    counter: AtomicI64,
}

impl InMemoryCageRepository {
    fn number_taken(&self, cage_number: &str, except_id: i64) -> bool {
        self.cages
            .iter()
            .any(|c| c.cage_number == cage_number && c.id != except_id)
    }
}

#[async_trait]
impl CageRepository for InMemoryCageRepository {
    async fn save(&self, mut cage: Cage) -> DomainResult<Cage> {
        if self.number_taken(&cage.cage_number, 0) {
            return Err(DomainError::Conflict(format!(
                "cage number '{}' already in use",
                cage.cage_number
            )));
        }
        cage.id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.cages.insert(cage.id, cage.clone());
        Ok(cage)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Cage>> {
        Ok(self.cages.get(&id).map(|c| c.clone()))
    }

    async fn find_by_number(&self, cage_number: &str) -> DomainResult<Option<Cage>> {
        Ok(self
            .cages
            .iter()
            .find(|c| c.cage_number == cage_number)
            .map(|c| c.clone()))
    }

    async fn update(&self, cage: Cage) -> DomainResult<()> {
        if !self.cages.contains_key(&cage.id) {
            return Err(DomainError::not_found("Cage", "id", cage.id));
        }
        if self.number_taken(&cage.cage_number, cage.id) {
            return Err(DomainError::Conflict(format!(
                "cage number '{}' already in use",
                cage.cage_number
            )));
        }
        self.cages.insert(cage.id, cage);
        Ok(())
    }

    async fn list(&self, filter: CageFilter) -> DomainResult<Vec<Cage>> {
        let mut cages: Vec<Cage> = self
            .cages
            .iter()
            .filter(|c| filter.size.map_or(true, |size| c.size == size))
            .filter(|c| filter.status.map_or(true, |status| c.status == status))
            .map(|c| c.clone())
            .collect();
        cages.sort_by(|a, b| a.cage_number.cmp(&b.cage_number));
        Ok(cages)
    }
}

/// In-memory assignment store
#[derive(Default)]
pub struct InMemoryAssignmentRepository {
    assignments: DashMap<i64, Assignment>,
    counter: AtomicI64,
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn save(&self, mut assignment: Assignment) -> DomainResult<Assignment> {
        assignment.id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Assignment>> {
        Ok(self.assignments.get(&id).map(|a| a.clone()))
    }

    async fn update(&self, assignment: Assignment) -> DomainResult<()> {
        if !self.assignments.contains_key(&assignment.id) {
            return Err(DomainError::not_found("Assignment", "id", assignment.id));
        }
        self.assignments.insert(assignment.id, assignment);
        Ok(())
    }

    async fn find_active_for_cage(&self, cage_id: i64) -> DomainResult<Option<Assignment>> {
        Ok(self
            .assignments
            .iter()
            .find(|a| a.cage_id == cage_id && a.is_active())
            .map(|a| a.clone()))
    }

    async fn find_active_for_pet(&self, pet_id: i64) -> DomainResult<Option<Assignment>> {
        Ok(self
            .assignments
            .iter()
            .find(|a| a.pet_id == pet_id && a.is_active())
            .map(|a| a.clone()))
    }

    async fn find_by_cage(&self, cage_id: i64) -> DomainResult<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.cage_id == cage_id)
            .map(|a| a.clone())
            .collect();
        assignments.sort_by_key(|a| std::cmp::Reverse(a.id));
        Ok(assignments)
    }

    async fn find_active(&self) -> DomainResult<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.is_active())
            .map(|a| a.clone())
            .collect();
        assignments.sort_by_key(|a| a.id);
        Ok(assignments)
    }
}

/// In-memory id directory, used for both pets and employees
#[derive(Default)]
pub struct InMemoryDirectory {
    ids: DashMap<i64, ()>,
}

impl InMemoryDirectory {
    pub fn insert(&self, id: i64) {
        self.ids.insert(id, ());
    }
}

#[async_trait]
impl PetDirectory for InMemoryDirectory {
    async fn exists(&self, pet_id: i64) -> DomainResult<bool> {
        Ok(self.ids.contains_key(&pet_id))
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn exists(&self, employee_id: i64) -> DomainResult<bool> {
        Ok(self.ids.contains_key(&employee_id))
    }
}

/// The full in-memory repository set
#[derive(Default)]
pub struct InMemoryRepositories {
    pub cages: InMemoryCageRepository,
    pub assignments: InMemoryAssignmentRepository,
    pub pets: InMemoryDirectory,
    pub employees: InMemoryDirectory,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositories {
    fn cages(&self) -> &dyn CageRepository {
        &self.cages
    }

    fn assignments(&self) -> &dyn AssignmentRepository {
        &self.assignments
    }

    fn pets(&self) -> &dyn PetDirectory {
        &self.pets
    }

    fn employees(&self) -> &dyn EmployeeDirectory {
        &self.employees
    }
}

// ── Tests ──────────────────────────────────────────────────────
