//! Cage domain entity and status state machine

use chrono::{DateTime, Utc};

use crate::domain::error::{DomainError, DomainResult};

/// Physical cage size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CageSize {
    Small,
    Medium,
    Large,
}

impl CageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Small" => Some(Self::Small),
            "Medium" => Some(Self::Medium),
            "Large" => Some(Self::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for CageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cage availability status
///
/// `OutOfService` is terminal: a decommissioned cage is never reactivated,
/// it must be re-created under a fresh number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CageStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
    OutOfService,
}

impl Default for CageStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl CageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Reserved => "Reserved",
            Self::OutOfService => "OutOfService",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(Self::Available),
            "Occupied" => Some(Self::Occupied),
            "Maintenance" => Some(Self::Maintenance),
            "Reserved" => Some(Self::Reserved),
            "OutOfService" => Some(Self::OutOfService),
            _ => None,
        }
    }

    /// Whether a check-in may target a cage in this status.
    /// Derived from the transition table so the answer can never drift
    /// from what `occupy()` actually accepts.
    pub fn is_bookable(&self) -> bool {
        transition(*self, CageOperation::Occupy).is_ok()
    }
}

impl std::fmt::Display for CageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operations on the cage status state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CageOperation {
    /// Check-in side effect (assignment ledger only)
    Occupy,
    /// Check-out side effect (assignment ledger only)
    Release,
    EnterMaintenance,
    CompleteMaintenance,
    Reserve,
    CancelReservation,
    Decommission,
}

impl CageOperation {
    /// Verb phrase used in `InvalidTransition` messages.
    pub fn as_verb(&self) -> &'static str {
        match self {
            Self::Occupy => "occupy",
            Self::Release => "release",
            Self::EnterMaintenance => "enter maintenance on",
            Self::CompleteMaintenance => "complete maintenance on",
            Self::Reserve => "reserve",
            Self::CancelReservation => "cancel the reservation on",
            Self::Decommission => "decommission",
        }
    }
}

/// The cage status transition table, expressed exactly once.
///
/// Every caller (entity methods, services, HTTP layer) goes through this
/// function; guard logic is not repeated anywhere else. Illegal pairs fail
/// with `InvalidTransition` and never silently no-op.
pub fn transition(status: CageStatus, operation: CageOperation) -> DomainResult<CageStatus> {
    use CageOperation::*;
    use CageStatus::*;

    let next = match (status, operation) {
        (Available | Reserved, Occupy) => Occupied,
        (Occupied | Reserved | Maintenance, Release) => Available,
        (Available | Reserved, EnterMaintenance) => Maintenance,
        (Maintenance, CompleteMaintenance) => Available,
        (Available, Reserve) => Reserved,
        (Reserved, CancelReservation) => Available,
        (Available | Reserved | Maintenance | OutOfService, Decommission) => OutOfService,
        (status, operation) => {
            return Err(DomainError::InvalidTransition {
                status: status.as_str(),
                operation: operation.as_verb(),
            });
        }
    };
    Ok(next)
}

/// Boarding cage entity
#[derive(Debug, Clone)]
pub struct Cage {
    /// Unique identifier (assigned by storage)
    pub id: i64,
    /// Human-facing label (e.g. "S-01"), unique across all cages
    /// including decommissioned ones
    pub cage_number: String,
    pub size: CageSize,
    pub location: Option<String>,
    pub status: CageStatus,
    /// Current list price per day, in smallest currency unit.
    /// Mutable by staff; assignments snapshot it at check-in.
    pub daily_rate: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cage {
    pub fn new(cage_number: impl Into<String>, size: CageSize, daily_rate: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            cage_number: cage_number.into(),
            size,
            location: None,
            status: CageStatus::Available,
            daily_rate,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, operation: CageOperation) -> DomainResult<()> {
        self.status = transition(self.status, operation)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Mark the cage occupied. Invoked only by the assignment ledger
    /// as the check-in side effect.
    pub fn occupy(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::Occupy)
    }

    /// Return the cage to available. Invoked only by the assignment ledger
    /// as the check-out side effect.
    pub fn release(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::Release)
    }

    pub fn enter_maintenance(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::EnterMaintenance)
    }

    pub fn complete_maintenance(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::CompleteMaintenance)
    }

    pub fn reserve(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::Reserve)
    }

    pub fn cancel_reservation(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::CancelReservation)
    }

    /// Soft delete. The row is kept so assignment history stays valid.
    pub fn decommission(&mut self) -> DomainResult<()> {
        self.apply(CageOperation::Decommission)
    }

    pub fn is_decommissioned(&self) -> bool {
        self.status == CageStatus::OutOfService
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [CageStatus; 5] = [
        CageStatus::Available,
        CageStatus::Occupied,
        CageStatus::Maintenance,
        CageStatus::Reserved,
        CageStatus::OutOfService,
    ];

    const ALL_OPERATIONS: [CageOperation; 7] = [
        CageOperation::Occupy,
        CageOperation::Release,
        CageOperation::EnterMaintenance,
        CageOperation::CompleteMaintenance,
        CageOperation::Reserve,
        CageOperation::CancelReservation,
        CageOperation::Decommission,
    ];

    /// The legal transitions, spelled out pair by pair.
    fn expected(status: CageStatus, operation: CageOperation) -> Option<CageStatus> {
        use CageOperation::*;
        use CageStatus::*;
        match (status, operation) {
            (Available | Reserved, Occupy) => Some(Occupied),
            (Occupied | Reserved | Maintenance, Release) => Some(Available),
            (Available | Reserved, EnterMaintenance) => Some(Maintenance),
            (Maintenance, CompleteMaintenance) => Some(Available),
            (Available, Reserve) => Some(Reserved),
            (Reserved, CancelReservation) => Some(Available),
            (Available | Reserved | Maintenance | OutOfService, Decommission) => {
                Some(OutOfService)
            }
            _ => None,
        }
    }

    #[test]
    fn transition_table_is_exactly_the_legal_set() {
        for status in ALL_STATUSES {
            for operation in ALL_OPERATIONS {
                match (transition(status, operation), expected(status, operation)) {
                    (Ok(next), Some(want)) => assert_eq!(next, want, "{status} + {operation:?}"),
                    (Err(DomainError::InvalidTransition { .. }), None) => {}
                    (got, want) => {
                        panic!("{status} + {operation:?}: got {got:?}, expected {want:?}")
                    }
                }
            }
        }
    }

    #[test]
    fn illegal_operation_leaves_cage_unchanged() {
        let mut cage = Cage::new("S-01", CageSize::Small, 50_000);
        cage.occupy().unwrap();
        let err = cage.enter_maintenance().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(cage.status, CageStatus::Occupied);
    }

    #[test]
    fn new_cage_is_available() {
        let cage = Cage::new("M-03", CageSize::Medium, 75_000);
        assert_eq!(cage.status, CageStatus::Available);
        assert!(cage.status.is_bookable());
        assert!(!cage.is_decommissioned());
    }

    #[test]
    fn occupy_then_release_round_trip() {
        let mut cage = Cage::new("S-01", CageSize::Small, 50_000);
        cage.occupy().unwrap();
        assert_eq!(cage.status, CageStatus::Occupied);
        assert!(!cage.status.is_bookable());
        cage.release().unwrap();
        assert_eq!(cage.status, CageStatus::Available);
    }

    #[test]
    fn reserved_cage_can_be_occupied() {
        let mut cage = Cage::new("S-01", CageSize::Small, 50_000);
        cage.reserve().unwrap();
        assert!(cage.status.is_bookable());
        cage.occupy().unwrap();
        assert_eq!(cage.status, CageStatus::Occupied);
    }

    #[test]
    fn maintenance_cycle() {
        let mut cage = Cage::new("L-02", CageSize::Large, 120_000);
        cage.enter_maintenance().unwrap();
        assert_eq!(cage.status, CageStatus::Maintenance);
        cage.complete_maintenance().unwrap();
        assert_eq!(cage.status, CageStatus::Available);
    }

    #[test]
    fn cancel_reservation_requires_reserved() {
        let mut cage = Cage::new("S-01", CageSize::Small, 50_000);
        assert!(cage.cancel_reservation().is_err());
        cage.reserve().unwrap();
        cage.cancel_reservation().unwrap();
        assert_eq!(cage.status, CageStatus::Available);
    }

    #[test]
    fn occupied_cage_cannot_be_decommissioned() {
        let mut cage = Cage::new("S-01", CageSize::Small, 50_000);
        cage.occupy().unwrap();
        assert!(cage.decommission().is_err());
        assert_eq!(cage.status, CageStatus::Occupied);
    }

    #[test]
    fn out_of_service_is_terminal() {
        let mut cage = Cage::new("S-01", CageSize::Small, 50_000);
        cage.decommission().unwrap();
        assert!(cage.is_decommissioned());
        assert!(cage.occupy().is_err());
        assert!(cage.release().is_err());
        assert!(cage.enter_maintenance().is_err());
        assert!(cage.reserve().is_err());
        assert_eq!(cage.status, CageStatus::OutOfService);
    }

    #[test]
    fn status_string_roundtrip() {
        for status in ALL_STATUSES {
            assert_eq!(CageStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(CageStatus::from_str("Broken"), None);
    }

    #[test]
    fn size_string_roundtrip() {
        for size in [CageSize::Small, CageSize::Medium, CageSize::Large] {
            assert_eq!(CageSize::from_str(size.as_str()), Some(size));
        }
        assert_eq!(CageSize::from_str("XL"), None);
    }
}
