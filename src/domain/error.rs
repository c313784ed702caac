//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A precondition on the current lifecycle state failed
    /// (e.g. checking out an assignment that is not active).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A cage status operation was attempted outside the transition table.
    #[error("Invalid transition: cannot {operation} a cage in status {status}")]
    InvalidTransition {
        status: &'static str,
        operation: &'static str,
    },

    #[error("Validation: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            // DB errors mapped from repositories carry a "Database error:" prefix
            DomainError::Validation(msg) => msg.starts_with("Database error:"),
            _ => false,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let e = DomainError::not_found("Cage", "id", 7);
        assert_eq!(e.to_string(), "Not found: Cage with id=7");
    }

    #[test]
    fn invalid_transition_display() {
        let e = DomainError::InvalidTransition {
            status: "Occupied",
            operation: "enter maintenance on",
        };
        assert_eq!(
            e.to_string(),
            "Invalid transition: cannot enter maintenance on a cage in status Occupied"
        );
    }

    #[test]
    fn db_errors_are_transient() {
        assert!(DomainError::Validation("Database error: locked".into()).is_transient());
        assert!(!DomainError::Conflict("duplicate cage number".into()).is_transient());
    }
}
