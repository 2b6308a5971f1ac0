//! Company status lifecycle rules
//!
//! The status graph is directed and small:
//!
//! ```text
//! ACTIVE <-> SUSPENDED
//!    |          |
//!    v          v
//!    ARCHIVED ---> DELETING
//! ```
//!
//! Self-transitions are illegal, and an archived company can never
//! return to service.

use thiserror::Error;

use super::entity::CompanyStatus;

/// The complete set of legal (from, to) status pairs
pub const LEGAL_TRANSITIONS: [(CompanyStatus, CompanyStatus); 5] = [
    (CompanyStatus::Active, CompanyStatus::Suspended),
    (CompanyStatus::Active, CompanyStatus::Archived),
    (CompanyStatus::Suspended, CompanyStatus::Active),
    (CompanyStatus::Suspended, CompanyStatus::Archived),
    (CompanyStatus::Archived, CompanyStatus::Deleting),
];

/// Error raised for a status pair outside the legal set
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Company status cannot change from {from} to {to}")]
pub struct InvalidTransitionError {
    pub from: CompanyStatus,
    pub to: CompanyStatus,
}

/// Whether the (from, to) pair is in the legal transition set
pub fn is_legal_transition(from: CompanyStatus, to: CompanyStatus) -> bool {
    LEGAL_TRANSITIONS.contains(&(from, to))
}

/// Check a transition, returning the offending pair on failure
pub fn check_transition(
    from: CompanyStatus,
    to: CompanyStatus,
) -> Result<(), InvalidTransitionError> {
    if is_legal_transition(from, to) {
        Ok(())
    } else {
        Err(InvalidTransitionError { from, to })
    }
}
