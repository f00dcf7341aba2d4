//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! ```
//! use lesschess::domain::error::DomainError;
//! use lesschess::domain::roster::Roster;
//!
//! let result = Roster::try_new(["alice", "ALICE"]);
//! assert!(matches!(result, Err(DomainError::DuplicateIdentity { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A roster must track at least one identity.
    #[error("roster cannot be empty")]
    EmptyRoster,

    /// Identities are plain handles and cannot be blank.
    #[error("identity at position {position} is blank")]
    BlankIdentity {
        /// Zero-based position in the configured roster.
        position: usize,
    },

    /// Each handle may appear once; comparison ignores case.
    #[error("identity '{identity}' appears more than once")]
    DuplicateIdentity {
        /// The repeated handle.
        identity: String,
    },
}
