//! Domain errors for the proxykit system.

use thiserror::Error;

/// Domain-level errors that can occur behind a subject port.
///
/// The simulated backends never fail, but ports return [`DomainResult`] so a
/// real store can report failures without overloading the outcome types.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The backing store could not be reached.
    #[error("Backing store unavailable ({descriptor}): {reason}")]
    BackendUnavailable {
        /// Connection descriptor that was used
        descriptor: String,
        /// Failure reported by the store
        reason: String,
    },
}

/// Result alias for subject port operations.
pub type DomainResult<T> = Result<T, DomainError>;
