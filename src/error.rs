use std::fmt;

/// Errors surfaced by the merchant store.
///
/// `NotFound` is the only domain-level failure: lookups, updates and deletes
/// against an absent id report it explicitly rather than passing a silent
/// null back to the caller. `LockPoisoned` can only arise when the store is
/// shared behind a lock by a concurrent host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound { id: u64 },
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "no merchant with id {}", id),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound { .. } => 404,
            StoreError::LockPoisoned(_) => 500,
        }
    }
}
