//! Shared error types for the services crate.

use thiserror::Error;

use navigator_core::model::{LedgerError, SessionId};

/// Errors emitted by journey services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JourneyError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("no journey session with id {0}")]
    SessionNotFound(SessionId),
    #[error("journey session lock poisoned")]
    LockPoisoned,
}

/// Errors emitted while snapshotting or restoring a journey session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
