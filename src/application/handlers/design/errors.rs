//! Errors surfaced by design command and query handlers.

use thiserror::Error;

use crate::domain::foundation::{DesignId, DomainError};
use crate::ports::{ExportError, MailError, StoreError};

/// Failure of one design operation.
///
/// None of these leave the session's state half-applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    #[error("Design not found: {0}")]
    NotFound(DesignId),

    /// The request referenced something the catalog or state does not allow.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Mail(#[from] MailError),

    /// No new session can be opened until idle ones are discarded.
    #[error("Session limit reached ({0} live sessions)")]
    SessionLimit(usize),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<StoreError> for DesignError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => DesignError::NotFound(id),
            StoreError::CapacityReached(limit) => DesignError::SessionLimit(limit),
            other => DesignError::Infrastructure(other.to_string()),
        }
    }
}
