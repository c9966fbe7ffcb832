//! Design Store Port - holds live editing sessions.
//!
//! Each session is a [`WizardController`] behind its own async mutex, so a
//! single writer mutates a design at a time while other sessions proceed.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::DesignId;
use crate::domain::wizard::WizardController;

/// Shared handle to one session.
pub type DesignHandle = Arc<Mutex<WizardController>>;

/// Errors that can occur during session storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Design not found: {0}")]
    NotFound(DesignId),

    #[error("Design already exists: {0}")]
    AlreadyExists(DesignId),

    /// The store holds its maximum number of live sessions.
    #[error("Session limit reached ({0} live sessions)")]
    CapacityReached(usize),
}

/// Port for keeping live design sessions.
///
/// Sessions are not persisted. Implementations may discard sessions that
/// have gone idle, so a lookup can fail for an id that once existed.
#[async_trait]
pub trait DesignStore: Send + Sync {
    /// Stores a new session.
    ///
    /// # Errors
    /// Returns `StoreError::AlreadyExists` if `id` is taken and
    /// `StoreError::CapacityReached` if no more sessions are admitted
    async fn insert(
        &self,
        id: DesignId,
        controller: WizardController,
    ) -> Result<DesignHandle, StoreError>;

    /// Looks up a session and marks it as recently used.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no session exists
    async fn get(&self, id: DesignId) -> Result<DesignHandle, StoreError>;

    /// Discards a session.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no session exists
    async fn remove(&self, id: DesignId) -> Result<(), StoreError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
