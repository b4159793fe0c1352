//! Store port for per-user credential records.

use crate::credentials::domain::{CredentialRecord, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// Credential persistence contract, keyed solely by [`UserId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the record stored for a user.
    ///
    /// Returns `None` when the user has never completed setup.
    async fn get(&self, user_id: &UserId) -> CredentialStoreResult<Option<CredentialRecord>>;

    /// Writes a record, replacing any record previously stored for the same
    /// user.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Persistence`] when the write fails.
    async fn put(&self, record: &CredentialRecord) -> CredentialStoreResult<()>;

    /// Returns whether the user has a configured record.
    async fn is_configured(&self, user_id: &UserId) -> CredentialStoreResult<bool> {
        Ok(self
            .get(user_id)
            .await?
            .is_some_and(|record| record.is_configured()))
    }
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// A stored record could not be decoded.
    #[error("stored credentials for user {user_id} are unreadable: {reason}")]
    Corrupt {
        /// Owner of the unreadable record.
        user_id: UserId,
        /// Decoding failure reason.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
