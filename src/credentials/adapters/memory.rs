//! In-memory credential store for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::credentials::{
    domain::{CredentialRecord, UserId},
    ports::{CredentialStore, CredentialStoreError, CredentialStoreResult},
};

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    records: Arc<RwLock<HashMap<UserId, CredentialRecord>>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Persistence`] when lock acquisition
    /// fails.
    pub fn record_count(&self) -> CredentialStoreResult<usize> {
        let records = self.records.read().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.len())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get(&self, user_id: &UserId) -> CredentialStoreResult<Option<CredentialRecord>> {
        let records = self.records.read().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.get(user_id).cloned())
    }

    async fn put(&self, record: &CredentialRecord) -> CredentialStoreResult<()> {
        let mut records = self.records.write().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records.insert(record.user_id().clone(), record.clone());
        Ok(())
    }
}
