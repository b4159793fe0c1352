//! File-backed credential store.
//!
//! Each user's record lives in its own JSON document inside a capability
//! directory. File names are the hex SHA-256 of the user identifier, so
//! arbitrary platform user ids never reach the filesystem as path segments.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io;
use std::sync::Arc;

use crate::credentials::{
    domain::{ApiToken, CredentialRecord, PersistedCredentialData, UserId},
    ports::{CredentialStore, CredentialStoreError, CredentialStoreResult},
};

/// Credential store writing one JSON file per user.
///
/// Filesystem work runs on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: Arc<Dir>,
}

/// On-disk representation of a credential record.
#[derive(Debug, Serialize, Deserialize)]
struct CredentialDocument {
    user_id: String,
    jira_base_url: String,
    jira_email: String,
    jira_api_token: String,
    jira_user_id: String,
    configured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialDocument {
    fn from_record(record: &CredentialRecord) -> Self {
        Self {
            user_id: record.user_id().as_str().to_owned(),
            jira_base_url: record.base_url().to_owned(),
            jira_email: record.email().to_owned(),
            jira_api_token: record.api_token().expose().to_owned(),
            jira_user_id: record.tracker_user_id().to_owned(),
            configured: record.is_configured(),
            created_at: record.created_at(),
            updated_at: record.updated_at(),
        }
    }

    fn into_record(self, expected: &UserId) -> CredentialStoreResult<CredentialRecord> {
        if self.user_id != expected.as_str() {
            return Err(CredentialStoreError::Corrupt {
                user_id: expected.clone(),
                reason: "document belongs to a different user".to_owned(),
            });
        }
        Ok(CredentialRecord::from_persisted(PersistedCredentialData {
            user_id: expected.clone(),
            base_url: self.jira_base_url,
            email: self.jira_email,
            api_token: ApiToken::new(self.jira_api_token),
            tracker_user_id: self.jira_user_id,
            configured: self.configured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}

impl FileCredentialStore {
    /// Opens a store rooted at `path`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Utf8Path) -> CredentialStoreResult<Self> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let name = path.file_name().ok_or_else(|| {
            CredentialStoreError::persistence(io::Error::other(
                "credential store path must name a directory",
            ))
        })?;

        let parent_dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(CredentialStoreError::persistence)?;
        parent_dir
            .create_dir_all(name)
            .map_err(CredentialStoreError::persistence)?;
        let dir = parent_dir
            .open_dir(name)
            .map_err(CredentialStoreError::persistence)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened capability directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }
}

/// Runs blocking filesystem work off the async executor's worker threads.
async fn run_blocking<F, T>(f: F) -> CredentialStoreResult<T>
where
    F: FnOnce() -> CredentialStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(CredentialStoreError::persistence)?
}

fn document_name(user_id: &UserId) -> String {
    let digest = Sha256::digest(user_id.as_str().as_bytes());
    format!("{digest:x}.json")
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, user_id: &UserId) -> CredentialStoreResult<Option<CredentialRecord>> {
        let dir = Arc::clone(&self.dir);
        let owner = user_id.clone();
        run_blocking(move || {
            let contents = match dir.read_to_string(document_name(&owner)) {
                Ok(contents) => contents,
                Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(CredentialStoreError::persistence(err)),
            };

            let document: CredentialDocument =
                serde_json::from_str(&contents).map_err(|err| CredentialStoreError::Corrupt {
                    user_id: owner.clone(),
                    reason: err.to_string(),
                })?;
            document.into_record(&owner).map(Some)
        })
        .await
    }

    async fn put(&self, record: &CredentialRecord) -> CredentialStoreResult<()> {
        let dir = Arc::clone(&self.dir);
        let name = document_name(record.user_id());
        let document = CredentialDocument::from_record(record);
        run_blocking(move || {
            let contents =
                serde_json::to_vec_pretty(&document).map_err(CredentialStoreError::persistence)?;
            dir.write(name, contents)
                .map_err(CredentialStoreError::persistence)
        })
        .await
    }
}
