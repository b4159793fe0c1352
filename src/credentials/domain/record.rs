//! Credential record aggregate and the secret token type it carries.

use super::{CredentialDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of hex characters shown when a token is fingerprinted.
const FINGERPRINT_LEN: usize = 12;

/// Issue-tracker API token.
///
/// The token never appears in `Debug` or `Display` output; both print a
/// truncated SHA-256 fingerprint so log lines can still tell tokens apart.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for building authentication headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns a short hex fingerprint of the token.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        format!("{digest:x}").chars().take(FINGERPRINT_LEN).collect()
    }

    fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken(sha256:{})", self.fingerprint())
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.fingerprint())
    }
}

/// The four values collected by a setup conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialFields {
    /// Tracker site URL, already normalized.
    pub base_url: String,
    /// Account email used for basic authentication.
    pub email: String,
    /// API token used for basic authentication.
    pub api_token: ApiToken,
    /// Tracker account identifier used as issue assignee.
    pub tracker_user_id: String,
}

/// Stored tracker configuration for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    user_id: UserId,
    base_url: String,
    email: String,
    api_token: ApiToken,
    tracker_user_id: String,
    configured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted credential record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCredentialData {
    /// Owner of the record.
    pub user_id: UserId,
    /// Persisted tracker site URL.
    pub base_url: String,
    /// Persisted account email.
    pub email: String,
    /// Persisted API token.
    pub api_token: ApiToken,
    /// Persisted tracker account identifier.
    pub tracker_user_id: String,
    /// Persisted configuration flag.
    pub configured: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Builds a fully configured record from freshly collected fields.
    ///
    /// Both timestamps are set to the current clock time; a re-setup replaces
    /// the whole record rather than updating it.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialDomainError::EmptyField`] naming the first field
    /// that is empty after trimming.
    pub fn configure(
        user_id: UserId,
        fields: CredentialFields,
        clock: &impl Clock,
    ) -> Result<Self, CredentialDomainError> {
        let CredentialFields {
            base_url,
            email,
            api_token,
            tracker_user_id,
        } = fields;

        require_non_empty("base_url", &base_url)?;
        require_non_empty("email", &email)?;
        if api_token.is_empty() {
            return Err(CredentialDomainError::EmptyField("api_token"));
        }
        require_non_empty("tracker_user_id", &tracker_user_id)?;

        let timestamp = clock.utc();
        Ok(Self {
            user_id,
            base_url,
            email,
            api_token,
            tracker_user_id,
            configured: true,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCredentialData) -> Self {
        Self {
            user_id: data.user_id,
            base_url: data.base_url,
            email: data.email,
            api_token: data.api_token,
            tracker_user_id: data.tracker_user_id,
            configured: data.configured,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the tracker site URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the tracker account identifier.
    #[must_use]
    pub fn tracker_user_id(&self) -> &str {
        &self.tracker_user_id
    }

    /// Returns whether the record can be used to create issues.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest write timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), CredentialDomainError> {
    if value.trim().is_empty() {
        return Err(CredentialDomainError::EmptyField(field));
    }
    Ok(())
}
