//! Resolved tracker account used to authenticate issue creation.

use crate::credentials::domain::{ApiToken, CredentialRecord};

/// Site and basic-auth credentials for one tracker account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerAccount {
    base_url: String,
    email: String,
    api_token: ApiToken,
}

impl TrackerAccount {
    /// Creates an account from raw values.
    #[must_use]
    pub fn new(base_url: impl Into<String>, email: impl Into<String>, api_token: ApiToken) -> Self {
        Self {
            base_url: base_url.into(),
            email: email.into(),
            api_token,
        }
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
}

impl From<&CredentialRecord> for TrackerAccount {
    fn from(record: &CredentialRecord) -> Self {
        Self::new(
            record.base_url(),
            record.email(),
            record.api_token().clone(),
        )
    }
}
