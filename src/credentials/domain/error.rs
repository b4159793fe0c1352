//! Error types for credential domain validation.

use thiserror::Error;

/// Errors returned while constructing credential values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialDomainError {
    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// A credential field required for a configured record is empty.
    #[error("credential field '{0}' must not be empty")]
    EmptyField(&'static str),
}
