//! Port contracts for credential storage.
//!
//! Ports define infrastructure-agnostic interfaces used by dialog services.

pub mod store;

#[cfg(test)]
pub use store::MockCredentialStore;
pub use store::{CredentialStore, CredentialStoreError, CredentialStoreResult};
