//! Domain model for stored tracker credentials.

mod error;
mod ids;
mod record;

pub use error::CredentialDomainError;
pub use ids::UserId;
pub use record::{ApiToken, CredentialFields, CredentialRecord, PersistedCredentialData};
