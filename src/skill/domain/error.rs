//! Turn-level error taxonomy.

use crate::dialog::{domain::FlowKind, services::DialogError};
use thiserror::Error;

/// Failure of one turn, converted to a spoken response at the turn boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Task creation reached its end without stored credentials.
    #[error("no tracker configuration for user {user_id}")]
    ConfigurationMissing {
        /// Platform user identifier.
        user_id: String,
    },

    /// Reading or writing credentials failed.
    #[error("credential persistence failed: {reason}")]
    Persistence {
        /// Flow whose terminal action failed, absent for plain lookups.
        flow: Option<FlowKind>,
        /// Underlying failure.
        reason: String,
    },

    /// The tracker did not create the issue.
    #[error("{reason}")]
    RemoteCreation {
        /// Raw failure reported by the tracker client.
        reason: String,
    },

    /// The session referenced a step its flow does not have.
    #[error("corrupted session state: {reason}")]
    CorruptedSessionState {
        /// Flow the session claimed to be in.
        flow: FlowKind,
        /// What was inconsistent.
        reason: String,
    },

    /// Anything else.
    #[error("unhandled failure: {0}")]
    Unhandled(String),
}

impl TurnError {
    /// Converts a dialog failure raised while `flow` was active.
    #[must_use]
    pub fn from_dialog(error: DialogError, flow: FlowKind) -> Self {
        match error {
            DialogError::ConfigurationMissing(user_id) => Self::ConfigurationMissing {
                user_id: user_id.to_string(),
            },
            DialogError::Persistence(source) => Self::Persistence {
                flow: Some(flow),
                reason: source.to_string(),
            },
            DialogError::IncompleteCredentials(source) => Self::Persistence {
                flow: Some(flow),
                reason: source.to_string(),
            },
            DialogError::RemoteCreation(source) => Self::RemoteCreation {
                reason: source.to_string(),
            },
            DialogError::CorruptedSessionState { flow: corrupted, reason } => {
                Self::CorruptedSessionState {
                    flow: corrupted,
                    reason,
                }
            }
            DialogError::NoActiveFlow => Self::Unhandled(DialogError::NoActiveFlow.to_string()),
        }
    }

    /// Returns whether the session must be reset to idle.
    #[must_use]
    pub const fn resets_session(&self) -> bool {
        matches!(
            self,
            Self::CorruptedSessionState { .. } | Self::Unhandled(_)
        )
    }

    /// Returns a stable name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing { .. } => "configuration_missing",
            Self::Persistence { .. } => "persistence",
            Self::RemoteCreation { .. } => "remote_creation",
            Self::CorruptedSessionState { .. } => "corrupted_session_state",
            Self::Unhandled(_) => "unhandled",
        }
    }
}
