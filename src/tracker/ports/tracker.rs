//! Issue tracker port.

use crate::tracker::domain::{IssueDraft, IssueRef, TrackerAccount};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker operations.
pub type IssueTrackerResult<T> = Result<T, IssueTrackerError>;

/// Remote issue creation contract.
///
/// Implementations make a single attempt per call; callers never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Creates an issue on the account's tracker site.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError`] when the request cannot be delivered or
    /// the tracker rejects it.
    async fn create_issue(
        &self,
        account: &TrackerAccount,
        draft: &IssueDraft,
    ) -> IssueTrackerResult<IssueRef>;
}

/// Errors returned by issue tracker adapters.
#[derive(Debug, Clone, Error)]
pub enum IssueTrackerError {
    /// The tracker answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body excerpt.
        body: String,
    },

    /// The tracker answered with a body that is not an issue.
    #[error("malformed tracker response: {0}")]
    MalformedResponse(String),

    /// The request could not be delivered.
    #[error("{0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueTrackerError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
