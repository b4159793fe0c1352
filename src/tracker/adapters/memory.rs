//! In-memory issue tracker that records drafts instead of calling out.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::tracker::{
    domain::{IssueDraft, IssueRef, TrackerAccount},
    ports::{IssueTracker, IssueTrackerError, IssueTrackerResult},
};

/// Issue tracker double that numbers issues per call.
///
/// Keys take the form `{project_key}-{n}` with `n` counting every accepted
/// draft. A configured failure makes every call fail with that message.
#[derive(Debug, Clone, Default)]
pub struct RecordingIssueTracker {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    drafts: Vec<(TrackerAccount, IssueDraft)>,
    failure: Option<String>,
}

impl RecordingIssueTracker {
    /// Creates a tracker that accepts every draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent calls fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_with(&self, reason: impl Into<String>) -> IssueTrackerResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IssueTrackerError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.failure = Some(reason.into());
        Ok(())
    }

    /// Returns every draft accepted or attempted so far.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn drafts(&self) -> IssueTrackerResult<Vec<IssueDraft>> {
        let state = self.state.read().map_err(|err| {
            IssueTrackerError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.drafts.iter().map(|(_, draft)| draft.clone()).collect())
    }

    /// Returns the account each draft was sent with, in call order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn accounts(&self) -> IssueTrackerResult<Vec<TrackerAccount>> {
        let state = self.state.read().map_err(|err| {
            IssueTrackerError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.drafts.iter().map(|(account, _)| account.clone()).collect())
    }
}

#[async_trait]
impl IssueTracker for RecordingIssueTracker {
    async fn create_issue(
        &self,
        account: &TrackerAccount,
        draft: &IssueDraft,
    ) -> IssueTrackerResult<IssueRef> {
        let mut state = self.state.write().map_err(|err| {
            IssueTrackerError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.drafts.push((account.clone(), draft.clone()));
        if let Some(reason) = &state.failure {
            return Err(IssueTrackerError::transport(std::io::Error::other(
                reason.clone(),
            )));
        }
        let number = state.drafts.len();
        Ok(IssueRef::new(format!("{}-{number}", draft.project_key())))
    }
}
