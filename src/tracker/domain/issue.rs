//! Issue draft and created-issue reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue payload handed to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    title: String,
    description: String,
    project_key: String,
    assignee_id: String,
}

impl IssueDraft {
    /// Creates a draft from collected values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        project_key: impl Into<String>,
        assignee_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            project_key: project_key.into(),
            assignee_id: assignee_id.into(),
        }
    }

    /// Returns the issue summary.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issue description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the target project key.
    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Returns the tracker account id the issue is assigned to.
    #[must_use]
    pub fn assignee_id(&self) -> &str {
        &self.assignee_id
    }
}

/// Reference to an issue created remotely, e.g. `DEV-42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRef {
    key: String,
}

impl IssueRef {
    /// Placeholder key used when the tracker omits one.
    pub const UNKNOWN_KEY: &'static str = "N/A";

    /// Creates an issue reference.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the issue key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
