//! Port contracts for remote issue creation.

pub mod tracker;

#[cfg(test)]
pub use tracker::MockIssueTracker;
pub use tracker::{IssueTracker, IssueTrackerError, IssueTrackerResult};
