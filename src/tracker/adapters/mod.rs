//! Adapter implementations for the issue tracker port.

pub mod jira;
pub mod memory;

pub use jira::JiraCloudClient;
pub use memory::RecordingIssueTracker;
