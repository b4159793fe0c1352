//! Domain model for remote issue creation.

mod account;
mod issue;

pub use account::TrackerAccount;
pub use issue::{IssueDraft, IssueRef};
