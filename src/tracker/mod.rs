//! Remote issue creation on the user's tracker.
//!
//! The tracker boundary takes a fully resolved account and an issue draft and
//! returns the key of the created issue. It is used only as the terminal
//! action of the task conversation.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
