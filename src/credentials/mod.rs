//! Per-user issue-tracker credential storage.
//!
//! A credential record is written once a setup conversation collects every
//! field, and is read back whenever a task has to be created on the user's
//! behalf. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
