//! Multi-turn slot collection.
//!
//! Two independent conversations are modelled as ordered field lists: setup
//! collects tracker credentials and task creation collects an issue. The
//! [`services::DialogStateMachine`] walks a [`domain::SessionState`] through
//! those lists one spoken value at a time and runs the terminal action once
//! the last field arrives.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
