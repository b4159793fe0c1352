//! Voice intake: spoken conversations that configure a Jira account and
//! file tasks into it.
//!
//! A voice platform delivers one intent per turn. The crate keeps a small
//! per-session state machine that collects the account's credentials, or a
//! task's fields, one question at a time. It then stores the credentials or
//! creates the issue remotely.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, HTTP, memory)
//!
//! # Modules
//!
//! - [`credentials`]: Per-user tracker credentials and their stores
//! - [`tracker`]: Issue creation against the remote tracker
//! - [`dialog`]: Setup and task flows driven one answer at a time
//! - [`skill`]: Intent routing and spoken responses
//! - [`config`]: Process configuration

pub mod config;
pub mod credentials;
pub mod dialog;
pub mod skill;
pub mod tracker;
