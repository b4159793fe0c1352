//! Voice skill surface: intents in, spoken responses out.
//!
//! The [`services::IntentRouter`] is the turn boundary. It maps each intent
//! to a dialog operation, enforces the "configure before creating tasks"
//! precondition and converts every failure into a spoken response, so the
//! platform always receives a well-formed answer.

pub mod domain;
pub mod services;
