//! Step definitions for intake conversation scenarios.

mod given;
mod then;
mod when;
pub mod world;
