//! Application services for conversation flows.

mod machine;

pub use machine::{
    Acknowledgement, Advance, DialogError, DialogResult, DialogStateMachine, StepPrompt,
};
