//! Domain model for conversation flows.

mod flow;
mod session;
mod transform;

pub use flow::{FieldSpec, FieldTransform, FlowDefinition, FlowKind, field};
pub use session::{CollectedFields, SessionState};
pub use transform::{normalize_domain, upper_case};
