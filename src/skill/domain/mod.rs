//! Domain model for skill requests and responses.

mod catalog;
mod error;
mod ids;
mod intent;
mod request;
mod response;

pub use catalog::{ResponseCatalog, SETUP_CARD_TITLE, TASK_CARD_TITLE};
pub use error::TurnError;
pub use ids::TurnId;
pub use intent::{Intent, slot};
pub use request::{TurnOutcome, TurnRequest};
pub use response::SkillResponse;
