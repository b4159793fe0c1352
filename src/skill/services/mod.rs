//! Turn handling services.

mod router;

pub use router::IntentRouter;
