//! Turn request and outcome envelopes.

use super::{Intent, SkillResponse};
use crate::dialog::domain::SessionState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One conversational turn as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Resolved intent.
    pub intent: Intent,
    /// Slot values filled by the platform's language model.
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
    /// Platform user identifier.
    pub user_id: String,
    /// Session state returned by the previous turn.
    #[serde(default)]
    pub session: SessionState,
}

impl TurnRequest {
    /// Creates a request with no slots and an idle session.
    #[must_use]
    pub fn new(intent: Intent, user_id: impl Into<String>) -> Self {
        Self {
            intent,
            slots: BTreeMap::new(),
            user_id: user_id.into(),
            session: SessionState::Idle,
        }
    }

    /// Sets a slot value.
    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Sets the incoming session state.
    #[must_use]
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    /// Returns a slot value, or an empty string when the slot is unfilled.
    #[must_use]
    pub fn slot(&self, name: &str) -> &str {
        self.slots.get(name).map_or("", String::as_str)
    }
}

/// Response for one turn together with the session to send back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Spoken response.
    pub response: SkillResponse,
    /// Session state for the next turn.
    pub session: SessionState,
}
