//! Spoken response returned to the platform.

use serde::{Deserialize, Serialize};

/// Speech, optional reprompt and optional card for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResponse {
    /// Text spoken to the user.
    pub spoken_text: String,
    /// Text spoken if the user stays silent; keeps the session open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt_text: Option<String>,
    /// Title of the companion-app card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_title: Option<String>,
    /// Body of the companion-app card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_text: Option<String>,
    /// Whether the platform should close the session after speaking.
    pub session_ended: bool,
}

impl SkillResponse {
    /// Creates a response that speaks `text` and closes the session.
    #[must_use]
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            spoken_text: text.into(),
            session_ended: true,
            ..Self::default()
        }
    }

    /// Creates an empty response that closes the session.
    #[must_use]
    pub fn empty() -> Self {
        Self::speak(String::new())
    }

    /// Adds a reprompt and keeps the session open.
    #[must_use]
    pub fn with_reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt_text = Some(text.into());
        self.session_ended = false;
        self
    }

    /// Adds a companion-app card repeating the spoken text.
    #[must_use]
    pub fn with_card(mut self, title: impl Into<String>) -> Self {
        self.card_title = Some(title.into());
        self.card_text = Some(self.spoken_text.clone());
        self
    }
}
