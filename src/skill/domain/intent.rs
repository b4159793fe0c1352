//! Intents recognized by the skill.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot names carried by capture intents.
pub mod slot {
    /// Free-form answer during setup.
    pub const SETUP_DATA: &str = "setupData";
    /// Free-form answer during task creation.
    pub const TASK_DATA: &str = "data";
}

/// Intent resolved by the platform for one turn.
///
/// Both the platform's request and intent names (`LaunchRequest`,
/// `AMAZON.HelpIntent`, ...) and the short names used here are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    /// Skill opened without a request.
    Launch,
    /// User asked to configure the tracker.
    SetupJira,
    /// User answered a setup question.
    CaptureSetupData,
    /// User asked to create a task.
    CreateTask,
    /// User answered a task question.
    CaptureTaskData,
    /// User asked for help.
    Help,
    /// User cancelled or stopped.
    CancelOrStop,
    /// Platform closed the session.
    SessionEnded,
    /// Any intent the skill does not handle.
    Unknown(String),
}

impl Intent {
    /// Resolves an intent from its platform or short name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "LaunchRequest" | "Launch" => Self::Launch,
            "SetupJiraIntent" | "SetupJira" => Self::SetupJira,
            "CaptureSetupDataIntent" | "CaptureSetupData" => Self::CaptureSetupData,
            "CreateTaskIntent" | "CreateTask" => Self::CreateTask,
            "CaptureTaskDataIntent" | "CaptureTaskData" => Self::CaptureTaskData,
            "AMAZON.HelpIntent" | "Help" => Self::Help,
            "AMAZON.CancelIntent" | "AMAZON.StopIntent" | "CancelOrStop" => Self::CancelOrStop,
            "SessionEndedRequest" | "SessionEnded" => Self::SessionEnded,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Returns the canonical short name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Launch => "Launch",
            Self::SetupJira => "SetupJira",
            Self::CaptureSetupData => "CaptureSetupData",
            Self::CreateTask => "CreateTask",
            Self::CaptureTaskData => "CaptureTaskData",
            Self::Help => "Help",
            Self::CancelOrStop => "CancelOrStop",
            Self::SessionEnded => "SessionEnded",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for Intent {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Intent> for String {
    fn from(value: Intent) -> Self {
        value.name().to_owned()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
