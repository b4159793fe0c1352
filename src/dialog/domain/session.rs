//! Per-session conversation state.

use super::{FieldSpec, FlowKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values captured so far, keyed by field name.
pub type CollectedFields = BTreeMap<String, String>;

/// Conversation state carried between turns of one session.
///
/// The state round-trips through the platform's session attributes, so it
/// is serialisable. `step` indexes the active flow's field list; a step
/// outside that list can only come from a tampered or stale payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No flow in progress.
    #[default]
    Idle,
    /// Collecting setup fields.
    InSetupFlow {
        /// Index of the field being collected.
        step: usize,
        /// Values captured so far.
        #[serde(default)]
        fields: CollectedFields,
    },
    /// Collecting task fields.
    InTaskFlow {
        /// Index of the field being collected.
        step: usize,
        /// Values captured so far.
        #[serde(default)]
        fields: CollectedFields,
    },
}

impl SessionState {
    /// Returns the state at the first field of `flow`.
    #[must_use]
    pub fn begin(flow: FlowKind) -> Self {
        match flow {
            FlowKind::Setup => Self::InSetupFlow {
                step: 0,
                fields: CollectedFields::new(),
            },
            FlowKind::Task => Self::InTaskFlow {
                step: 0,
                fields: CollectedFields::new(),
            },
        }
    }

    /// Returns the flow in progress, if any.
    #[must_use]
    pub const fn active_flow(&self) -> Option<FlowKind> {
        match self {
            Self::Idle => None,
            Self::InSetupFlow { .. } => Some(FlowKind::Setup),
            Self::InTaskFlow { .. } => Some(FlowKind::Task),
        }
    }

    /// Returns the index of the field being collected, if any.
    #[must_use]
    pub const fn current_step(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::InSetupFlow { step, .. } | Self::InTaskFlow { step, .. } => Some(*step),
        }
    }

    /// Returns the field being collected, if the step is valid.
    #[must_use]
    pub fn current_field(&self) -> Option<&'static FieldSpec> {
        let flow = self.active_flow()?;
        let step = self.current_step()?;
        flow.definition().field(step)
    }

    /// Returns the values captured so far, or `None` when idle.
    #[must_use]
    pub fn collected_fields(&self) -> Option<&CollectedFields> {
        match self {
            Self::Idle => None,
            Self::InSetupFlow { fields, .. } | Self::InTaskFlow { fields, .. } => Some(fields),
        }
    }

    /// Returns whether no flow is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Drops any flow in progress together with its captured values.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Stores a captured value under `name` in the active flow.
    pub(crate) fn record(&mut self, name: &str, value: String) {
        if let Self::InSetupFlow { fields, .. } | Self::InTaskFlow { fields, .. } = self {
            fields.insert(name.to_owned(), value);
        }
    }

    /// Moves the active flow to `next_step`.
    pub(crate) fn move_to(&mut self, next_step: usize) {
        if let Self::InSetupFlow { step, .. } | Self::InTaskFlow { step, .. } = self {
            *step = next_step;
        }
    }

    /// Resets to idle and hands back the values captured so far.
    pub(crate) fn finish(&mut self) -> CollectedFields {
        match std::mem::take(self) {
            Self::Idle => CollectedFields::new(),
            Self::InSetupFlow { fields, .. } | Self::InTaskFlow { fields, .. } => fields,
        }
    }
}
