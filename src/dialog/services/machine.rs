//! Dialog state machine driving setup and task conversations.

use crate::credentials::{
    domain::{ApiToken, CredentialDomainError, CredentialFields, CredentialRecord, UserId},
    ports::{CredentialStore, CredentialStoreError},
};
use crate::dialog::domain::{CollectedFields, FieldSpec, FlowKind, SessionState, field};
use crate::tracker::{
    domain::{IssueDraft, IssueRef, TrackerAccount},
    ports::{IssueTracker, IssueTrackerError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while advancing or completing a flow.
#[derive(Debug, Error)]
pub enum DialogError {
    /// A value was captured while no flow was in progress.
    #[error("no flow is in progress")]
    NoActiveFlow,

    /// The session points at a step the flow does not have, or lacks a
    /// value the terminal action needs.
    #[error("corrupted {flow} session: {reason}")]
    CorruptedSessionState {
        /// Flow the session claimed to be in.
        flow: FlowKind,
        /// What was inconsistent.
        reason: String,
    },

    /// The user has no configured tracker credentials.
    #[error("no tracker configuration stored for user {0}")]
    ConfigurationMissing(UserId),

    /// Collected setup values do not form a configured record.
    #[error("collected credentials are incomplete: {0}")]
    IncompleteCredentials(#[from] CredentialDomainError),

    /// The credential store failed.
    #[error(transparent)]
    Persistence(#[from] CredentialStoreError),

    /// The tracker did not create the issue.
    #[error(transparent)]
    RemoteCreation(#[from] IssueTrackerError),
}

/// Result type for dialog operations.
pub type DialogResult<T> = Result<T, DialogError>;

/// Confirmation of a value that was just captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Field that was captured.
    pub field: &'static FieldSpec,
    /// Value as stored, after its transform.
    pub value: String,
}

/// Question for the field that is now current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPrompt {
    /// Flow in progress.
    pub flow: FlowKind,
    /// Index of the field being asked for.
    pub step: usize,
    /// Field being asked for.
    pub field: &'static FieldSpec,
    /// Confirmation of the previous field, absent on the first step.
    pub acknowledged: Option<Acknowledgement>,
}

impl StepPrompt {
    /// Returns whether this prompt opens its flow.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.step == 0
    }
}

/// Outcome of capturing one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The flow moved on to its next field.
    Prompted(StepPrompt),
    /// Setup finished and the credentials were stored.
    SetupCompleted(CredentialRecord),
    /// Task creation finished with a remote issue.
    TaskCreated {
        /// Title the issue was created with.
        title: String,
        /// Created issue.
        issue: IssueRef,
    },
}

/// Drives a session through the setup and task flows.
///
/// The machine itself is stateless; every call receives the session it
/// operates on. The terminal step always leaves the session idle, whether
/// its action succeeded or not.
#[derive(Clone)]
pub struct DialogStateMachine<S, T, C>
where
    S: CredentialStore,
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    tracker: Arc<T>,
    clock: Arc<C>,
}

impl<S, T, C> DialogStateMachine<S, T, C>
where
    S: CredentialStore,
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    /// Creates a new state machine.
    #[must_use]
    pub const fn new(store: Arc<S>, tracker: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            store,
            tracker,
            clock,
        }
    }

    /// Starts `flow`, discarding anything the session held.
    ///
    /// Starting the task flow assumes the caller has checked that the user
    /// is configured.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::CorruptedSessionState`] when the flow
    /// definition has no fields; the session is left idle in that case.
    pub fn start(&self, session: &mut SessionState, flow: FlowKind) -> DialogResult<StepPrompt> {
        if let Some(previous) = session.active_flow() {
            debug!(%previous, %flow, "restarting over an unfinished flow");
        }
        let definition = flow.definition();
        let Some(first) = definition.field(0) else {
            session.reset();
            return Err(DialogError::CorruptedSessionState {
                flow,
                reason: "flow defines no fields".to_owned(),
            });
        };
        *session = SessionState::begin(flow);
        info!(%flow, fields = definition.field_count(), "flow started");
        Ok(StepPrompt {
            flow,
            step: 0,
            field: first,
            acknowledged: None,
        })
    }

    /// Captures `raw_value` for the current field.
    ///
    /// Moves to the next field, or on the last field runs the flow's
    /// terminal action and resets the session to idle.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::NoActiveFlow`] when the session is idle,
    /// [`DialogError::CorruptedSessionState`] when the session's step is not
    /// part of its flow, and the terminal action's error otherwise. Every
    /// error except `NoActiveFlow` leaves the session idle.
    pub async fn advance(
        &self,
        session: &mut SessionState,
        user_id: &UserId,
        raw_value: &str,
    ) -> DialogResult<Advance> {
        let (Some(flow), Some(step)) = (session.active_flow(), session.current_step()) else {
            return Err(DialogError::NoActiveFlow);
        };
        let definition = flow.definition();
        let Some(current) = definition.field(step) else {
            session.reset();
            return Err(DialogError::CorruptedSessionState {
                flow,
                reason: format!(
                    "step {step} is outside the {} collected fields",
                    definition.field_count()
                ),
            });
        };

        let value = current.transform.apply(raw_value);
        session.record(current.name, value.clone());
        debug!(%flow, step, field = current.name, "field captured");

        if let Some(next) = definition.field(step + 1) {
            session.move_to(step + 1);
            return Ok(Advance::Prompted(StepPrompt {
                flow,
                step: step + 1,
                field: next,
                acknowledged: Some(Acknowledgement {
                    field: current,
                    value,
                }),
            }));
        }

        let fields = session.finish();
        info!(%flow, "all fields collected, running terminal action");
        match flow {
            FlowKind::Setup => self
                .commit_setup(&fields, user_id)
                .await
                .map(Advance::SetupCompleted),
            FlowKind::Task => {
                let issue = self.commit_task(&fields, user_id).await?;
                let title = required(&fields, FlowKind::Task, field::TITLE)?;
                Ok(Advance::TaskCreated {
                    title: title.to_owned(),
                    issue,
                })
            }
        }
    }

    /// Stores the credentials collected by a setup flow.
    ///
    /// The record fully replaces whatever the user had stored before.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::IncompleteCredentials`] when a value is blank
    /// and [`DialogError::Persistence`] when the store write fails.
    pub async fn commit_setup(
        &self,
        fields: &CollectedFields,
        user_id: &UserId,
    ) -> DialogResult<CredentialRecord> {
        let credentials = CredentialFields {
            base_url: required(fields, FlowKind::Setup, field::DOMAIN)?.to_owned(),
            email: required(fields, FlowKind::Setup, field::EMAIL)?.to_owned(),
            api_token: ApiToken::new(required(fields, FlowKind::Setup, field::TOKEN)?),
            tracker_user_id: required(fields, FlowKind::Setup, field::TRACKER_USER_ID)?
                .to_owned(),
        };
        let record = CredentialRecord::configure(user_id.clone(), credentials, &*self.clock)?;
        self.store.put(&record).await?;
        info!(
            %user_id,
            base_url = record.base_url(),
            token = %record.api_token(),
            "tracker credentials stored"
        );
        Ok(record)
    }

    /// Creates the issue collected by a task flow.
    ///
    /// The issue is assigned to the tracker account stored during setup.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::ConfigurationMissing`] when the user has no
    /// configured record, [`DialogError::Persistence`] when the lookup fails
    /// and [`DialogError::RemoteCreation`] when the tracker call fails.
    pub async fn commit_task(
        &self,
        fields: &CollectedFields,
        user_id: &UserId,
    ) -> DialogResult<IssueRef> {
        let record = match self.store.get(user_id).await? {
            Some(record) if record.is_configured() => record,
            _ => {
                warn!(%user_id, "task completed without stored configuration");
                return Err(DialogError::ConfigurationMissing(user_id.clone()));
            }
        };

        let draft = IssueDraft::new(
            required(fields, FlowKind::Task, field::TITLE)?,
            required(fields, FlowKind::Task, field::DESCRIPTION)?,
            required(fields, FlowKind::Task, field::PROJECT_KEY)?,
            record.tracker_user_id(),
        );
        let issue = self
            .tracker
            .create_issue(&TrackerAccount::from(&record), &draft)
            .await?;
        info!(%user_id, issue = %issue, project = draft.project_key(), "issue created");
        Ok(issue)
    }
}

fn required<'a>(
    fields: &'a CollectedFields,
    flow: FlowKind,
    name: &'static str,
) -> DialogResult<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| DialogError::CorruptedSessionState {
            flow,
            reason: format!("missing collected field '{name}'"),
        })
}
