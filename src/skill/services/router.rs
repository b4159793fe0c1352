//! Routes one platform turn to the dialog machine and back to speech.

use crate::credentials::{domain::UserId, ports::CredentialStore};
use crate::dialog::{
    domain::{FlowKind, SessionState},
    services::{Advance, DialogStateMachine},
};
use crate::skill::domain::{
    Intent, ResponseCatalog, SkillResponse, TurnError, TurnId, TurnOutcome, TurnRequest, slot,
};
use crate::tracker::ports::IssueTracker;
use mockable::Clock;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info_span, warn};

/// Entry point for every turn of the skill.
///
/// [`IntentRouter::handle`] never fails: errors are logged and turned into
/// spoken responses. Corrupted sessions and unexpected failures also reset
/// the session to idle.
pub struct IntentRouter<S, T, C>
where
    S: CredentialStore,
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    machine: DialogStateMachine<S, T, C>,
    catalog: ResponseCatalog,
}

impl<S, T, C> IntentRouter<S, T, C>
where
    S: CredentialStore,
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    /// Creates a router over the given adapters.
    #[must_use]
    pub fn new(store: Arc<S>, tracker: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            machine: DialogStateMachine::new(Arc::clone(&store), tracker, clock),
            store,
            catalog: ResponseCatalog::new(),
        }
    }

    /// Handles one turn and returns the response with the next session.
    pub async fn handle(&self, request: TurnRequest) -> TurnOutcome {
        let turn_id = TurnId::new();
        let span = info_span!(
            "turn",
            %turn_id,
            user_id = %request.user_id,
            intent = %request.intent,
        );
        self.dispatch(request).instrument(span).await
    }

    async fn dispatch(&self, request: TurnRequest) -> TurnOutcome {
        let mut session = request.session.clone();
        match self.route(&request, &mut session).await {
            Ok(response) => TurnOutcome { response, session },
            Err(failure) => {
                error!(kind = failure.kind(), error = %failure, "turn failed");
                if failure.resets_session() {
                    session.reset();
                }
                TurnOutcome {
                    response: self.catalog.failure(&failure),
                    session,
                }
            }
        }
    }

    async fn route(
        &self,
        request: &TurnRequest,
        session: &mut SessionState,
    ) -> Result<SkillResponse, TurnError> {
        match &request.intent {
            Intent::Launch => {
                let configured = self.configured_or_warn(&user(request)?).await;
                Ok(self.catalog.welcome(configured))
            }
            Intent::Help => {
                let configured = self.configured_or_warn(&user(request)?).await;
                Ok(self.catalog.help(configured))
            }
            Intent::SetupJira => self.start(session, FlowKind::Setup),
            Intent::CreateTask => {
                let user_id = user(request)?;
                let configured = self.store.is_configured(&user_id).await.map_err(|source| {
                    TurnError::Persistence {
                        flow: None,
                        reason: source.to_string(),
                    }
                })?;
                if configured {
                    self.start(session, FlowKind::Task)
                } else {
                    debug!("task creation refused before setup");
                    Ok(self.catalog.setup_required())
                }
            }
            Intent::CaptureSetupData => {
                self.capture(request, session, FlowKind::Setup, slot::SETUP_DATA)
                    .await
            }
            Intent::CaptureTaskData => {
                self.capture(request, session, FlowKind::Task, slot::TASK_DATA)
                    .await
            }
            Intent::CancelOrStop => {
                session.reset();
                Ok(self.catalog.goodbye())
            }
            Intent::SessionEnded => {
                session.reset();
                Ok(self.catalog.session_ended())
            }
            Intent::Unknown(name) => {
                debug!(intent = %name, "unrecognized intent");
                Ok(self.catalog.fallback())
            }
        }
    }

    fn start(&self, session: &mut SessionState, flow: FlowKind) -> Result<SkillResponse, TurnError> {
        let prompt = self
            .machine
            .start(session, flow)
            .map_err(|source| TurnError::from_dialog(source, flow))?;
        self.catalog.step_prompt(&prompt)
    }

    async fn capture(
        &self,
        request: &TurnRequest,
        session: &mut SessionState,
        flow: FlowKind,
        slot_name: &str,
    ) -> Result<SkillResponse, TurnError> {
        if session.active_flow() != Some(flow) {
            debug!(
                expected = %flow,
                active = ?session.active_flow(),
                "capture does not match the session"
            );
            return Ok(self.catalog.fallback());
        }
        let user_id = user(request)?;
        let advance = self
            .machine
            .advance(session, &user_id, request.slot(slot_name))
            .await
            .map_err(|source| TurnError::from_dialog(source, flow))?;
        match advance {
            Advance::Prompted(prompt) => self.catalog.step_prompt(&prompt),
            Advance::SetupCompleted(_) => Ok(self.catalog.setup_saved()),
            Advance::TaskCreated { title, issue } => {
                self.catalog.task_created(&title, issue.key())
            }
        }
    }

    async fn configured_or_warn(&self, user_id: &UserId) -> bool {
        self.store
            .is_configured(user_id)
            .await
            .unwrap_or_else(|source| {
                warn!(error = %source, "configuration lookup failed, assuming unconfigured");
                false
            })
    }
}

fn user(request: &TurnRequest) -> Result<UserId, TurnError> {
    UserId::new(request.user_id.as_str())
        .map_err(|source| TurnError::Unhandled(source.to_string()))
}
