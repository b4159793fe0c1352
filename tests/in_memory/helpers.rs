//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use voice_intake::{
    credentials::adapters::InMemoryCredentialStore,
    dialog::domain::{FlowKind, SessionState},
    skill::{
        domain::{Intent, TurnOutcome, TurnRequest, slot},
        services::IntentRouter,
    },
    tracker::adapters::RecordingIssueTracker,
};

/// Platform user used by the integration tests.
pub const USER: &str = "amzn1.ask.account.INTEGRATION";

/// Answers completing the setup flow.
pub const SETUP_ANSWERS: [&str; 4] = [
    "acme ponto atlassian ponto net",
    "a@acme.com",
    "tok123",
    "712020",
];

/// Answers completing the task flow.
pub const TASK_ANSWERS: [&str; 3] = ["Fix bug", "NPE on save", "dev"];

/// Router type wired to in-memory adapters.
pub type MemoryRouter = IntentRouter<InMemoryCredentialStore, RecordingIssueTracker, DefaultClock>;

/// Router together with handles on its adapters.
pub struct Intake {
    pub store: Arc<InMemoryCredentialStore>,
    pub tracker: Arc<RecordingIssueTracker>,
    pub router: MemoryRouter,
}

/// Provides a router over fresh in-memory adapters.
#[fixture]
pub fn intake() -> Intake {
    let store = Arc::new(InMemoryCredentialStore::new());
    let tracker = Arc::new(RecordingIssueTracker::new());
    let router = IntentRouter::new(
        Arc::clone(&store),
        Arc::clone(&tracker),
        Arc::new(DefaultClock),
    );
    Intake {
        store,
        tracker,
        router,
    }
}

/// Builds the capture request answering the session's pending question.
///
/// # Errors
///
/// Returns an error when the session has no flow in progress.
pub fn answer_request(
    session: &SessionState,
    value: &str,
) -> Result<TurnRequest, eyre::Report> {
    let (intent, slot_name) = match session.active_flow() {
        Some(FlowKind::Setup) => (Intent::CaptureSetupData, slot::SETUP_DATA),
        Some(FlowKind::Task) => (Intent::CaptureTaskData, slot::TASK_DATA),
        None => return Err(eyre::eyre!("no question pending for {value}")),
    };
    Ok(TurnRequest::new(intent, USER)
        .with_slot(slot_name, value)
        .with_session(session.clone()))
}

/// Starts `intent` and answers every question in order.
///
/// # Errors
///
/// Returns an error when the conversation ends before all answers are used.
pub async fn converse(
    router: &MemoryRouter,
    intent: Intent,
    answers: &[&str],
) -> Result<Vec<TurnOutcome>, eyre::Report> {
    let mut outcomes = vec![router.handle(TurnRequest::new(intent, USER)).await];
    for value in answers {
        let session = outcomes
            .last()
            .map(|outcome| outcome.session.clone())
            .ok_or_else(|| eyre::eyre!("conversation has no turns"))?;
        outcomes.push(router.handle(answer_request(&session, value)?).await);
    }
    Ok(outcomes)
}
