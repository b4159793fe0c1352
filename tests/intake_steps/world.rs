//! Shared world state for intake conversation BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use voice_intake::{
    credentials::{adapters::InMemoryCredentialStore, domain::UserId},
    dialog::domain::SessionState,
    skill::{
        domain::{Intent, TurnOutcome, TurnRequest},
        services::IntentRouter,
    },
    tracker::adapters::RecordingIssueTracker,
};

/// Platform user driving every scenario.
pub const USER: &str = "amzn1.ask.account.BDD";

/// Router type used by the BDD world.
pub type TestRouter = IntentRouter<InMemoryCredentialStore, RecordingIssueTracker, DefaultClock>;

/// Scenario world for intake conversation behaviour tests.
pub struct IntakeWorld {
    pub store: Arc<InMemoryCredentialStore>,
    pub tracker: Arc<RecordingIssueTracker>,
    pub router: TestRouter,
    pub session: SessionState,
    pub last_outcome: Option<TurnOutcome>,
}

impl IntakeWorld {
    /// Creates a world with empty adapters and an idle session.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryCredentialStore::new());
        let tracker = Arc::new(RecordingIssueTracker::new());
        let router = IntentRouter::new(
            Arc::clone(&store),
            Arc::clone(&tracker),
            Arc::new(DefaultClock),
        );
        Self {
            store,
            tracker,
            router,
            session: SessionState::Idle,
            last_outcome: None,
        }
    }

    /// Sends one turn carrying the current session and keeps the outcome.
    pub fn send(&mut self, request: TurnRequest) {
        let outcome = run_async(
            self.router
                .handle(request.with_session(self.session.clone())),
        );
        self.session = outcome.session.clone();
        self.last_outcome = Some(outcome);
    }

    /// Sends an intent without slots.
    pub fn say(&mut self, intent: Intent) {
        self.send(TurnRequest::new(intent, USER));
    }

    /// Returns the outcome of the most recent turn.
    pub fn last(&self) -> Result<&TurnOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no turn has been sent in this scenario"))
    }
}

impl Default for IntakeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the scenario user's identifier.
pub fn user_id() -> Result<UserId, eyre::Report> {
    UserId::new(USER).map_err(|err| eyre::eyre!("invalid scenario user: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IntakeWorld {
    IntakeWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
