//! Runs skill turns read as JSON lines from standard input.
//!
//! Usage:
//!
//! ```text
//! intake_turn [config-path]
//! ```
//!
//! Each input line is a `TurnRequest` and produces one `TurnOutcome` line on
//! standard output. A representative exchange is:
//!
//! ```json
//! {"intent": "SetupJiraIntent", "user_id": "amzn1.ask.account.X"}
//! ```
//!
//! ```json
//! {"response": {"spoken_text": "Vamos configurar ...", "reprompt_text": "Qual é o domínio do seu Jira?", "session_ended": false}, "session": {"state": "in_setup_flow", "step": 0, "fields": {}}}
//! ```
//!
//! The optional JSON file at `config-path` is described by `IntakeConfig`;
//! `INTAKE_*` environment variables override it. Logs go to standard error.

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voice_intake::config::{ConfigError, IntakeConfig};
use voice_intake::credentials::{adapters::FileCredentialStore, ports::CredentialStoreError};
use voice_intake::dialog::domain::SessionState;
use voice_intake::skill::domain::{ResponseCatalog, TurnError, TurnOutcome, TurnRequest};
use voice_intake::skill::services::IntentRouter;
use voice_intake::tracker::{adapters::JiraCloudClient, ports::IssueTrackerError};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the turn loop.
#[derive(Debug, Error)]
enum IntakeError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid log filter: {0}")]
    LogFilter(String),
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
    #[error("failed to open credential store: {0}")]
    Store(#[source] CredentialStoreError),
    #[error("failed to build tracker client: {0}")]
    Tracker(#[source] IssueTrackerError),
    #[error("failed to encode turn outcome: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("standard stream failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), IntakeError> {
    let config_path = config_path_arg()?;
    let config = IntakeConfig::from_environment(config_path.as_deref())?;
    init_logging(&config.log_filter)?;

    let store = FileCredentialStore::open(&config.credential_store_dir)
        .map_err(IntakeError::Store)?;
    let tracker = JiraCloudClient::new(config.request_timeout()).map_err(IntakeError::Tracker)?;
    let router = IntentRouter::new(Arc::new(store), Arc::new(tracker), Arc::new(DefaultClock));
    info!(
        store = %config.credential_store_dir,
        timeout_secs = config.request_timeout_secs,
        "intake ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let outcome = match serde_json::from_str::<TurnRequest>(&line) {
            Ok(request) => router.handle(request).await,
            Err(err) => {
                warn!(error = %err, "discarding unreadable turn request");
                unreadable_request(&err)
            }
        };
        let mut encoded = serde_json::to_vec(&outcome).map_err(IntakeError::Encode)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }
    info!("input closed");
    Ok(())
}

fn config_path_arg() -> Result<Option<Utf8PathBuf>, IntakeError> {
    let mut args = std::env::args_os().skip(1);
    let path = args
        .next()
        .map(|arg_os| {
            arg_os
                .into_string()
                .map(Utf8PathBuf::from)
                .map_err(|_| IntakeError::InvalidArgs("argument is not valid UTF-8".into()))
        })
        .transpose()?;
    if args.next().is_some() {
        return Err(IntakeError::InvalidArgs(
            "expected at most one argument: [config-path]".into(),
        ));
    }
    Ok(path)
}

fn init_logging(filter: &str) -> Result<(), IntakeError> {
    let env_filter =
        EnvFilter::try_new(filter).map_err(|err| IntakeError::LogFilter(err.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| IntakeError::Logging(err.to_string()))
}

fn unreadable_request(err: &serde_json::Error) -> TurnOutcome {
    let failure = TurnError::Unhandled(format!("unreadable turn request: {err}"));
    TurnOutcome {
        response: ResponseCatalog::new().failure(&failure),
        session: SessionState::Idle,
    }
}
