//! In-memory integration tests for sessions carried as JSON between turns.

use super::helpers::{Intake, SETUP_ANSWERS, USER, answer_request, intake};
use rstest::rstest;
use voice_intake::{
    credentials::{domain::UserId, ports::CredentialStore},
    skill::domain::{Intent, TurnOutcome, TurnRequest},
};

fn through_json(outcome: &TurnOutcome) -> eyre::Result<TurnOutcome> {
    let encoded = serde_json::to_string(outcome)?;
    Ok(serde_json::from_str(&encoded)?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn setup_survives_serialised_sessions(intake: Intake) -> eyre::Result<()> {
    let mut outcome = through_json(
        &intake
            .router
            .handle(TurnRequest::new(Intent::SetupJira, USER))
            .await,
    )?;
    for value in SETUP_ANSWERS {
        let request = answer_request(&outcome.session, value)?;
        outcome = through_json(&intake.router.handle(request).await)?;
    }

    eyre::ensure!(outcome.session.is_idle(), "setup should end idle");
    let configured = intake.store.is_configured(&UserId::new(USER)?).await?;
    eyre::ensure!(configured, "user should be configured");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn platform_json_drives_a_turn(intake: Intake) -> eyre::Result<()> {
    let json = format!(
        r#"{{
            "intent": "CaptureSetupDataIntent",
            "slots": {{"setupData": "acme ponto atlassian ponto net"}},
            "user_id": "{USER}",
            "session": {{"state": "in_setup_flow", "step": 0, "fields": {{}}}}
        }}"#
    );
    let request: TurnRequest = serde_json::from_str(&json)?;

    let outcome = intake.router.handle(request).await;
    let encoded = serde_json::to_value(&outcome)?;

    eyre::ensure!(
        encoded["session"]["fields"]["domain"] == "https://acme.atlassian.net",
        "unexpected session: {}",
        encoded["session"]
    );
    eyre::ensure!(encoded["session"]["step"] == 1, "expected step 1");
    eyre::ensure!(
        encoded["response"]["session_ended"] == false,
        "session should stay open"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tampered_step_is_recovered(intake: Intake) -> eyre::Result<()> {
    let json = format!(
        r#"{{
            "intent": "CaptureTaskDataIntent",
            "slots": {{"data": "Fix bug"}},
            "user_id": "{USER}",
            "session": {{"state": "in_task_flow", "step": 7}}
        }}"#
    );
    let request: TurnRequest = serde_json::from_str(&json)?;

    let outcome = intake.router.handle(request).await;

    eyre::ensure!(outcome.session.is_idle(), "corrupted session should reset");
    eyre::ensure!(
        outcome.response.spoken_text.contains("Vamos começar novamente"),
        "unexpected speech: {}",
        outcome.response.spoken_text
    );
    Ok(())
}
