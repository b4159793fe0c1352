//! In-memory integration tests for complete conversations.

use super::helpers::{Intake, SETUP_ANSWERS, TASK_ANSWERS, USER, converse, intake};
use rstest::rstest;
use voice_intake::{
    credentials::{domain::UserId, ports::CredentialStore},
    dialog::domain::FlowKind,
    skill::domain::{Intent, TurnRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_answer_but_the_last_keeps_the_flow_open(intake: Intake) -> eyre::Result<()> {
    let outcomes = converse(&intake.router, Intent::SetupJira, &SETUP_ANSWERS).await?;

    let (last, open) = outcomes
        .split_last()
        .ok_or_else(|| eyre::eyre!("expected turns"))?;
    for (step, outcome) in open.iter().enumerate() {
        eyre::ensure!(
            outcome.session.active_flow() == Some(FlowKind::Setup),
            "turn {step} left the setup flow"
        );
        eyre::ensure!(
            outcome.session.current_step() == Some(step),
            "turn {step} is at step {:?}",
            outcome.session.current_step()
        );
        eyre::ensure!(!outcome.response.session_ended, "turn {step} closed the session");
    }
    eyre::ensure!(last.session.is_idle(), "setup should end idle");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn setup_then_task_files_an_assigned_issue(intake: Intake) -> eyre::Result<()> {
    converse(&intake.router, Intent::SetupJira, &SETUP_ANSWERS).await?;
    let outcomes = converse(&intake.router, Intent::CreateTask, &TASK_ANSWERS).await?;

    let last = outcomes
        .last()
        .ok_or_else(|| eyre::eyre!("expected turns"))?;
    eyre::ensure!(last.session.is_idle(), "task flow should end idle");
    eyre::ensure!(
        last.response.card_title.as_deref() == Some("Task Criada"),
        "missing task card"
    );

    let drafts = intake.tracker.drafts()?;
    let draft = drafts
        .first()
        .ok_or_else(|| eyre::eyre!("expected a filed issue"))?;
    eyre::ensure!(draft.title() == "Fix bug", "wrong title {}", draft.title());
    eyre::ensure!(draft.description() == "NPE on save", "wrong description");
    eyre::ensure!(draft.project_key() == "DEV", "wrong project {}", draft.project_key());
    eyre::ensure!(draft.assignee_id() == "712020", "wrong assignee");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeating_setup_overwrites_the_record(intake: Intake) -> eyre::Result<()> {
    converse(&intake.router, Intent::SetupJira, &SETUP_ANSWERS).await?;
    converse(
        &intake.router,
        Intent::SetupJira,
        &["globex ponto atlassian ponto net", "b@globex.com", "tok456", "99"],
    )
    .await?;

    let record = intake
        .store
        .get(&UserId::new(USER)?)
        .await?
        .ok_or_else(|| eyre::eyre!("expected a stored record"))?;
    eyre::ensure!(
        record.base_url() == "https://globex.atlassian.net",
        "record was not replaced: {}",
        record.base_url()
    );
    eyre::ensure!(intake.store.record_count()? == 1, "expected one record");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_creation_discards_the_collected_task(intake: Intake) -> eyre::Result<()> {
    converse(&intake.router, Intent::SetupJira, &SETUP_ANSWERS).await?;
    intake.tracker.fail_with("connection reset")?;

    let outcomes = converse(&intake.router, Intent::CreateTask, &TASK_ANSWERS).await?;
    let last = outcomes
        .last()
        .ok_or_else(|| eyre::eyre!("expected turns"))?;
    eyre::ensure!(
        last.response.spoken_text
            == "Desculpe, houve um erro ao criar a task: connection reset",
        "unexpected speech: {}",
        last.response.spoken_text
    );
    eyre::ensure!(
        last.session.collected_fields().is_none(),
        "collected values should be discarded"
    );

    let retry = intake
        .router
        .handle(TurnRequest::new(Intent::CreateTask, USER))
        .await;
    eyre::ensure!(
        retry.session.current_step() == Some(0),
        "a new task starts from the first question"
    );
    Ok(())
}
