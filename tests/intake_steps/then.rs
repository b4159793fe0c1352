//! Then steps for intake conversation BDD scenarios.

use super::world::{IntakeWorld, run_async, user_id};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use voice_intake::credentials::{domain::CredentialRecord, ports::CredentialStore};

fn stored_record(world: &IntakeWorld) -> Result<CredentialRecord, eyre::Report> {
    run_async(world.store.get(&user_id()?))
        .wrap_err("read credential store")?
        .ok_or_else(|| eyre::eyre!("expected a stored configuration"))
}

#[then(r#"the stored base URL is "{base_url}""#)]
fn stored_base_url(world: &IntakeWorld, base_url: String) -> Result<(), eyre::Report> {
    let record = stored_record(world)?;
    eyre::ensure!(
        record.base_url() == base_url,
        "expected base URL {base_url}, found {}",
        record.base_url()
    );
    eyre::ensure!(record.is_configured(), "record should be marked configured");
    Ok(())
}

#[then(r#"the stored tracker user id is "{tracker_user_id}""#)]
fn stored_tracker_user_id(
    world: &IntakeWorld,
    tracker_user_id: String,
) -> Result<(), eyre::Report> {
    let record = stored_record(world)?;
    eyre::ensure!(
        record.tracker_user_id() == tracker_user_id,
        "expected tracker user id {tracker_user_id}, found {}",
        record.tracker_user_id()
    );
    Ok(())
}

#[then("the session is idle")]
fn session_is_idle(world: &IntakeWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.session.is_idle(),
        "expected an idle session, found {:?}",
        world.session
    );
    Ok(())
}

#[then("the session is waiting for an answer")]
fn session_waits(world: &IntakeWorld) -> Result<(), eyre::Report> {
    let outcome = world.last()?;
    eyre::ensure!(
        !world.session.is_idle(),
        "expected a flow in progress"
    );
    eyre::ensure!(
        !outcome.response.session_ended,
        "expected the platform session to stay open"
    );
    Ok(())
}

#[then(r#"the response mentions "{fragment}""#)]
fn response_mentions(world: &IntakeWorld, fragment: String) -> Result<(), eyre::Report> {
    let spoken = &world.last()?.response.spoken_text;
    eyre::ensure!(
        spoken.contains(&fragment),
        "expected \"{fragment}\" in \"{spoken}\""
    );
    Ok(())
}

#[then(r#"an issue was filed in project "{project_key}" assigned to "{assignee}""#)]
fn issue_was_filed(
    world: &IntakeWorld,
    project_key: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let drafts = world.tracker.drafts().wrap_err("read recorded drafts")?;
    let [draft] = drafts.as_slice() else {
        return Err(eyre::eyre!("expected one filed issue, found {}", drafts.len()));
    };
    eyre::ensure!(
        draft.project_key() == project_key,
        "expected project {project_key}, found {}",
        draft.project_key()
    );
    eyre::ensure!(
        draft.assignee_id() == assignee,
        "expected assignee {assignee}, found {}",
        draft.assignee_id()
    );
    Ok(())
}

#[then("no issue was filed")]
fn no_issue_was_filed(world: &IntakeWorld) -> Result<(), eyre::Report> {
    let drafts = world.tracker.drafts().wrap_err("read recorded drafts")?;
    eyre::ensure!(drafts.is_empty(), "expected no filed issue, found {}", drafts.len());
    Ok(())
}
