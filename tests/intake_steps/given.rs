//! Given steps for intake conversation BDD scenarios.

use super::world::{IntakeWorld, run_async, user_id};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use voice_intake::credentials::{
    domain::{ApiToken, CredentialFields, CredentialRecord},
    ports::CredentialStore,
};

#[given("a user without a stored configuration")]
fn user_without_configuration(world: &mut IntakeWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.get(&user_id()?)).wrap_err("read credential store")?;
    eyre::ensure!(stored.is_none(), "expected no stored configuration");
    Ok(())
}

#[given("a user with a stored configuration")]
fn user_with_configuration(world: &mut IntakeWorld) -> Result<(), eyre::Report> {
    let record = CredentialRecord::configure(
        user_id()?,
        CredentialFields {
            base_url: "https://acme.atlassian.net".to_owned(),
            email: "a@acme.com".to_owned(),
            api_token: ApiToken::new("tok123"),
            tracker_user_id: "712020".to_owned(),
        },
        &DefaultClock,
    )
    .wrap_err("configure scenario record")?;
    run_async(world.store.put(&record)).wrap_err("store scenario record")?;
    Ok(())
}

#[given(r#"the tracker rejects issues with "{reason}""#)]
fn tracker_rejects_issues(world: &mut IntakeWorld, reason: String) -> Result<(), eyre::Report> {
    world
        .tracker
        .fail_with(reason)
        .wrap_err("configure tracker failure")
}
