//! When steps for intake conversation BDD scenarios.

use super::world::{IntakeWorld, USER};
use rstest_bdd_macros::when;
use voice_intake::{
    dialog::domain::FlowKind,
    skill::domain::{Intent, TurnRequest, slot},
};

#[when("the user asks to configure Jira")]
fn ask_to_configure(world: &mut IntakeWorld) {
    world.say(Intent::from_name("SetupJiraIntent"));
}

#[when("the user asks to create a task")]
fn ask_to_create_task(world: &mut IntakeWorld) {
    world.say(Intent::from_name("CreateTaskIntent"));
}

#[when(r#"the user answers "{answer}""#)]
fn answer_pending_question(
    world: &mut IntakeWorld,
    answer: String,
) -> Result<(), eyre::Report> {
    let (intent, slot_name) = match world.session.active_flow() {
        Some(FlowKind::Setup) => (Intent::CaptureSetupData, slot::SETUP_DATA),
        Some(FlowKind::Task) => (Intent::CaptureTaskData, slot::TASK_DATA),
        None => return Err(eyre::eyre!("no question is pending for \"{answer}\"")),
    };
    world.send(TurnRequest::new(intent, USER).with_slot(slot_name, answer));
    Ok(())
}

#[when("the user cancels")]
fn cancel(world: &mut IntakeWorld) {
    world.say(Intent::from_name("AMAZON.CancelIntent"));
}
