use std::time::Duration;

use dryrun_app_core::app_core::{reduce, DomainEvent};
use dryrun_app_core::domain::AppState;
use dryrun_app_core::run::StepStatus;
use dryrun_core::Outcome;
use dryrun_runner::{ProgressSnapshot, RunEvent, RunId};

fn run_ev(run_id: RunId, ev: RunEvent) -> DomainEvent {
    DomainEvent::Run { run_id, ev }
}

fn started(run_id: RunId, total_steps: usize) -> DomainEvent {
    run_ev(
        run_id,
        RunEvent::Started {
            name: "security-scan".into(),
            total_steps,
            started_at: chrono::Utc::now(),
        },
    )
}

fn progress(run_id: RunId, step_index: usize, total_steps: usize, percent: u8) -> DomainEvent {
    run_ev(
        run_id,
        RunEvent::Progress {
            snapshot: ProgressSnapshot {
                step_index,
                total_steps,
                label: format!("step {step_index}"),
                percent,
                elapsed: Duration::from_millis(10),
            },
        },
    )
}

#[test]
fn started_initializes_steps_with_first_running() {
    let run_id = uuid::Uuid::new_v4();
    let state = reduce(AppState::default(), started(run_id, 3));

    assert_eq!(state.run.step_statuses.len(), 3);
    assert_eq!(state.run.step_statuses[0], StepStatus::Running);
    assert_eq!(state.run.step_statuses[1], StepStatus::Pending);
    assert_eq!(state.run.percent, 0);
    assert!(!state.run.is_terminal());
}

#[test]
fn progress_marks_steps_and_percent_never_decreases() {
    let run_id = uuid::Uuid::new_v4();
    let mut state = reduce(AppState::default(), started(run_id, 3));

    state = reduce(state, progress(run_id, 0, 3, 33));
    assert_eq!(state.run.step_statuses[0], StepStatus::Succeeded);
    assert_eq!(state.run.step_statuses[1], StepStatus::Running);
    assert_eq!(state.run.percent, 33);

    // A replayed lower percent must not pull the bar backwards.
    state = reduce(state, progress(run_id, 1, 3, 10));
    assert_eq!(state.run.percent, 33);

    state = reduce(state, progress(run_id, 2, 3, 100));
    assert_eq!(state.run.percent, 100);
    assert_eq!(state.run.step_statuses[2], StepStatus::Succeeded);
}

#[test]
fn completed_stores_the_payload() {
    let run_id = uuid::Uuid::new_v4();
    let mut state = reduce(AppState::default(), started(run_id, 1));
    state = reduce(state, progress(run_id, 0, 1, 100));

    let payload = match Outcome::success([("token", "ETHG")]) {
        Outcome::Success(p) => p,
        Outcome::Failure { .. } => unreachable!(),
    };
    state = reduce(state, run_ev(run_id, RunEvent::Completed { payload }));

    assert!(state.run.is_terminal());
    assert_eq!(
        state
            .run
            .outcome
            .as_ref()
            .and_then(|p| p.get("token"))
            .map(String::as_str),
        Some("ETHG")
    );
    assert!(state.run.error.is_none());
}

#[test]
fn failed_marks_running_steps_failed() {
    let run_id = uuid::Uuid::new_v4();
    let mut state = reduce(AppState::default(), started(run_id, 3));
    state = reduce(state, progress(run_id, 0, 3, 33));

    state = reduce(
        state,
        run_ev(
            run_id,
            RunEvent::Failed {
                reason: "bad data".into(),
            },
        ),
    );

    assert_eq!(state.run.error.as_deref(), Some("bad data"));
    assert_eq!(state.run.step_statuses[1], StepStatus::Failed);
    assert_eq!(state.run.step_statuses[0], StepStatus::Succeeded);
}

#[test]
fn cancelled_sets_message_and_fails_running_step() {
    let run_id = uuid::Uuid::new_v4();
    let mut state = reduce(AppState::default(), started(run_id, 2));
    state = reduce(state, progress(run_id, 0, 2, 50));

    state = reduce(state, run_ev(run_id, RunEvent::Cancelled));

    assert_eq!(
        state.run.error.as_deref(),
        Some("Operation cancelled by user")
    );
    assert_eq!(state.run.step_statuses[1], StepStatus::Failed);
    assert!(state.run.outcome.is_none());
}
