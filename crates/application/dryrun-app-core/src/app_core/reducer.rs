use dryrun_runner::RunEvent;

use crate::domain::AppState;
use crate::run::StepStatus;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::Run { run_id: _, ev } => apply_run_event(&mut state, ev),

        DomainEvent::UserError(msg) => {
            state.run.error = Some(msg);
        }
    }
    state
}

fn apply_run_event(state: &mut AppState, ev: RunEvent) {
    match ev {
        RunEvent::Started {
            name, total_steps, ..
        } => {
            let run = &mut state.run;
            run.operation = Some(name);
            run.step_labels = vec![String::new(); total_steps];
            run.step_statuses = vec![StepStatus::Pending; total_steps];
            run.percent = 0;
            run.outcome = None;
            run.error = None;
            if let Some(first) = run.step_statuses.first_mut() {
                *first = StepStatus::Running;
            }
        }

        RunEvent::Progress { snapshot } => {
            let run = &mut state.run;
            if let Some(label) = run.step_labels.get_mut(snapshot.step_index) {
                *label = snapshot.label;
            }
            if let Some(status) = run.step_statuses.get_mut(snapshot.step_index) {
                *status = StepStatus::Succeeded;
            }
            if let Some(next) = run.step_statuses.get_mut(snapshot.step_index + 1) {
                *next = StepStatus::Running;
            }
            run.percent = run.percent.max(snapshot.percent);
            run.elapsed = snapshot.elapsed;
        }

        RunEvent::Completed { payload } => {
            state.run.outcome = Some(payload);
        }

        RunEvent::Failed { reason } => {
            state.run.error = Some(reason);
            state.run.fail_running_steps();
        }

        RunEvent::Cancelled => {
            state.run.error = Some("Operation cancelled by user".into());
            state.run.fail_running_steps();
        }
    }
}
