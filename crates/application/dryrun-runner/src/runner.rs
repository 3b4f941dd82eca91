use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::Utc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use dryrun_core::{Outcome, OutcomeFn, Script, ScriptError};

use crate::events::{RunEvent, RunId};
use crate::tracker::ProgressTracker;

/// Handle to an in-flight run. Dropping it does not stop the run; call
/// [`RunHandle::cancel`] for that. A handle is single-use: retrying an
/// operation means starting a fresh run.
pub struct RunHandle {
    run_id: RunId,
    cancel: CancellationToken,
}

impl RunHandle {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Stops the run between steps. No progress or terminal result event is
    /// emitted after this; the run winds down with a single `Cancelled`
    /// notice.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

pub struct Runner;

impl Runner {
    /// Drives `script` on the current tokio runtime, invoking `outcome_fn`
    /// once after the last step. Events arrive on the returned receiver;
    /// dropping the receiver starves the worker, which then exits without
    /// leaving timers behind.
    pub fn start(script: Script, outcome_fn: OutcomeFn) -> (RunHandle, mpsc::Receiver<RunEvent>) {
        let run_id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(dryrun_config::EVENT_CHANNEL_CAPACITY);

        let token = cancel.clone();
        tokio::spawn(drive(run_id, script, outcome_fn, tx, token));

        (RunHandle { run_id, cancel }, rx)
    }

    /// Same as [`Runner::start`] but builds the script inline, rejecting
    /// invalid input synchronously before any event can be emitted.
    pub fn start_raw(
        name: impl Into<String>,
        steps: Vec<String>,
        total_duration_ms: u64,
        outcome_fn: OutcomeFn,
    ) -> Result<(RunHandle, mpsc::Receiver<RunEvent>), ScriptError> {
        let script = Script::new(name, steps, total_duration_ms)?;
        Ok(Self::start(script, outcome_fn))
    }
}

async fn drive(
    run_id: RunId,
    script: Script,
    outcome_fn: OutcomeFn,
    tx: mpsc::Sender<RunEvent>,
    token: CancellationToken,
) {
    let delay = script.step_delay();
    let mut tracker = ProgressTracker::new(script.steps().len());

    let started = RunEvent::Started {
        name: script.name().to_string(),
        total_steps: script.steps().len(),
        started_at: Utc::now(),
    };
    if tx.send(started).await.is_err() {
        return;
    }

    for label in script.steps() {
        tokio::select! {
            _ = token.cancelled() => {
                debug!(run = %run_id, "run cancelled mid-step");
                let _ = tx.send(RunEvent::Cancelled).await;
                return;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let snapshot = tracker.advance(label);
        debug!(
            run = %run_id,
            step = snapshot.step_index,
            percent = snapshot.percent,
            "step finished"
        );
        if tx.send(RunEvent::Progress { snapshot }).await.is_err() {
            return;
        }
    }

    // A cancel that lands after the final step but before the terminal
    // evaluation still wins: the caller asked for no result.
    if token.is_cancelled() {
        let _ = tx.send(RunEvent::Cancelled).await;
        return;
    }

    let outcome = match catch_unwind(AssertUnwindSafe(outcome_fn)) {
        Ok(outcome) => outcome,
        Err(panic) => Outcome::Failure {
            reason: panic_reason(panic),
        },
    };

    match outcome {
        Outcome::Success(payload) => {
            info!(run = %run_id, name = script.name(), "run completed");
            let _ = tx.send(RunEvent::Completed { payload }).await;
        }
        Outcome::Failure { reason } => {
            info!(run = %run_id, name = script.name(), %reason, "run failed");
            let _ = tx.send(RunEvent::Failed { reason }).await;
        }
    }
}

fn panic_reason(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "outcome evaluation panicked".to_string()
    }
}
