use std::sync::Arc;
use tokio::sync::mpsc;

use dryrun_runner::RunId;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::orchestrator::RunOrchestrator;
use crate::ports::OutcomeSource;
use crate::run::RunState;

pub struct AppKernel<S> {
    pub store: AppStore,
    source: Arc<S>,
    runs: RunOrchestrator,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<S> AppKernel<S>
where
    S: OutcomeSource,
{
    pub fn new(store: AppStore, source: S) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let runs = RunOrchestrator::new(tx.clone());
        Self {
            store,
            source: Arc::new(source),
            runs,
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::StartOperation {
                operation,
                input,
                total_duration_ms,
            } => {
                let duration_ms = dryrun_config::clamp_duration_ms(
                    total_duration_ms.unwrap_or(dryrun_config::DEFAULT_TOTAL_DURATION_MS),
                );

                let script = match self.source.script(&operation, duration_ms) {
                    Ok(s) => s,
                    Err(e) => {
                        self.store.apply(DomainEvent::UserError(e.to_string()));
                        return;
                    }
                };
                let outcome_fn = match self.source.outcome_fn(&operation, input) {
                    Ok(f) => f,
                    Err(e) => {
                        self.store.apply(DomainEvent::UserError(e.to_string()));
                        return;
                    }
                };

                let run_id: RunId = uuid::Uuid::new_v4();
                self.store.with_state_mut(|state| {
                    state.run = RunState::idle();
                    state.run.run_id = Some(run_id);
                    state.run.operation = Some(operation.clone());
                });

                if let Err(e) = self.runs.start(script, outcome_fn, run_id) {
                    self.store
                        .apply(DomainEvent::UserError(format!("Failed to start run: {e}")));
                }
            }

            AppCommand::CancelOperation => self.runs.cancel(),

            AppCommand::Reset => {
                self.runs.cancel();
                self.store.with_state_mut(|state| state.run = RunState::idle());
            }
        }
    }

    /// Drains pending events into the store. Events tagged with a run id
    /// other than the active one are dropped; a superseded or torn-down run
    /// can never touch the state it no longer owns.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            if let DomainEvent::Run { run_id, .. } = &ev {
                let current = self.store.state().run.run_id;
                if current != Some(*run_id) {
                    continue;
                }
            }
            self.store.apply(ev);
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}
