use anyhow::Context;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use dryrun_core::{OutcomeFn, Script};
use dryrun_runner::{RunEvent, RunId, Runner};

use crate::app_core::DomainEvent;

/// Owns the worker side of at most one run: spawns it on the shared runtime
/// and forwards its events into the kernel channel, tagged with the kernel's
/// run id. Starting a new run cancels the previous one first.
pub struct RunOrchestrator {
    tx: mpsc::Sender<DomainEvent>,
    cancel: Option<CancellationToken>,
}

impl RunOrchestrator {
    pub fn new(tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { tx, cancel: None }
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    pub fn start(
        &mut self,
        script: Script,
        outcome_fn: OutcomeFn,
        run_id: RunId,
    ) -> anyhow::Result<()> {
        self.cancel();
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let tx = self.tx.clone();

        std::thread::Builder::new()
            .name("dryrun-run".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::Run {
                            run_id,
                            ev: RunEvent::Failed {
                                reason: format!("Failed to start async runtime: {e}"),
                            },
                        });
                        return;
                    }
                };

                rt.block_on(async move {
                    let (handle, mut events) = Runner::start(script, outcome_fn);
                    let mut cancel_forwarded = false;

                    loop {
                        tokio::select! {
                            _ = token.cancelled(), if !cancel_forwarded => {
                                handle.cancel();
                                cancel_forwarded = true;
                            }
                            maybe_ev = events.recv() => match maybe_ev {
                                Some(ev) => {
                                    let terminal = ev.is_terminal();
                                    let _ = tx.send(DomainEvent::Run { run_id, ev }).await;
                                    if terminal {
                                        break;
                                    }
                                }
                                None => break,
                            }
                        }
                    }
                });
            })
            .context("Failed to spawn run worker thread")?;

        Ok(())
    }
}
