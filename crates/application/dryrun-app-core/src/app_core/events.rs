use dryrun_runner::{RunEvent, RunId};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// Forwarded runner event, tagged with the run it belongs to so the
    /// kernel can drop events from superseded runs.
    Run { run_id: RunId, ev: RunEvent },

    // User-visible errors
    UserError(String),
}
