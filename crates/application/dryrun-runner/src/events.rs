use std::time::Duration;

use chrono::{DateTime, Utc};
use dryrun_core::OutcomePayload;
use uuid::Uuid;

pub type RunId = Uuid;

/// One progress update: which step just finished and how far along the run is.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    pub step_index: usize,
    pub total_steps: usize,
    pub label: String,
    /// `round((step_index + 1) / total_steps * 100)`; monotonically
    /// non-decreasing within a run and exactly 100 on the last step.
    pub percent: u8,
    pub elapsed: Duration,
}

/// Events emitted by a single run, strictly in order. Every run ends with
/// exactly one of `Completed`, `Failed`, or `Cancelled`, and nothing follows
/// that.
#[derive(Debug, Clone)]
pub enum RunEvent {
    Started {
        name: String,
        total_steps: usize,
        started_at: DateTime<Utc>,
    },
    Progress {
        snapshot: ProgressSnapshot,
    },
    Completed {
        payload: OutcomePayload,
    },
    Failed {
        reason: String,
    },
    /// Teardown notice, not a result: a cancelled run produced neither
    /// success nor failure.
    Cancelled,
}

impl RunEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunEvent::Completed { .. } | RunEvent::Failed { .. } | RunEvent::Cancelled
        )
    }
}
