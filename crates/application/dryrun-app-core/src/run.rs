use std::time::Duration;

use dryrun_core::OutcomePayload;
use dryrun_runner::RunId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// View-facing state of the one run a host owns at a time. Built purely by
/// the reducer from the run's event stream; nothing else writes to it.
#[derive(Debug, Clone)]
pub struct RunState {
    pub run_id: Option<RunId>,
    pub operation: Option<String>,

    pub step_labels: Vec<String>,
    pub step_statuses: Vec<StepStatus>,
    pub percent: u8,
    pub elapsed: Duration,

    pub outcome: Option<OutcomePayload>,
    pub error: Option<String>,
}

impl RunState {
    pub fn idle() -> Self {
        Self {
            run_id: None,
            operation: None,
            step_labels: Vec::new(),
            step_statuses: Vec::new(),
            percent: 0,
            elapsed: Duration::ZERO,
            outcome: None,
            error: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.step_statuses.contains(&StepStatus::Running)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some() || self.error.is_some()
    }

    /// Marks every still-running step as failed; used when a run ends in
    /// failure or is cancelled mid-step.
    pub fn fail_running_steps(&mut self) {
        for status in &mut self.step_statuses {
            if *status == StepStatus::Running {
                *status = StepStatus::Failed;
            }
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::idle()
    }
}
