use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script needs at least one step")]
    EmptySteps,
    #[error("total duration must be positive")]
    ZeroDuration,
}

/// A named simulated operation: the ordered status lines a run walks through
/// and the total time the walk should take.
///
/// Construction goes through [`Script::new`] so every script in circulation is
/// runnable: at least one step, positive duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    name: String,
    steps: Vec<String>,
    total_duration_ms: u64,
}

impl Script {
    pub fn new(
        name: impl Into<String>,
        steps: Vec<String>,
        total_duration_ms: u64,
    ) -> Result<Self, ScriptError> {
        if steps.is_empty() {
            return Err(ScriptError::EmptySteps);
        }
        if total_duration_ms == 0 {
            return Err(ScriptError::ZeroDuration);
        }
        Ok(Self {
            name: name.into(),
            steps,
            total_duration_ms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.total_duration_ms)
    }

    /// Uniform per-step delay. Integer division may shave a few milliseconds
    /// off the total; callers treat the total as approximate.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.total_duration_ms / self.steps.len() as u64)
    }
}
