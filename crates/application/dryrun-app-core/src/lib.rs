pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod orchestrator;
pub mod ports;
pub mod run;

pub use app_core::*;
pub use domain::AppState;
pub use kernel::AppKernel;
pub use ports::{OutcomeSource, PresetSource};
pub use run::{RunState, StepStatus};
