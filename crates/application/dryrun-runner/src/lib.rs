pub mod events;
pub mod runner;
pub mod tracker;

pub use events::{ProgressSnapshot, RunEvent, RunId};
pub use runner::{RunHandle, Runner};
pub use tracker::ProgressTracker;
