#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Start a named operation; replaces any run in flight.
    StartOperation {
        operation: String,
        input: Option<String>,
        total_duration_ms: Option<u64>,
    },

    /// Stop the current run between steps.
    CancelOperation,

    /// Cancel and return to the idle state (view teardown / re-trigger).
    Reset,
}
