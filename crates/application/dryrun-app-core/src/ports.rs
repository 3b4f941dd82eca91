use dryrun_core::{presets, OutcomeFn, Script};

/// Resolves an operation name to its script and terminal evaluation. Hosts
/// plug their own source to replace the canned preset data.
pub trait OutcomeSource: Send + Sync + 'static {
    fn script(&self, operation: &str, total_duration_ms: u64) -> anyhow::Result<Script>;
    fn outcome_fn(&self, operation: &str, input: Option<String>) -> anyhow::Result<OutcomeFn>;
}

/// Catalog-backed source: operations resolve against the built-in presets.
pub struct PresetSource;

impl OutcomeSource for PresetSource {
    fn script(&self, operation: &str, total_duration_ms: u64) -> anyhow::Result<Script> {
        presets::script(operation, total_duration_ms)
            .ok_or_else(|| anyhow::anyhow!("Unknown operation '{operation}'"))
    }

    fn outcome_fn(&self, operation: &str, input: Option<String>) -> anyhow::Result<OutcomeFn> {
        presets::outcome_fn(operation, input)
            .ok_or_else(|| anyhow::anyhow!("Unknown operation '{operation}'"))
    }
}
