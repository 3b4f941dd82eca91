//! Central configuration constants for run timing and channel sizing.

/// Default total duration of a simulated run when the caller gives none.
pub const DEFAULT_TOTAL_DURATION_MS: u64 = 3_000;

/// Minimum allowed total duration for a run.
pub const MIN_TOTAL_DURATION_MS: u64 = 100;

/// Maximum allowed total duration for a run. 2 minutes.
pub const MAX_TOTAL_DURATION_MS: u64 = 120_000;

/// Capacity of the per-run event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Convenience function to clamp a requested duration into allowed range.
pub fn clamp_duration_ms(v: u64) -> u64 {
    v.clamp(MIN_TOTAL_DURATION_MS, MAX_TOTAL_DURATION_MS)
}
