use std::time::Instant;

use crate::events::ProgressSnapshot;

/// Per-run progress bookkeeping: step cursor plus the wall clock. Each run
/// owns its own tracker exclusively; nothing is shared across runs.
pub struct ProgressTracker {
    started: Instant,
    total_steps: usize,
    cursor: usize,
}

impl ProgressTracker {
    pub fn new(total_steps: usize) -> Self {
        Self {
            started: Instant::now(),
            total_steps,
            cursor: 0,
        }
    }

    /// Records that the next step finished and returns its snapshot.
    pub fn advance(&mut self, label: &str) -> ProgressSnapshot {
        let step_index = self.cursor;
        self.cursor += 1;

        let percent = (((step_index + 1) as f64 / self.total_steps as f64) * 100.0).round() as u8;

        ProgressSnapshot {
            step_index,
            total_steps: self.total_steps,
            label: label.to_string(),
            percent,
            elapsed: self.started.elapsed(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_steps_round_to_33_67_100() {
        let mut t = ProgressTracker::new(3);
        assert_eq!(t.advance("a").percent, 33);
        assert_eq!(t.advance("b").percent, 67);
        assert_eq!(t.advance("c").percent, 100);
        assert!(t.is_exhausted());
    }

    #[test]
    fn percent_is_monotonic_and_ends_at_100() {
        for n in 1..=12 {
            let mut t = ProgressTracker::new(n);
            let mut last = 0u8;
            for i in 0..n {
                let snap = t.advance("step");
                assert!(snap.percent >= last, "dip at step {i} of {n}");
                last = snap.percent;
            }
            assert_eq!(last, 100);
        }
    }
}
