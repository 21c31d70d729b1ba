//! Search run statistics.

use serde::{Deserialize, Serialize};

/// Counters gathered over one `Search::run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Branches popped off the worklist.
    pub branches: u64,
    /// Branches that exhausted their choice stack.
    pub terminals: u64,
    /// Terminals that met the goal.
    pub wins: u64,
    /// Branches dropped after a resolution error.
    pub discarded: u64,
    /// High-water mark of the worklist.
    pub peak_worklist: usize,
    /// Wall-clock time of the run, microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Branches expanded per second, or 0 for an instant run.
    #[must_use]
    pub fn branches_per_sec(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.branches as f64 / (self.time_us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branches_per_sec() {
        let stats = SearchStats { branches: 500, time_us: 250_000, ..Default::default() };
        assert!((stats.branches_per_sec() - 2000.0).abs() < 1e-9);

        let instant = SearchStats::default();
        assert_eq!(instant.branches_per_sec(), 0.0);
    }
}
