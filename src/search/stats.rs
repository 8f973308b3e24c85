//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected by the iterative search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes allocated into the tree.
    pub nodes_allocated: u32,

    /// Nodes popped from the work stack (a node is revisited once per
    /// expansion, so this exceeds the allocation count).
    pub visits: u32,

    /// Nodes that grew children.
    pub expansions: u32,

    /// Nodes resolved directly from a terminal base case.
    pub terminals: u32,

    /// Highest work-stack height observed.
    pub peak_stack: u32,

    /// Wall-clock time spent, in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Visits per second over the measured interval.
    #[must_use]
    pub fn visits_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.visits as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.visits, 0);
        assert_eq!(stats.nodes_allocated, 0);
        assert_eq!(stats.visits_per_second(), 0.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.visits = 10;
        stats.expansions = 4;

        stats.reset();

        assert_eq!(stats.visits, 0);
        assert_eq!(stats.expansions, 0);
    }

    #[test]
    fn test_visits_per_second() {
        let mut stats = SearchStats::new();
        stats.visits = 500;
        stats.time_us = 500_000;

        assert!((stats.visits_per_second() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.visits = 3;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.visits, 3);
    }
}
