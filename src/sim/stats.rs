//! Run-level statistics tracking.

use std::fmt;

use crate::engine::Outcome;

/// Counters accumulated over one simulation run.
///
/// Plain integers, no atomics: an engine instance is mutated by exactly one
/// caller in strict sequence, so the driver that owns these counters is the
/// only writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Requests that found their page already resident.
    pub hits: u64,

    /// Requests that had to admit their page.
    pub faults: u64,

    /// Faults that displaced a resident page (a fault into an empty slot
    /// evicts nothing, so `evictions <= faults`).
    pub evictions: u64,

    /// Total requests processed.
    pub steps: u64,
}

impl SimStats {
    /// Create a fresh stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step's outcome into the counters.
    pub fn record<P>(&mut self, outcome: &Outcome<P>) {
        self.steps += 1;
        if outcome.hit {
            self.hits += 1;
        } else {
            self.faults += 1;
        }
        if outcome.evicted.is_some() {
            self.evictions += 1;
        }
    }

    /// Fraction of requests that hit (0.0 to 1.0); 0.0 before any steps.
    pub fn hit_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.hits as f64 / self.steps as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps: {} faults, {} hits ({:.0}% hit rate), {} evictions",
            self.steps,
            self.faults,
            self.hits,
            self.hit_rate() * 100.0,
            self.evictions
        )
    }
}
