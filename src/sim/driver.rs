//! Simulation driver - feeds an access trace into one engine.
//!
//! The [`Driver`] is deliberately thin: it owns a single [`Engine`], pushes a
//! finite, fully-known page sequence through it one request at a time, hands
//! each [`Outcome`] to an observer for rendering, and folds the results into
//! a [`RunReport`]. All formatting, pacing, and user interaction live in the
//! observer, never here.

use std::collections::HashMap;

use crate::common::Result;
use crate::engine::{Engine, EngineKind, Outcome, Page};
use crate::sim::SimStats;

/// Aggregate result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport<P> {
    /// The policy that produced this report.
    pub kind: EngineKind,

    /// Hit/fault/eviction totals over the run.
    pub stats: SimStats,

    /// Cache contents after the final step (`None` = empty slot).
    pub final_snapshot: Vec<Option<P>>,

    /// Final access counts of the resident pages; `Some` only for LFU runs.
    pub frequencies: Option<HashMap<P, u64>>,
}

/// Drives one eviction engine over an access trace.
///
/// One engine is active per run. The driver owns its engine and stats for the
/// whole run; dropping the driver discards all simulation state, so nothing
/// leaks across runs.
#[derive(Debug)]
pub struct Driver<P> {
    engine: Engine<P>,
    stats: SimStats,
}

impl<P: Page> Driver<P> {
    /// Create a driver around a freshly constructed engine.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(kind: EngineKind, capacity: usize) -> Result<Self> {
        Ok(Self {
            engine: Engine::new(kind, capacity)?,
            stats: SimStats::new(),
        })
    }

    /// Wrap an existing engine (useful when the caller built it directly).
    pub fn with_engine(engine: Engine<P>) -> Self {
        Self {
            engine,
            stats: SimStats::new(),
        }
    }

    /// Process a single request, updating run statistics.
    pub fn step(&mut self, page: P) -> Outcome<P> {
        let outcome = self.engine.process(page);
        self.stats.record(&outcome);
        outcome
    }

    /// Run the whole trace, invoking `observe` after every processed request
    /// with the zero-based step index, the requested page, and its outcome.
    ///
    /// The loop is bounded: exactly `pages.len()` steps, then the report.
    pub fn run<F>(mut self, pages: &[P], mut observe: F) -> RunReport<P>
    where
        F: FnMut(usize, &P, &Outcome<P>),
    {
        for (index, page) in pages.iter().enumerate() {
            let outcome = self.step(page.clone());
            observe(index, page, &outcome);
        }
        self.into_report()
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The engine being driven.
    pub fn engine(&self) -> &Engine<P> {
        &self.engine
    }

    /// Finish the run, consuming the driver.
    pub fn into_report(self) -> RunReport<P> {
        RunReport {
            kind: self.engine.kind(),
            stats: self.stats,
            final_snapshot: self.engine.snapshot(),
            frequencies: self.engine.frequencies().cloned(),
        }
    }
}
