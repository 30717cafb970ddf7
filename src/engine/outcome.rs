//! Per-step result produced by every eviction engine.

/// The result of processing a single page request.
///
/// An `Outcome` is produced fresh on every [`process`](super::Engine::process)
/// call and handed to the caller; engines never retain one. The snapshot is a
/// full copy of the cache contents so the presentation layer can render it
/// without reaching back into engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<P> {
    /// Whether the requested page was already resident.
    pub hit: bool,

    /// The page evicted to make room, if the fault landed on a full cache.
    ///
    /// `None` on hits and on faults that filled a previously empty slot.
    pub evicted: Option<P>,

    /// Cache contents after this step, in the engine's display order.
    ///
    /// Always exactly `capacity` elements; `None` marks an empty slot.
    pub snapshot: Vec<Option<P>>,

    /// Total hits recorded by this engine so far, this step included.
    pub hits_so_far: u64,

    /// Total faults recorded by this engine so far, this step included.
    pub faults_so_far: u64,
}

impl<P> Outcome<P> {
    /// Whether this step was a fault (the complement of `hit`).
    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.hit
    }

    /// Number of steps this engine has processed, derived from the counters.
    #[inline]
    pub fn steps_so_far(&self) -> u64 {
        self.hits_so_far + self.faults_so_far
    }

    /// Number of pages currently resident in the snapshot.
    pub fn resident_count(&self) -> usize {
        self.snapshot.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Outcome<u32> {
        Outcome {
            hit: false,
            evicted: Some(8),
            snapshot: vec![Some(2), Some(9), None],
            hits_so_far: 1,
            faults_so_far: 4,
        }
    }

    #[test]
    fn test_is_fault() {
        let outcome = sample();
        assert!(outcome.is_fault());
        assert!(!Outcome { hit: true, ..sample() }.is_fault());
    }

    #[test]
    fn test_steps_so_far() {
        assert_eq!(sample().steps_so_far(), 5);
    }

    #[test]
    fn test_resident_count_ignores_empty_slots() {
        assert_eq!(sample().resident_count(), 2);
    }
}
