//! FIFO (First-In-First-Out) eviction engine.
//!
//! Replaces the oldest resident page using a rotating write cursor over a
//! fixed slot array, matching the textbook frame-table presentation.

use crate::common::{Error, Result};
use crate::engine::{Outcome, Page};

/// A FIFO eviction engine.
///
/// State is a capacity-length circular slot array plus a write cursor. Hits
/// never reorder anything: a page's eviction time is fixed by when it was
/// admitted, no matter how often it is touched afterwards.
///
/// Membership checks are O(capacity) linear scans over the slot array, which
/// is the right trade for the small fixed capacities this simulator targets.
#[derive(Debug)]
pub struct FifoEngine<P> {
    /// Fixed slot array; `None` marks a never-yet-used slot.
    slots: Vec<Option<P>>,

    /// Next slot to write on a fault. Always the oldest occupied slot once
    /// the cache has filled, because admissions advance it in lock-step.
    cursor: usize,

    hits: u64,
    faults: u64,
}

impl<P: Page> FifoEngine<P> {
    /// Create an empty FIFO engine with `capacity` slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            cursor: 0,
            hits: 0,
            faults: 0,
        })
    }

    /// Process one page request.
    ///
    /// On a hit nothing moves. On a fault the page is written into the slot
    /// under the cursor, evicting any previous occupant, and the cursor
    /// advances modulo capacity. The cursor wraps regardless of fill level:
    /// empty slots are consumed in index order 0..capacity before the first
    /// eviction can occur.
    pub fn process(&mut self, page: P) -> Outcome<P> {
        if self.contains(&page) {
            self.hits += 1;
            return self.outcome(true, None);
        }

        self.faults += 1;
        let evicted = self.slots[self.cursor].replace(page);
        self.cursor = (self.cursor + 1) % self.slots.len();

        self.outcome(false, evicted)
    }

    /// Whether `page` is currently resident.
    pub fn contains(&self, page: &P) -> bool {
        self.slots.iter().flatten().any(|resident| resident == page)
    }

    /// Number of slots (fixed at construction).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently resident pages.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no pages are resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cache contents in slot order.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        self.slots.clone()
    }

    fn outcome(&self, hit: bool, evicted: Option<P>) -> Outcome<P> {
        Outcome {
            hit,
            evicted,
            snapshot: self.snapshot(),
            hits_so_far: self.hits,
            faults_so_far: self.faults,
        }
    }
}
