//! LRU (Least-Recently-Used) eviction engine.
//!
//! Orders resident pages strictly by last-touch time: front of the queue is
//! the coldest page and the eviction candidate, back is the hottest.

use std::collections::VecDeque;

use crate::common::{Error, Result};
use crate::engine::{Outcome, Page};

/// An LRU eviction engine.
///
/// State is a recency-ordered deque with no duplicates: front =
/// least-recently-used, back = most-recently-used. A hit unlinks the page
/// from wherever it sits and re-appends it at the back, so ordering reflects
/// last touch, not admission time.
///
/// Membership and unlinking are O(capacity) scans over the deque; fine for
/// the small fixed capacities this simulator targets.
#[derive(Debug)]
pub struct LruEngine<P> {
    /// Resident pages, front = LRU, back = MRU. Never exceeds `capacity`.
    queue: VecDeque<P>,

    capacity: usize,
    hits: u64,
    faults: u64,
}

impl<P: Page> LruEngine<P> {
    /// Create an empty LRU engine with room for `capacity` pages.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            faults: 0,
        })
    }

    /// Process one page request.
    ///
    /// A hit promotes the page to most-recently-used. A fault admits the page
    /// at the MRU end, evicting the LRU front element first if the cache is
    /// full. Hits never change which pages are resident, only their order.
    pub fn process(&mut self, page: P) -> Outcome<P> {
        if let Some(pos) = self.queue.iter().position(|resident| *resident == page) {
            self.hits += 1;
            // Unlink and re-append: the page becomes most-recently-used.
            if let Some(touched) = self.queue.remove(pos) {
                self.queue.push_back(touched);
            }
            return self.outcome(true, None);
        }

        self.faults += 1;
        let evicted = if self.queue.len() == self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        self.queue.push_back(page);

        self.outcome(false, evicted)
    }

    /// Whether `page` is currently resident.
    pub fn contains(&self, page: &P) -> bool {
        self.queue.iter().any(|resident| resident == page)
    }

    /// Maximum number of resident pages (fixed at construction).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently resident pages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no pages are resident.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Current cache contents from LRU to MRU, right-padded with `None` up to
    /// capacity. The padding exists only in the snapshot; the engine itself
    /// stores no empty markers.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        let mut snapshot: Vec<Option<P>> = self.queue.iter().cloned().map(Some).collect();
        snapshot.resize(self.capacity, None);
        snapshot
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
