//! LFU (Least-Frequently-Used) eviction engine with FIFO tie-breaking.
//!
//! Tracks an access count per resident page and evicts the least-frequently
//! used one. Equal frequencies are broken by admission order (earliest first),
//! which makes eviction deterministic instead of arbitrary.

use std::collections::HashMap;

use crate::common::{Error, Result};
use crate::engine::{Outcome, Page};

/// An LFU eviction engine.
///
/// State is a fixed slot array plus two maps keyed by resident page: the
/// frequency table (access count, 1 on admission, +1 per hit) and the load
/// order (admission timestamp from a logical clock that ticks once per
/// `process` call). Both maps cover exactly the resident set: entries are
/// created on admission and removed on eviction, never earlier or later.
///
/// Victim selection scans the slots in O(capacity) with O(1) hash lookups
/// per candidate.
#[derive(Debug)]
pub struct LfuEngine<P> {
    /// Fixed slot array; `None` marks an empty slot. Faults fill the lowest
    /// empty index first, so slot order mirrors first-admission order until
    /// evictions start recycling slots.
    slots: Vec<Option<P>>,

    /// Access count per resident page.
    frequency: HashMap<P, u64>,

    /// Admission timestamp per resident page, used only to break frequency
    /// ties (earliest admitted loses).
    load_order: HashMap<P, u64>,

    /// Logical clock, incremented once per `process` call.
    clock: u64,

    hits: u64,
    faults: u64,
}

impl<P: Page> LfuEngine<P> {
    /// Create an empty LFU engine with `capacity` slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            frequency: HashMap::with_capacity(capacity),
            load_order: HashMap::with_capacity(capacity),
            clock: 0,
            hits: 0,
            faults: 0,
        })
    }

    /// Process one page request.
    ///
    /// A hit bumps the page's frequency and changes nothing structurally. A
    /// fault admits the page with frequency 1 into the first empty slot, or,
    /// when the cache is full, into the slot of the victim: the resident page
    /// with the lowest frequency, ties broken by earliest admission.
    ///
    /// A page admitted on the previous step (frequency 1) is a legal victim
    /// on the next fault if every slot shares frequency 1 and it is the
    /// earliest-admitted; that is LFU behavior, not a bug.
    pub fn process(&mut self, page: P) -> Outcome<P> {
        self.clock += 1;

        if self.contains(&page) {
            self.hits += 1;
            *self.frequency.entry(page).or_insert(0) += 1;
            return self.outcome(true, None);
        }

        self.faults += 1;
        let (slot, evicted) = match self.slots.iter().position(Option::is_none) {
            Some(empty) => (empty, None),
            None => {
                let victim_slot = self.victim_slot();
                let victim = self.slots[victim_slot].take();
                if let Some(victim) = &victim {
                    self.frequency.remove(victim);
                    self.load_order.remove(victim);
                }
                (victim_slot, victim)
            }
        };

        self.frequency.insert(page.clone(), 1);
        self.load_order.insert(page.clone(), self.clock);
        self.slots[slot] = Some(page);

        self.outcome(false, evicted)
    }

    /// Whether `page` is currently resident.
    pub fn contains(&self, page: &P) -> bool {
        self.frequency.contains_key(page)
    }

    /// Number of slots (fixed at construction).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently resident pages.
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// Whether no pages are resident.
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// Current cache contents in slot order.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        self.slots.clone()
    }

    /// Access counts for the currently resident pages.
    ///
    /// Exposed for diagnostic display; the domain is exactly the resident
    /// set, so an evicted page's history is gone.
    pub fn frequencies(&self) -> &HashMap<P, u64> {
        &self.frequency
    }

    /// Index of the eviction victim among full slots: lowest frequency,
    /// ties broken by lowest load order. Empty slots never participate
    /// (callers only reach this when the cache is full).
    fn victim_slot(&self) -> usize {
        let mut victim = 0;
        let mut best_key = (u64::MAX, u64::MAX);

        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(page) = slot {
                let key = (
                    self.frequency.get(page).copied().unwrap_or(u64::MAX),
                    self.load_order.get(page).copied().unwrap_or(u64::MAX),
                );
                if key < best_key {
                    best_key = key;
                    victim = index;
                }
            }
        }

        victim
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
