//! Eviction engines (replacement policies).
//!
//! Three independent, stateful engines share one contract: feed a page in,
//! get an [`Outcome`] back saying whether it hit, what (if anything) was
//! evicted, and what the cache looks like now.
//!
//! - [`FifoEngine`] - evict the oldest admission (rotating cursor)
//! - [`LruEngine`] - evict the page untouched the longest
//! - [`LfuEngine`] - evict the least-frequently-used page, FIFO on ties
//!
//! [`Engine`] wraps the three behind a runtime policy selection so a driver
//! can be handed any of them through one type.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

mod fifo;
mod lfu;
mod lru;
mod outcome;

pub use fifo::FifoEngine;
pub use lfu::LfuEngine;
pub use lru::LruEngine;
pub use outcome::Outcome;

use crate::common::{Error, Result};

/// Requirements on a page identifier.
///
/// Engines only compare, hash, and clone pages; any cheap identifier type
/// (integers, [`crate::PageId`], interned strings) qualifies via the blanket
/// impl.
pub trait Page: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Page for T {}

/// The available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// First-In-First-Out.
    Fifo,
    /// Least-Recently-Used.
    Lru,
    /// Least-Frequently-Used with FIFO tie-breaking.
    Lfu,
}

impl EngineKind {
    /// All kinds, in menu order.
    pub const ALL: [EngineKind; 3] = [EngineKind::Fifo, EngineKind::Lru, EngineKind::Lfu];

    /// Canonical upper-case name, as shown in menus and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Fifo => "FIFO",
            EngineKind::Lru => "LRU",
            EngineKind::Lfu => "LFU",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    /// Case-insensitive parse of a policy name.
    ///
    /// # Errors
    /// Returns [`Error::UnknownPolicy`] for anything other than
    /// `fifo`/`lru`/`lfu` (any casing).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(EngineKind::Fifo),
            "LRU" => Ok(EngineKind::Lru),
            "LFU" => Ok(EngineKind::Lfu),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

/// A runtime-selected eviction engine.
///
/// Thin dispatch wrapper over the three concrete engines so callers can pick
/// a policy at runtime (e.g. from CLI input) without generics over the policy
/// itself. Each variant owns its engine outright; there is no shared state.
#[derive(Debug)]
pub enum Engine<P> {
    /// First-In-First-Out engine.
    Fifo(FifoEngine<P>),
    /// Least-Recently-Used engine.
    Lru(LruEngine<P>),
    /// Least-Frequently-Used engine.
    Lfu(LfuEngine<P>),
}

impl<P: Page> Engine<P> {
    /// Construct an empty engine of the given kind.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(kind: EngineKind, capacity: usize) -> Result<Self> {
        Ok(match kind {
            EngineKind::Fifo => Engine::Fifo(FifoEngine::new(capacity)?),
            EngineKind::Lru => Engine::Lru(LruEngine::new(capacity)?),
            EngineKind::Lfu => Engine::Lfu(LfuEngine::new(capacity)?),
        })
    }

    /// Which policy this engine implements.
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Fifo(_) => EngineKind::Fifo,
            Engine::Lru(_) => EngineKind::Lru,
            Engine::Lfu(_) => EngineKind::Lfu,
        }
    }

    /// Process one page request. Never fails; see each engine for semantics.
    pub fn process(&mut self, page: P) -> Outcome<P> {
        match self {
            Engine::Fifo(engine) => engine.process(page),
            Engine::Lru(engine) => engine.process(page),
            Engine::Lfu(engine) => engine.process(page),
        }
    }

    /// Whether `page` is currently resident.
    pub fn contains(&self, page: &P) -> bool {
        match self {
            Engine::Fifo(engine) => engine.contains(page),
            Engine::Lru(engine) => engine.contains(page),
            Engine::Lfu(engine) => engine.contains(page),
        }
    }

    /// Number of cache slots (fixed at construction).
    pub fn capacity(&self) -> usize {
        match self {
            Engine::Fifo(engine) => engine.capacity(),
            Engine::Lru(engine) => engine.capacity(),
            Engine::Lfu(engine) => engine.capacity(),
        }
    }

    /// Number of currently resident pages.
    pub fn len(&self) -> usize {
        match self {
            Engine::Fifo(engine) => engine.len(),
            Engine::Lru(engine) => engine.len(),
            Engine::Lfu(engine) => engine.len(),
        }
    }

    /// Whether no pages are resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cache contents in the engine's display order.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        match self {
            Engine::Fifo(engine) => engine.snapshot(),
            Engine::Lru(engine) => engine.snapshot(),
            Engine::Lfu(engine) => engine.snapshot(),
        }
    }

    /// Access counts per resident page; `Some` only for LFU, which is the
    /// only policy that tracks them.
    pub fn frequencies(&self) -> Option<&HashMap<P, u64>> {
        match self {
            Engine::Lfu(engine) => Some(engine.frequencies()),
            _ => None,
        }
    }
}
