//! evictsim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          evictsim                             │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │          Presentation (src/bin/evictsim.rs)           │   │
//! │  │     CLI args / menu loop → rendering + step delay     │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                             ↓                                 │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │              Simulation Driver (sim/)                 │   │
//! │  │     Driver + SimStats + per-step observer hook        │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                             ↓                                 │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │    Eviction Engines (engine/)  [Runtime Swappable]    │   │
//! │  │   ┌───────────────────────────────────────────────┐   │   │
//! │  │   │      Policies: FIFO │ LRU │ LFU+FIFO ties     │   │   │
//! │  │   └───────────────────────────────────────────────┘   │   │
//! │  │            Engine<P> + Outcome<P> per step            │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`engine`] - The three eviction engines and their shared contract
//! - [`sim`] - Driver that feeds an access trace into a chosen engine
//!
//! # Quick Start
//! ```
//! use evictsim::engine::{Engine, EngineKind};
//! use evictsim::common::PageId;
//!
//! let mut engine: Engine<PageId> = Engine::new(EngineKind::Lru, 5).unwrap();
//!
//! let outcome = engine.process(PageId::new(8));
//! assert!(!outcome.hit); // cold cache: first access always faults
//!
//! let outcome = engine.process(PageId::new(8));
//! assert!(outcome.hit);
//! ```

pub mod common;
pub mod engine;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_CAPACITY;
pub use common::{Error, PageId, Result};

pub use engine::{Engine, EngineKind, Outcome, Page};
pub use sim::{Driver, RunReport, SimStats};
