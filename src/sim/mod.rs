//! Simulation layer: the driver that replays a trace and its statistics.

mod driver;
mod stats;

pub use driver::{Driver, RunReport};
pub use stats::SimStats;
