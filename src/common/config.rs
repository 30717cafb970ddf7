//! Configuration constants for evictsim.

/// Default number of cache slots used by the CLI when no capacity is given.
///
/// Five slots is the classic classroom setup: large enough that the three
/// policies diverge on the reference trace, small enough to read at a glance.
pub const DEFAULT_CAPACITY: usize = 5;

/// The bundled reference access trace.
///
/// This is the request sequence the interactive menu replays for each policy.
/// With [`DEFAULT_CAPACITY`] slots it produces different eviction victims
/// under FIFO, LRU, and LFU, which is the whole point of the exercise.
pub const REFERENCE_TRACE: [u32; 15] = [8, 2, 6, 4, 7, 8, 9, 2, 0, 1, 6, 4, 0, 8, 5];
