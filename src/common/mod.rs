//! Common types and utilities shared across evictsim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (default capacity, reference trace)
//! - Error types
//! - The concrete page identifier used by the CLI and tests

pub mod config;
pub mod error;
mod page_id;

pub use error::{Error, Result};
pub use page_id::PageId;
