//! Work counters for search loops built on the kernel.
//!
//! This module provides a structure for collecting and aggregating how many searches
//! were run, how many reached their goal, how many nodes were expanded and how many
//! relaxations were performed.

mod stats;
pub use stats::*;
