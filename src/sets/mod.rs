//! Specialized data structures for best-first graph search.
//!
//! # Submodules
//!
//! - [`candidates`]: The relaxable priority queue holding the open set, and its scored entries

pub mod candidates;
