//! Open-set management for best-first graph search.
//!
//! This module provides the relaxable priority queue that selects the next node to
//! expand, the scored entries it holds, and the total-order float wrapper used to
//! compare path scores.

mod internal_node;
mod ordered_float;
mod relaxable_queue;

pub use internal_node::*;
pub use ordered_float::*;
pub use relaxable_queue::*;
