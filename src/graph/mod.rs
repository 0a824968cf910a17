//! The graph contract the search kernel works against.
//!
//! Concrete storage lives with the caller. This module only names what a graph has
//! to offer ([`Graph`]) and what it may additionally offer ([`DirectedGraph`],
//! [`Coster`], [`HeuristicCoster`]), along with node and edge value types and the
//! deterministic [`ordering`]s used to break ties.

mod edge;
mod node;
pub mod ordering;
mod traits;

pub use edge::*;
pub use node::*;
pub use traits::*;
