//! Default scoring functions used when neither the caller nor the graph supply one.
//!
//! Both defaults are plain stateless functions, so they can be passed anywhere a
//! cost or heuristic closure is expected.

mod defaults;

pub use defaults::*;
