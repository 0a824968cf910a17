//! The per-invocation layer search algorithms are written against.
//!
//! A caller adapts its graph once into a [`SearchFuncs`] bundle, drives its own loop
//! with a [`crate::sets::candidates::RelaxableQueue`], and rebuilds the answer with
//! [`rebuild_path`] once the goal is reached.

mod path;
mod search_funcs;

pub use path::*;
pub use search_funcs::*;
