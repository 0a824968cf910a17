pub mod costs;
pub mod graph;
pub mod search;
pub mod sets;
pub mod statistics;

#[cfg(test)]
mod testing;
