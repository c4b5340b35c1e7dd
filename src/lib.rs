//! Distance-vector Bellman-Ford shortest paths, reported round by round.

pub mod engine;
pub mod graph;
pub mod loader;
pub mod report;
pub mod types;
