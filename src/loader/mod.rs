//! Reads the line-oriented topology format into a [`Graph`](crate::graph::Graph).
//!
//! Each line names a vertex followed by zero or more `neighbor weight` pairs:
//!
//! ```text
//! bellman-ford a 1 b 4
//! a b 2
//! b
//! ```

pub use parser::{load, parse};

pub use parser::TopologyRule;

pub mod error;

mod parser;
