//! Text rendering of a [`RunResult`].

use crate::{engine::RunResult, types::VId};
use indexmap::IndexMap;
use std::fmt;

/// Order of the entries within a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// The order the engine's tables enumerate in.
    Natural,
    /// Sorted by vertex id.
    Sorted,
}

impl Default for Order {
    fn default() -> Self {
        Order::Natural
    }
}

/// One line per round with every distance, then one line per vertex with
/// its predecessor.
pub struct Report<'a> {
    result: &'a RunResult,
    order: Order,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a RunResult) -> Self {
        Self {
            result,
            order: Order::default(),
        }
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    fn entries<T>(&self, table: &'a IndexMap<VId, T>) -> Vec<(&'a VId, &'a T)> {
        let mut entries: Vec<_> = table.iter().collect();
        if self.order == Order::Sorted {
            entries.sort_by(|(u, _), (v, _)| u.cmp(v));
        }
        entries
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--Shortest Path Distance List Iterations--")?;
        for snapshot in self.result.rounds() {
            for (vid, distance) in self.entries(snapshot) {
                write!(f, "{}: {} ", vid, distance)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "--Shortest Path Predecessor List--")?;
        for (vid, predecessor) in self.entries(self.result.predecessors()) {
            writeln!(
                f,
                "{} preceeded by {}",
                vid,
                predecessor.as_deref().unwrap_or("NULL")
            )?;
        }
        Ok(())
    }
}
