//! Round-by-round Bellman-Ford relaxation.

use super::{DistanceTable, PredecessorTable, RunResult};
use crate::{graph::Graph, types::Distance};
use derive_more::Display;
use log::{debug, info, warn};
use std::str::FromStr;

/// Which vertices are used as relaxation sources in each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RelaxationMode {
    /// Every round skips the first enumerated vertex, so edges leaving it are
    /// never relaxed.
    #[display(fmt = "faithful")]
    Faithful,
    /// Every round relaxes the edges of every vertex.
    #[display(fmt = "textbook")]
    Textbook,
}

impl RelaxationMode {
    fn num_skipped(&self) -> usize {
        match self {
            RelaxationMode::Faithful => 1,
            RelaxationMode::Textbook => 0,
        }
    }
}

impl Default for RelaxationMode {
    fn default() -> Self {
        RelaxationMode::Faithful
    }
}

#[derive(Debug, Display, PartialEq)]
#[display(fmt = "unknown relaxation mode `{}`", _0)]
pub struct ParseModeError(String);

impl std::error::Error for ParseModeError {}

impl FromStr for RelaxationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faithful" => Ok(RelaxationMode::Faithful),
            "textbook" => Ok(RelaxationMode::Textbook),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// A single-source run over a borrowed graph.
///
/// ```
/// use dvr::{engine::{Relaxation, RelaxationMode}, loader, types::Distance};
///
/// let graph = loader::parse("A B 1\nB C 2\n").unwrap();
/// let result = Relaxation::new(&graph, "A")
///     .mode(RelaxationMode::Textbook)
///     .run();
/// assert_eq!(result.num_rounds(), 2);
/// assert_eq!(result.rounds()[0]["C"], Distance::Infinite);
/// assert_eq!(result.distance("C"), Some(Distance::Finite(3.0)));
/// ```
pub struct Relaxation<'a> {
    graph: &'a Graph,
    source: &'a str,
    mode: RelaxationMode,
}

impl<'a> Relaxation<'a> {
    pub fn new(graph: &'a Graph, source: &'a str) -> Self {
        Self {
            graph,
            source,
            mode: RelaxationMode::default(),
        }
    }

    pub fn mode(mut self, mode: RelaxationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Run exactly `n - 1` rounds, where `n` counts every vertex and every
    /// edge destination.
    ///
    /// There is no early exit and no negative-cycle check: with a negative
    /// cycle the result is whatever the fixed number of rounds leaves behind.
    pub fn run(&self) -> RunResult {
        let (mut distances, mut predecessors) = self.initialize();
        let initial = distances.clone();
        let num_rounds = distances.len().saturating_sub(1);
        info!(
            "relaxing from {} in {} mode: {} rounds over {} vertices",
            self.source,
            self.mode,
            num_rounds,
            distances.len()
        );
        let mut rounds = Vec::with_capacity(num_rounds);
        for round in 1..=num_rounds {
            let num_relaxed = self.relax(&mut distances, &mut predecessors);
            debug!("round {}: {} edges relaxed", round, num_relaxed);
            rounds.push(distances.clone());
        }
        RunResult::new(
            self.source.to_owned(),
            self.mode,
            initial,
            rounds,
            distances,
            predecessors,
        )
    }
}

// private methods
impl<'a> Relaxation<'a> {
    /// Every vertex and every edge destination starts unreachable.
    fn initialize(&self) -> (DistanceTable, PredecessorTable) {
        let mut distances = DistanceTable::new();
        let mut predecessors = PredecessorTable::new();
        let vids = self
            .graph
            .vertices()
            .map(|(vid, _)| vid)
            .chain(self.graph.destinations());
        for vid in vids {
            distances.entry(vid.clone()).or_insert(Distance::Infinite);
            predecessors.entry(vid.clone()).or_insert(None);
        }
        match distances.get_mut(self.source) {
            Some(d) => *d = Distance::Finite(0.0),
            None => warn!("source {} does not occur in the graph", self.source),
        }
        (distances, predecessors)
    }

    /// One round. Returns the number of successful relaxations.
    ///
    /// Edges leave from the distances the round started with and improve the
    /// live table, so a path grows by at most one hop per round.
    fn relax(&self, distances: &mut DistanceTable, predecessors: &mut PredecessorTable) -> usize {
        let advertised = distances.clone();
        let mut num_relaxed = 0;
        for (u, adjacency) in self.graph.vertices().skip(self.mode.num_skipped()) {
            let du = distance_of(&advertised, u);
            for (v, w) in adjacency.iter() {
                let candidate = du + w;
                if candidate < distance_of(distances, v) {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    num_relaxed += 1;
                }
            }
        }
        num_relaxed
    }
}

fn distance_of(distances: &DistanceTable, vid: &str) -> Distance {
    distances.get(vid).copied().unwrap_or_default()
}
