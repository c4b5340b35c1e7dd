use super::RelaxationMode;
use crate::types::{Distance, VId};
use indexmap::IndexMap;

/// Distance estimate of every known vertex.
pub type DistanceTable = IndexMap<VId, Distance>;

/// Next hop toward the source of every known vertex, `None` if there is none yet.
pub type PredecessorTable = IndexMap<VId, Option<VId>>;

/// Everything one run of the engine produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    source: VId,
    mode: RelaxationMode,
    initial: DistanceTable,
    rounds: Vec<DistanceTable>,
    distances: DistanceTable,
    predecessors: PredecessorTable,
}

impl RunResult {
    pub(crate) fn new(
        source: VId,
        mode: RelaxationMode,
        initial: DistanceTable,
        rounds: Vec<DistanceTable>,
        distances: DistanceTable,
        predecessors: PredecessorTable,
    ) -> Self {
        Self {
            source,
            mode,
            initial,
            rounds,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> RelaxationMode {
        self.mode
    }

    /// The distance table before the first round.
    pub fn initial(&self) -> &DistanceTable {
        &self.initial
    }

    /// One snapshot of the distance table per round, in round order.
    pub fn rounds(&self) -> &[DistanceTable] {
        &self.rounds
    }

    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }

    pub fn distance(&self, vid: &str) -> Option<Distance> {
        self.distances.get(vid).copied()
    }

    pub fn predecessor(&self, vid: &str) -> Option<&VId> {
        self.predecessors.get(vid).and_then(|p| p.as_ref())
    }

    /// The vertices from the source to `target` along the predecessor chain.
    ///
    /// Returns `None` if `target` is unreachable, or if the chain does not
    /// reach the source within as many steps as there are vertices, which
    /// only happens when a negative cycle was relaxed.
    pub fn path_to(&self, target: &str) -> Option<Vec<VId>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }
        let mut path = vec![target.to_owned()];
        let mut current = target;
        for _ in 0..self.predecessors.len() {
            if current == self.source {
                path.reverse();
                return Some(path);
            }
            current = self.predecessor(current)?;
            path.push(current.to_owned());
        }
        None
    }
}
