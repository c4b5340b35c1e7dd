use crate::types::{VId, Weight};
use indexmap::{IndexMap, IndexSet};

/// Outgoing edges of one vertex: destination to weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    edges: IndexMap<VId, Weight>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }

    /// Add the edge to `dst`, overwriting any earlier weight.
    pub fn add_edge(&mut self, dst: VId, weight: Weight) {
        self.edges.insert(dst, weight);
    }

    pub fn weight(&self, dst: &str) -> Option<Weight> {
        self.edges.get(dst).copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VId, Weight)> {
        self.edges.iter().map(|(dst, &w)| (dst, w))
    }
}

impl<S: Into<VId>> std::iter::FromIterator<(S, Weight)> for Adjacency {
    fn from_iter<I: IntoIterator<Item = (S, Weight)>>(iter: I) -> Self {
        let mut adjacency = Adjacency::new();
        for (dst, w) in iter {
            adjacency.add_edge(dst.into(), w);
        }
        adjacency
    }
}

/// A directed weighted graph.
///
/// Vertices enumerate in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: IndexMap<VId, Adjacency>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    /// Register `vid`, replacing its adjacency if it is already present.
    pub fn insert_vertex(&mut self, vid: VId, adjacency: Adjacency) {
        self.vertices.insert(vid, adjacency);
    }

    pub fn contains_vertex(&self, vid: &str) -> bool {
        self.vertices.contains_key(vid)
    }

    pub fn adjacency(&self, vid: &str) -> Option<&Adjacency> {
        self.vertices.get(vid)
    }

    /// Number of vertices with their own adjacency entry.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(|(_, adj)| adj.len()).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (&VId, &Adjacency)> {
        self.vertices.iter()
    }

    /// Every id that appears as an edge destination, in first-seen order.
    pub fn destinations(&self) -> IndexSet<&VId> {
        self.vertices
            .values()
            .flat_map(|adj| adj.edges.keys())
            .collect()
    }
}
