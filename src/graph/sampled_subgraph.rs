use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// An owned snapshot of vertices and edges drawn from a source graph.
///
/// Walk-based samplers return this shape. It copies everything it holds, so
/// it stays valid however the source graph is used afterwards, and it exposes
/// the same read contract as any other graph for downstream consumers.
#[derive(Debug, Clone)]
pub struct SampledSubgraph {
    vertices: HashSet<VertexId, RandomState>,
    edges: HashSet<Edge, RandomState>,
    adjacency: HashMap<VertexId, HashSet<VertexId, RandomState>, RandomState>,
}

impl Default for SampledSubgraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SampledSubgraph {
    pub fn new() -> Self {
        Self {
            vertices: HashSet::with_hasher(RandomState::new()),
            edges: HashSet::with_hasher(RandomState::new()),
            adjacency: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub(crate) fn insert_vertex(&mut self, v: VertexId) {
        self.vertices.insert(v);
    }

    /// Inserts an edge together with both of its endpoints.
    pub(crate) fn insert_edge(&mut self, e: Edge) {
        let (u, v) = e.endpoints();
        self.insert_vertex(u);
        self.insert_vertex(v);
        if self.edges.insert(e) {
            self.adjacency
                .entry(u)
                .or_insert_with(|| HashSet::with_hasher(RandomState::new()))
                .insert(v);
            self.adjacency
                .entry(v)
                .or_insert_with(|| HashSet::with_hasher(RandomState::new()))
                .insert(u);
        }
    }
}

impl QueryableGraph for SampledSubgraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn contains_edge(&self, u: &VertexId, v: &VertexId) -> bool {
        self.edges.contains(&Edge::new(*u, *v))
    }

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.adjacency.get(v) {
            Some(adj) => Box::new(adj.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn degree(&self, v: &VertexId) -> usize {
        self.adjacency.get(v).map_or(0, HashSet::len)
    }
}
