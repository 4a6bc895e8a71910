use crate::graph::*;

/// Everything needed to build a graph before handing it to a sampler.
pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Edge;
}

/// The read contract the sampling algorithms work against.
///
/// Graphs are undirected and simple: an edge `{u, v}` implies `u` appears
/// among `v`'s neighbors and vice versa. No sampler ever mutates a graph;
/// results are either owned snapshots or flat vertex/edge collections.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, u: &VertexId, v: &VertexId) -> bool;

    /// All vertices adjacent to `v`. Empty for a vertex not in the graph.
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Number of edges incident to `v`.
    fn degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).count()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
