use crate::graph::*;
use petgraph::{
    graph::NodeIndex,
    stable_graph::StableUnGraph,
    visit::{EdgeRef, IntoEdgeReferences},
};

/// An undirected simple graph backed by an adjacency list.
///
/// Re-adding an edge between already-connected endpoints collapses onto the
/// existing edge, so the graph stays simple no matter how it is built.
#[derive(Clone)]
pub struct AdjacentListGraph(StableUnGraph<(), (), usize>);

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self(StableUnGraph::<(), (), usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Edge {
        let a = NodeIndex::new(u.to_raw());
        let b = NodeIndex::new(v.to_raw());
        self.0.update_edge(a, b, ());
        Edge::new(u, v)
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.contains_node(nidx)
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_references().map(|e| {
            let u = VertexId::new(e.source().index());
            let v = VertexId::new(e.target().index());
            Edge::new(u, v)
        });
        Box::new(it)
    }

    fn contains_edge(&self, u: &VertexId, v: &VertexId) -> bool {
        let a = NodeIndex::new(u.to_raw());
        let b = NodeIndex::new(v.to_raw());
        self.0.find_edge(a, b).is_some()
    }

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        if !self.0.contains_node(nidx) {
            return Box::new(std::iter::empty());
        }
        let it = self.0.neighbors(nidx).map(|x| VertexId::new(x.index()));
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn neighbors_are_symmetric() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, c);
        let of = |g: &AdjacentListGraph, v: &VertexId| -> BTreeSet<VertexId> {
            g.neighbors(v).collect()
        };
        assert!(of(&g, &a).contains(&b));
        assert!(of(&g, &b).contains(&a));
        assert_eq!(of(&g, &b), [a, c].into_iter().collect());
        assert_eq!(g.degree(&b), 2);
        assert_eq!(g.degree(&a), 1);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(b, a);
        assert_eq!(g.edge_size(), 1);
        assert!(g.contains_edge(&a, &b));
        assert!(g.contains_edge(&b, &a));
        assert_eq!(g.degree(&a), 1);
    }

    #[test]
    fn edge_iteration_is_canonical() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(b, a);
        let edges: Vec<Edge> = g.iter_edges().collect();
        assert_eq!(edges, vec![Edge::new(a, b)]);
    }

    #[test]
    fn absent_vertices() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let ghost = VertexId::new(17);
        assert!(g.contains_vertex(&a));
        assert!(!g.contains_vertex(&ghost));
        assert_eq!(g.neighbors(&ghost).count(), 0);
    }
}
