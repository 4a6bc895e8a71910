use crate::graph::*;
use crate::sampling::{RandomSource, SamplingError};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Sampling by direct selection over the whole vertex or edge population,
/// with no traversal involved.
pub trait SelectionSampling
where
    Self: QueryableGraph + Sized,
{
    /// A uniform sample of `sample_size` edges without replacement.
    ///
    /// Lenient on undersized graphs: when the graph has fewer than
    /// `sample_size` edges, every edge is returned and no error is raised.
    /// Contrast with the strict [`Self::random_node_sampling`].
    fn random_edge_sampling<R>(&self, rng: &mut R, sample_size: usize) -> Vec<Edge>
    where
        R: RandomSource,
    {
        let mut edges: Vec<Edge> = self.iter_edges().collect();
        rng.shuffle(&mut edges);
        edges.truncate(sample_size);
        edges
    }

    /// Samples `(vertex, neighbor)` pairs by scanning shuffled adjacency
    /// lists instead of the global edge list.
    ///
    /// Pairs are directional and no dedup set is kept, so an undirected
    /// edge `{u, v}` can appear both as `(u, v)` and as `(v, u)` when both
    /// endpoints are reached before the quota fills. At most
    /// `min(sample_size, 2 * edge_size)` pairs come back.
    fn induced_edge_sampling<R>(
        &self,
        rng: &mut R,
        sample_size: usize,
    ) -> Vec<(VertexId, VertexId)>
    where
        R: RandomSource,
    {
        let mut sampled = Vec::new();
        let mut nodes: Vec<VertexId> = self.iter_vertices().collect();
        rng.shuffle(&mut nodes);
        for node in nodes {
            let mut neighbors: Vec<VertexId> = self.neighbors(&node).collect();
            rng.shuffle(&mut neighbors);
            for neighbor in neighbors {
                if sampled.len() >= sample_size {
                    return sampled;
                }
                sampled.push((node, neighbor));
            }
        }
        sampled
    }

    /// A uniform sample of exactly `sample_size` distinct vertices.
    ///
    /// Strict: fails with [`SamplingError::InsufficientPopulation`] when
    /// the graph has fewer vertices than requested.
    fn random_node_sampling<R>(
        &self,
        rng: &mut R,
        sample_size: usize,
    ) -> Result<Vec<VertexId>, SamplingError>
    where
        R: RandomSource,
    {
        let mut nodes: Vec<VertexId> = self.iter_vertices().collect();
        if sample_size > nodes.len() {
            return Err(SamplingError::InsufficientPopulation {
                requested: sample_size,
                available: nodes.len(),
            });
        }
        rng.shuffle(&mut nodes);
        nodes.truncate(sample_size);
        Ok(nodes)
    }

    /// The `sample_size` vertices of highest degree.
    ///
    /// Deterministic: ranking is by degree descending, ties broken by the
    /// canonical vertex order ascending. Returns the whole vertex set when
    /// the graph is smaller than `sample_size`.
    fn degree_based_node_sampling(&self, sample_size: usize) -> Vec<VertexId> {
        let mut ranking: KeyedPriorityQueue<VertexId, (usize, Reverse<VertexId>), RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            ranking.push(v, (self.degree(&v), Reverse(v)));
        }
        let mut sampled = Vec::with_capacity(sample_size.min(ranking.len()));
        while sampled.len() < sample_size {
            match ranking.pop() {
                Some((v, _)) => sampled.push(v),
                None => break,
            }
        }
        sampled
    }
}

impl<G: QueryableGraph> SelectionSampling for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    #[quickcheck]
    fn node_sampling_returns_distinct_members(sg: SparseGraph, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let k = sg.vertices.len() / 2;
        let sample = sg.graph.random_node_sampling(&mut rng, k).unwrap();
        assert_eq!(sample.len(), k);
        let distinct: BTreeSet<VertexId> = sample.iter().copied().collect();
        assert_eq!(distinct.len(), k);
        for v in &sample {
            assert!(sg.graph.contains_vertex(v));
        }
    }

    #[quickcheck]
    fn node_sampling_is_strict(sg: SparseGraph, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let available = sg.vertices.len();
        assert_eq!(
            sg.graph.random_node_sampling(&mut rng, available + 1).unwrap_err(),
            SamplingError::InsufficientPopulation {
                requested: available + 1,
                available,
            }
        );
    }

    #[quickcheck]
    fn edge_sampling_is_lenient(sg: SparseGraph, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let total = sg.graph.edge_size();
        let sample = sg.graph.random_edge_sampling(&mut rng, total + 3);
        assert_eq!(sample.len(), total);
        let sample = sg.graph.random_edge_sampling(&mut rng, total / 2);
        assert_eq!(sample.len(), total / 2);
        for e in &sample {
            let (u, v) = e.endpoints();
            assert!(sg.graph.contains_edge(&u, &v));
        }
    }

    #[quickcheck]
    fn induced_pairs_are_adjacencies(sg: SparseGraph, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let k = 5;
        let sample = sg.graph.induced_edge_sampling(&mut rng, k);
        assert!(sample.len() <= k.min(2 * sg.graph.edge_size()));
        for (u, v) in &sample {
            assert!(sg.graph.contains_edge(u, v));
        }
    }

    #[quickcheck]
    fn degree_ranking_is_non_increasing(sg: SparseGraph) {
        let k = sg.vertices.len() / 2 + 1;
        let sample = sg.graph.degree_based_node_sampling(k);
        assert_eq!(sample.len(), k.min(sg.vertices.len()));
        let degrees: Vec<usize> = sample.iter().map(|v| sg.graph.degree(v)).collect();
        assert!(degrees.windows(2).all(|w| w[0] >= w[1]));
        // nothing excluded outranks the weakest included vertex
        if let Some(min_included) = degrees.last() {
            let included: BTreeSet<VertexId> = sample.iter().copied().collect();
            for v in sg.graph.iter_vertices() {
                if !included.contains(&v) {
                    assert!(sg.graph.degree(&v) <= *min_included);
                }
            }
        }
    }

    #[test]
    fn star_center_always_ranks_first() {
        let (g, vs) = star_graph(3);
        assert_eq!(g.degree_based_node_sampling(1), vec![vs[0]]);
    }

    #[test]
    fn degree_ties_break_on_vertex_order() {
        // path 0-1-2-3-4: the middle three share degree 2
        let (g, vs) = path_graph(5);
        assert_eq!(
            g.degree_based_node_sampling(3),
            vec![vs[1], vs[2], vs[3]]
        );
        assert_eq!(
            g.degree_based_node_sampling(5),
            vec![vs[1], vs[2], vs[3], vs[0], vs[4]]
        );
    }

    #[test]
    fn induced_sampling_caps_at_twice_the_edges() {
        let (g, _) = path_graph(5);
        let mut rng = StdRng::seed_from_u64(9);
        let sample = g.induced_edge_sampling(&mut rng, 10);
        assert_eq!(sample.len(), 8);
        let distinct: BTreeSet<Edge> = sample.iter().map(|(u, v)| Edge::new(*u, *v)).collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn sampling_an_empty_graph() {
        let g = AdjacentListGraph::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(g.random_edge_sampling(&mut rng, 3).is_empty());
        assert!(g.induced_edge_sampling(&mut rng, 3).is_empty());
        assert!(g.degree_based_node_sampling(3).is_empty());
        assert_eq!(g.random_node_sampling(&mut rng, 0).unwrap(), vec![]);
        assert!(g.random_node_sampling(&mut rng, 1).is_err());
    }
}
