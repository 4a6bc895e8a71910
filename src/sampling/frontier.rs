use crate::graph::*;
use crate::sampling::{RandomSource, SamplingError};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Sampling by expanding a frontier of seed vertices.
///
/// All three samplers return a flat vertex list in admission order, seeds
/// first. Induced edges are not computed. Seed vertices count toward the
/// target size; the only randomness applied is the shuffling of neighbor
/// lists (and, for snowball, of the frontier itself), so no degree bias is
/// introduced.
pub trait FrontierSampling
where
    Self: QueryableGraph + Sized,
{
    /// Snowball sampling: `expand_depth` rounds of frontier growth.
    ///
    /// Each round expands every frontier vertex, admitting its not yet
    /// sampled neighbors until the target size is reached. Vertices
    /// admitted in round `d` are exactly the new neighbors of round-`d−1`
    /// admissions.
    fn snowball_sampling<R>(
        &self,
        rng: &mut R,
        initial_nodes: &[VertexId],
        sample_size: usize,
        expand_depth: usize,
    ) -> Result<Vec<VertexId>, SamplingError>
    where
        R: RandomSource,
    {
        let mut sampled: HashSet<VertexId, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut order = Vec::new();
        for v in initial_nodes {
            if !self.contains_vertex(v) {
                return Err(SamplingError::InvalidStartNode(*v));
            }
            if sampled.insert(*v) {
                order.push(*v);
            }
        }
        let mut frontier = order.clone();
        for _ in 0..expand_depth {
            rng.shuffle(&mut frontier);
            let mut next_frontier = Vec::new();
            for node in &frontier {
                let mut neighbors: Vec<VertexId> = self.neighbors(node).collect();
                rng.shuffle(&mut neighbors);
                for neighbor in neighbors {
                    if sampled.len() >= sample_size {
                        break;
                    }
                    if sampled.insert(neighbor) {
                        order.push(neighbor);
                        next_frontier.push(neighbor);
                    }
                }
            }
            frontier = next_frontier;
            if sampled.len() >= sample_size {
                break;
            }
        }
        Ok(order)
    }

    /// Depth-first sampling from a single seed vertex.
    ///
    /// Neighbors are pushed in shuffled order. The stack may accumulate
    /// duplicates; they are filtered when popped.
    fn depth_first_sampling<R>(
        &self,
        rng: &mut R,
        initial_node: VertexId,
        sample_size: usize,
    ) -> Result<Vec<VertexId>, SamplingError>
    where
        R: RandomSource,
    {
        if !self.contains_vertex(&initial_node) {
            return Err(SamplingError::InvalidStartNode(initial_node));
        }
        let mut sampled: HashSet<VertexId, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut order = Vec::new();
        let mut stack = vec![initial_node];
        while sampled.len() < sample_size {
            let node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            if !sampled.insert(node) {
                continue;
            }
            order.push(node);
            let mut neighbors: Vec<VertexId> = self.neighbors(&node).collect();
            rng.shuffle(&mut neighbors);
            for neighbor in neighbors {
                if sampled.len() < sample_size {
                    stack.push(neighbor);
                }
            }
        }
        Ok(order)
    }

    /// Breadth-first sampling from a set of seed vertices.
    ///
    /// Stops as soon as the target size is reached, possibly partway
    /// through a neighbor list.
    fn breadth_first_sampling<R>(
        &self,
        rng: &mut R,
        initial_nodes: &[VertexId],
        sample_size: usize,
    ) -> Result<Vec<VertexId>, SamplingError>
    where
        R: RandomSource,
    {
        let mut sampled: HashSet<VertexId, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        for v in initial_nodes {
            if !self.contains_vertex(v) {
                return Err(SamplingError::InvalidStartNode(*v));
            }
            if sampled.insert(*v) {
                order.push(*v);
                queue.push_back(*v);
            }
        }
        while sampled.len() < sample_size {
            let node = match queue.pop_front() {
                Some(node) => node,
                None => break,
            };
            let mut neighbors: Vec<VertexId> = self.neighbors(&node).collect();
            rng.shuffle(&mut neighbors);
            for neighbor in neighbors {
                if sampled.insert(neighbor) {
                    order.push(neighbor);
                    queue.push_back(neighbor);
                    if sampled.len() >= sample_size {
                        break;
                    }
                }
            }
        }
        Ok(order)
    }
}

impl<G: QueryableGraph> FrontierSampling for G {}
