use crate::graph::*;
use crate::sampling::{RandomSource, SamplingError};
use ahash::RandomState;
use std::collections::HashSet;
use tracing::debug;

/// Why a walk-based sampler stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The sample reached the requested vertex count.
    TargetReached,
    /// The current vertex had no neighbors to move to; the sample is
    /// smaller than requested.
    DeadEnd,
}

/// A subgraph produced by a walk, plus the reason the walk stopped.
#[derive(Debug)]
pub struct WalkSample {
    pub graph: SampledSubgraph,
    pub termination: Termination,
}

/// Sampling by traversing edges from a start vertex.
///
/// Both walks collect the vertices they visit and the edges they crossed to
/// first reach them, so the returned subgraph is connected. A walk that
/// strands on a vertex without neighbors stops early and reports
/// [`Termination::DeadEnd`]; that is a valid partial sample, not an error.
pub trait WalkSampling
where
    Self: QueryableGraph + Sized,
{
    /// Metropolis-Hastings sampling.
    ///
    /// Candidate steps are uniform over the current vertex's neighbors and
    /// accepted with probability `min(1, degree(next) / degree(current))`,
    /// which biases the walk against piling onto high-degree hubs. A
    /// rejected step never advances the walk.
    fn metropolis_hastings_sampling<R>(
        &self,
        rng: &mut R,
        start: VertexId,
        num_samples: usize,
    ) -> Result<WalkSample, SamplingError>
    where
        R: RandomSource,
    {
        if !self.contains_vertex(&start) {
            return Err(SamplingError::InvalidStartNode(start));
        }
        let mut sample = SampledSubgraph::new();
        sample.insert_vertex(start);
        let mut current = start;
        while sample.vertex_size() < num_samples {
            let neighbors: Vec<VertexId> = self.neighbors(&current).collect();
            if neighbors.is_empty() {
                debug!(
                    current = current.to_raw(),
                    sampled = sample.vertex_size(),
                    "no neighbors to move to, sampling stopped"
                );
                return Ok(WalkSample {
                    graph: sample,
                    termination: Termination::DeadEnd,
                });
            }
            let current_degree = self.degree(&current);
            if current_degree == 0 {
                return Err(SamplingError::ZeroDegreeNode(current));
            }
            let next = *rng.choice(&neighbors)?;
            let ratio = (self.degree(&next) as f64 / current_degree as f64).min(1.0);
            if rng.uniform() < ratio {
                sample.insert_edge(Edge::new(current, next));
                current = next;
            }
        }
        Ok(WalkSample {
            graph: sample,
            termination: Termination::TargetReached,
        })
    }

    /// Plain random walk sampling.
    ///
    /// Every step moves to a uniformly chosen neighbor unconditionally. A
    /// vertex and the edge leading to it join the sample only the first
    /// time the walk lands on it; revisits advance the walk and add
    /// nothing.
    fn random_walk_sampling<R>(
        &self,
        rng: &mut R,
        start: VertexId,
        num_samples: usize,
    ) -> Result<WalkSample, SamplingError>
    where
        R: RandomSource,
    {
        if !self.contains_vertex(&start) {
            return Err(SamplingError::InvalidStartNode(start));
        }
        let mut sample = SampledSubgraph::new();
        sample.insert_vertex(start);
        let mut visited: HashSet<VertexId, RandomState> = HashSet::with_hasher(RandomState::new());
        visited.insert(start);
        let mut current = start;
        while sample.vertex_size() < num_samples {
            let neighbors: Vec<VertexId> = self.neighbors(&current).collect();
            if neighbors.is_empty() {
                debug!(
                    current = current.to_raw(),
                    sampled = sample.vertex_size(),
                    "no neighbors to move to, sampling stopped"
                );
                return Ok(WalkSample {
                    graph: sample,
                    termination: Termination::DeadEnd,
                });
            }
            let next = *rng.choice(&neighbors)?;
            if visited.insert(next) {
                sample.insert_edge(Edge::new(current, next));
            }
            current = next;
        }
        Ok(WalkSample {
            graph: sample,
            termination: Termination::TargetReached,
        })
    }
}

impl<G: QueryableGraph> WalkSampling for G {}
