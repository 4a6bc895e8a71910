//! Randomized sampling of representative subsets from undirected graphs.
//!
//! Large networks are often too big to analyze or draw whole.
//! This crate samples tractable-size subsets of their nodes, edges, or
//! induced subgraphs while approximately preserving structural properties,
//! via nine strategies ranging from Metropolis-Hastings walks to plain
//! degree-ranked selection.
//!
//! # Graphs
//!
//! The [`graph`] module defines the read contract every sampler works
//! against ([`graph::QueryableGraph`]) together with a concrete
//! adjacency-list implementation and the owned subgraph snapshot that
//! walk-based samplers return.
//!
//! # Sampling
//!
//! The [`sampling`] module implements the algorithms as extension traits
//! over any [`graph::QueryableGraph`]. All randomness flows through an
//! explicit [`sampling::RandomSource`], so a seeded generator reproduces a
//! sample exactly:
//!
//! ```
//! use graphsample::graph::*;
//! use graphsample::sampling::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut g = AdjacentListGraph::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//! let c = g.add_vertex();
//! g.add_edge(a, b);
//! g.add_edge(b, c);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sample = g.random_walk_sampling(&mut rng, a, 2).unwrap();
//! assert!(sample.graph.vertex_size() <= 2);
//! ```

pub mod graph;
pub mod sampling;
