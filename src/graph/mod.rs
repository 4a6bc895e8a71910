//! Undirected graphs and the read contract the samplers work against.
//!
//! # Vertices and edges are lightweight IDs
//!
//! Vertices are opaque `usize` indexes ([`VertexId`]) and edges are
//! canonicalized unordered pairs of them ([`Edge`]). Sampling algorithms
//! copy and store these IDs freely; node payloads, if any, stay with the
//! caller.
//!
//! # The read contract
//!
//! [`QueryableGraph`] is the whole interface a sampler consumes: vertex and
//! edge enumeration, membership, neighbor lists, and degrees. Nothing in
//! this crate mutates a graph through it.
//!
//! # Implementations
//!
//! [`AdjacentListGraph`] is the concrete graph callers build and sample
//! from. [`SampledSubgraph`] is the owned snapshot the walk-based samplers
//! produce; it implements the same read contract, so the output of one
//! sampler can be inspected with the same tools as its input.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacent_list;
pub use self::adjacent_list::*;
mod sampled_subgraph;
pub use self::sampled_subgraph::*;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub use self::tests::*;
