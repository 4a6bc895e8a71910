//! The nine sampling algorithms, grouped by how they explore the graph.
//!
//! - [`WalkSampling`]: Metropolis-Hastings and plain random walks; return an
//!   owned connected subgraph plus a [`Termination`] reason.
//! - [`FrontierSampling`]: snowball, depth-first and breadth-first
//!   expansion; return flat vertex lists.
//! - [`SelectionSampling`]: random edge, induced edge, random node and
//!   degree-ranked node selection; return flat vertex or edge lists.
//!
//! Each trait is blanket-implemented for every
//! [`QueryableGraph`](crate::graph::QueryableGraph). Randomness always
//! comes from a caller-supplied [`RandomSource`]; errors are the
//! [`SamplingError`] kinds and nothing is ever reported through stdout.

mod error;
pub use self::error::*;
mod source;
pub use self::source::*;
mod walk;
pub use self::walk::*;
mod frontier;
pub use self::frontier::*;
mod selection;
pub use self::selection::*;
