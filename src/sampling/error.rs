use crate::graph::VertexId;
use thiserror::Error;

/// Failures a sampling call reports to its caller.
///
/// Dead ends in walk-based sampling are not failures; they end the walk
/// early and surface through
/// [`Termination::DeadEnd`](crate::sampling::Termination::DeadEnd).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// A random draw was requested over zero elements.
    #[error("cannot draw from an empty population")]
    EmptyPopulation,
    /// A supplied start or seed vertex is absent from the graph.
    #[error("start vertex {0:?} is not in the graph")]
    InvalidStartNode(VertexId),
    /// A without-replacement sample asked for more elements than exist.
    #[error("requested {requested} samples from a population of {available}")]
    InsufficientPopulation { requested: usize, available: usize },
    /// A degree ratio would divide by zero.
    #[error("vertex {0:?} has no incident edges")]
    ZeroDegreeNode(VertexId),
}
