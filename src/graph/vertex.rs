/// ID for vertices, which are essentially `usize`.
///
/// The derived `Ord` on the raw index is the canonical vertex ordering.
/// Samplers that need a deterministic tie-break use it explicitly.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
