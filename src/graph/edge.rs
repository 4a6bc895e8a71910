use super::VertexId;

/// An undirected edge, stored as a canonicalized pair of endpoints.
///
/// The constructor orders the endpoints, so `{u, v}` and `{v, u}` compare
/// and hash as the same edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// Both endpoints, in canonical order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    pub fn is_incident_to(&self, x: &VertexId) -> bool {
        self.u == *x || self.v == *x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_endpoint_order() {
        let a = VertexId::new(3);
        let b = VertexId::new(7);
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_eq!(Edge::new(b, a).endpoints(), (a, b));
    }

    #[test]
    fn incidence() {
        let e = Edge::new(VertexId::new(1), VertexId::new(2));
        assert!(e.is_incident_to(&VertexId::new(1)));
        assert!(e.is_incident_to(&VertexId::new(2)));
        assert!(!e.is_incident_to(&VertexId::new(3)));
    }
}
