use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Debug, Clone)]
pub struct EdgeIdFactory(usize);

/// An edge admitted into a graph.
///
/// Endpoints are fixed at the moment the edge is admitted.
/// For undirected graphs, `source` and `target` are merely the order in which
/// the endpoints were given.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub target: VertexId,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn starting_at(start: usize) -> Self {
        Self(start)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn is_incident_to(&self, v: &VertexId) -> bool {
        self.source == *v || self.target == *v
    }

    /// The endpoint on the other side of `v`, or `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: &VertexId) -> Option<VertexId> {
        if self.source == *v {
            Some(self.target)
        } else if self.target == *v {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &VertexId, b: &VertexId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }
}
