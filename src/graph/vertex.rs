/// ID for vertices, which are essentially `usize`.
///
/// A vertex ID is independent of graph membership.
/// The same ID may be a member of several graphs at once.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
///
/// Factories are plain values owned by their callers.
/// Two factories never share a counter.
#[derive(Debug, Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    /// A factory whose first ID is `start`.
    pub fn starting_at(start: usize) -> Self {
        Self(start)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub const MIN: VertexId = VertexId(0);
    pub const MAX: VertexId = VertexId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// A vertex together with its payload.
///
/// Equality and hashing only look at `id`.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    pub id: VertexId,
    pub value: V,
}

impl<V> Vertex<V> {
    pub fn new(id: VertexId, value: V) -> Self {
        Self { id, value }
    }
}

impl From<VertexId> for Vertex<()> {
    fn from(id: VertexId) -> Self {
        Self { id, value: () }
    }
}

impl<V> From<(VertexId, V)> for Vertex<V> {
    fn from((id, value): (VertexId, V)) -> Self {
        Self { id, value }
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> std::hash::Hash for Vertex<V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
