use crate::graph::*;
use std::marker::PhantomData;

/// Something producing a fresh value on every call.
pub trait Supplier<T> {
    fn supply(&mut self) -> T;
}

impl Supplier<VertexId> for VertexIdFactory {
    fn supply(&mut self) -> VertexId {
        self.one_more()
    }
}

impl Supplier<EdgeId> for EdgeIdFactory {
    fn supply(&mut self) -> EdgeId {
        self.one_more()
    }
}

/// Generates vertices with fresh IDs and payloads computed from those IDs.
pub struct VertexSupplier<V, F>
where
    F: FnMut(VertexId) -> V,
{
    ids: VertexIdFactory,
    value: F,
    _payload: PhantomData<fn() -> V>,
}

impl<V, F> VertexSupplier<V, F>
where
    F: FnMut(VertexId) -> V,
{
    pub fn new(ids: VertexIdFactory, value: F) -> Self {
        Self {
            ids,
            value,
            _payload: PhantomData,
        }
    }
}

impl<V, F> Supplier<Vertex<V>> for VertexSupplier<V, F>
where
    F: FnMut(VertexId) -> V,
{
    fn supply(&mut self) -> Vertex<V> {
        let id = self.ids.one_more();
        Vertex::new(id, (self.value)(id))
    }
}
