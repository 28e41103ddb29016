use super::container::UndirectedEdgeContainer;
use crate::graph::*;
use std::collections::BTreeMap;

/// Per-vertex edge index of an undirected graph.
///
/// Every edge is recorded at both endpoints, except self-loops which are recorded once.
#[derive(Debug, Clone, Default)]
pub struct UndirectedSpecifics {
    containers: BTreeMap<VertexId, UndirectedEdgeContainer>,
}

impl UndirectedSpecifics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.containers.contains_key(&v) {
            return false;
        }
        self.containers.insert(v, UndirectedEdgeContainer::default());
        true
    }

    /// Forgets `v`. Edges touching `v` are not detached.
    pub fn remove_vertex(&mut self, v: &VertexId) -> bool {
        self.containers.remove(v).is_some()
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        self.containers.contains_key(v)
    }

    pub fn vertex_size(&self) -> usize {
        self.containers.len()
    }

    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.containers.keys().copied())
    }

    pub fn edges_connecting(
        &self,
        source: &VertexId,
        target: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        if !self.containers.contains_key(target) {
            return Box::new(std::iter::empty());
        }
        let source = *source;
        let target = *target;
        match self.containers.get(&source) {
            Some(c) => Box::new(
                c.edges()
                    .iter()
                    .filter(move |e| e.connects(&source, &target))
                    .copied(),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    pub fn edges_of(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        let c = self.containers.get(v)?;
        Some(Box::new(c.edges().iter().copied()))
    }

    /// A self-loop adds two to the degree.
    pub fn degree_of(&self, v: &VertexId) -> Option<usize> {
        let c = self.containers.get(v)?;
        let loops = c.edges().iter().filter(|e| e.is_self_loop()).count();
        Some(c.edge_count() + loops)
    }

    pub fn add_edge_to_touching_vertices(&mut self, e: &Edge) {
        if let Some(c) = self.containers.get_mut(&e.source) {
            c.add_edge(*e);
        }
        if e.is_self_loop() {
            return;
        }
        if let Some(c) = self.containers.get_mut(&e.target) {
            c.add_edge(*e);
        }
    }

    pub fn remove_edge_from_touching_vertices(&mut self, e: &Edge) {
        if let Some(c) = self.containers.get_mut(&e.source) {
            c.remove_edge(&e.id);
        }
        if e.is_self_loop() {
            return;
        }
        if let Some(c) = self.containers.get_mut(&e.target) {
            c.remove_edge(&e.id);
        }
    }
}
