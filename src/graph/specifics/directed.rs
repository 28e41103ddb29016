use super::container::DirectedEdgeContainer;
use crate::graph::*;
use std::collections::BTreeMap;

/// Per-vertex edge index of a directed graph.
///
/// | operation                         | complexity                                        |
/// | --------------------------------- | ------------------------------------------------- |
/// | `add_vertex`                      | $O(\log \|V\|)$                                   |
/// | `remove_vertex`                   | $O(\log \|V\|)$, touching edges must be gone already |
/// | `add_edge_to_touching_vertices`   | $O(\log \|V\|)$                                   |
/// | `remove_edge_from_touching_vertices` | $O(\log \|V\| + d)$, $d$ the degree of endpoints |
/// | `edges_connecting`                | $O(\log \|V\| + d^+)$                             |
#[derive(Debug, Clone, Default)]
pub struct DirectedSpecifics {
    containers: BTreeMap<VertexId, DirectedEdgeContainer>,
}

impl DirectedSpecifics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.containers.contains_key(&v) {
            return false;
        }
        self.containers.insert(v, DirectedEdgeContainer::default());
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
        let target = *target;
        match self.containers.get(source) {
            Some(c) => Box::new(
                c.outgoing()
                    .iter()
                    .filter(move |e| e.target == target)
                    .copied(),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Outgoing and incoming edges of `v`. A self-loop shows up once.
    pub fn edges_of(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        let c = self.containers.get(v)?;
        // a self-loop sits in both lists; report it from the outgoing side only
        let it = c
            .outgoing()
            .iter()
            .chain(c.incoming().iter().filter(|e| !e.is_self_loop()))
            .copied();
        Some(Box::new(it))
    }

    pub fn in_edges(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        let c = self.containers.get(v)?;
        Some(Box::new(c.incoming().iter().copied()))
    }

    pub fn out_edges(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        let c = self.containers.get(v)?;
        Some(Box::new(c.outgoing().iter().copied()))
    }

    pub fn degree_of(&self, v: &VertexId) -> Option<usize> {
        let c = self.containers.get(v)?;
        Some(c.incoming().len() + c.outgoing().len())
    }

    pub fn in_degree_of(&self, v: &VertexId) -> Option<usize> {
        self.containers.get(v).map(|c| c.incoming().len())
    }

    pub fn out_degree_of(&self, v: &VertexId) -> Option<usize> {
        self.containers.get(v).map(|c| c.outgoing().len())
    }

    /// Both endpoints of `e` must be present.
    pub fn add_edge_to_touching_vertices(&mut self, e: &Edge) {
        if let Some(c) = self.containers.get_mut(&e.source) {
            c.add_outgoing_edge(*e);
        }
        if let Some(c) = self.containers.get_mut(&e.target) {
            c.add_incoming_edge(*e);
        }
    }

    pub fn remove_edge_from_touching_vertices(&mut self, e: &Edge) {
        if let Some(c) = self.containers.get_mut(&e.source) {
            c.remove_outgoing_edge(&e.id);
        }
        if let Some(c) = self.containers.get_mut(&e.target) {
            c.remove_incoming_edge(&e.id);
        }
    }
}
