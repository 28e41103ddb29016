//! Per-vertex adjacency bookkeeping, one variant per direction model.
//!
//! Every query returns `None` for a vertex that is not a member.
//! The graph façade turns that into [Error::NoSuchVertex](crate::error::Error::NoSuchVertex).

mod container;
mod directed;
mod undirected;

pub use self::directed::DirectedSpecifics;
pub use self::undirected::UndirectedSpecifics;

use crate::graph::*;

#[derive(Debug, Clone)]
pub enum Specifics {
    Directed(DirectedSpecifics),
    Undirected(UndirectedSpecifics),
}

impl Specifics {
    /// `None` for mixed types, which have no adjacency variant.
    pub fn for_type(t: &GraphType) -> Option<Self> {
        if t.is_directed() {
            Some(Specifics::Directed(DirectedSpecifics::new()))
        } else if t.is_undirected() {
            Some(Specifics::Undirected(UndirectedSpecifics::new()))
        } else {
            None
        }
    }

    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        match self {
            Specifics::Directed(s) => s.add_vertex(v),
            Specifics::Undirected(s) => s.add_vertex(v),
        }
    }

    pub fn remove_vertex(&mut self, v: &VertexId) -> bool {
        match self {
            Specifics::Directed(s) => s.remove_vertex(v),
            Specifics::Undirected(s) => s.remove_vertex(v),
        }
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        match self {
            Specifics::Directed(s) => s.contains_vertex(v),
            Specifics::Undirected(s) => s.contains_vertex(v),
        }
    }

    pub fn vertex_size(&self) -> usize {
        match self {
            Specifics::Directed(s) => s.vertex_size(),
            Specifics::Undirected(s) => s.vertex_size(),
        }
    }

    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self {
            Specifics::Directed(s) => s.iter_vertices(),
            Specifics::Undirected(s) => s.iter_vertices(),
        }
    }

    pub fn edges_connecting(
        &self,
        source: &VertexId,
        target: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        match self {
            Specifics::Directed(s) => s.edges_connecting(source, target),
            Specifics::Undirected(s) => s.edges_connecting(source, target),
        }
    }

    pub fn edges_of(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        match self {
            Specifics::Directed(s) => s.edges_of(v),
            Specifics::Undirected(s) => s.edges_of(v),
        }
    }

    /// For undirected graphs these are all touching edges.
    pub fn in_edges(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        match self {
            Specifics::Directed(s) => s.in_edges(v),
            Specifics::Undirected(s) => s.edges_of(v),
        }
    }

    /// For undirected graphs these are all touching edges.
    pub fn out_edges(&self, v: &VertexId) -> Option<Box<dyn Iterator<Item = Edge> + '_>> {
        match self {
            Specifics::Directed(s) => s.out_edges(v),
            Specifics::Undirected(s) => s.edges_of(v),
        }
    }

    pub fn degree_of(&self, v: &VertexId) -> Option<usize> {
        match self {
            Specifics::Directed(s) => s.degree_of(v),
            Specifics::Undirected(s) => s.degree_of(v),
        }
    }

    pub fn in_degree_of(&self, v: &VertexId) -> Option<usize> {
        match self {
            Specifics::Directed(s) => s.in_degree_of(v),
            Specifics::Undirected(s) => s.degree_of(v),
        }
    }

    pub fn out_degree_of(&self, v: &VertexId) -> Option<usize> {
        match self {
            Specifics::Directed(s) => s.out_degree_of(v),
            Specifics::Undirected(s) => s.degree_of(v),
        }
    }

    pub fn add_edge_to_touching_vertices(&mut self, e: &Edge) {
        match self {
            Specifics::Directed(s) => s.add_edge_to_touching_vertices(e),
            Specifics::Undirected(s) => s.add_edge_to_touching_vertices(e),
        }
    }

    pub fn remove_edge_from_touching_vertices(&mut self, e: &Edge) {
        match self {
            Specifics::Directed(s) => s.remove_edge_from_touching_vertices(e),
            Specifics::Undirected(s) => s.remove_edge_from_touching_vertices(e),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Specifics::Directed(s) => *s = DirectedSpecifics::new(),
            Specifics::Undirected(s) => *s = UndirectedSpecifics::new(),
        }
    }
}
