use crate::graph::*;

/// Edges touching one vertex of a directed graph.
#[derive(Debug, Clone, Default)]
pub struct DirectedEdgeContainer {
    outgoing: Vec<Edge>,
    incoming: Vec<Edge>,
}

impl DirectedEdgeContainer {
    pub fn outgoing(&self) -> &[Edge] {
        &self.outgoing
    }

    pub fn incoming(&self) -> &[Edge] {
        &self.incoming
    }

    pub fn add_outgoing_edge(&mut self, e: Edge) {
        self.outgoing.push(e);
    }

    pub fn add_incoming_edge(&mut self, e: Edge) {
        self.incoming.push(e);
    }

    pub fn remove_outgoing_edge(&mut self, e: &EdgeId) {
        remove_by_id(&mut self.outgoing, e);
    }

    pub fn remove_incoming_edge(&mut self, e: &EdgeId) {
        remove_by_id(&mut self.incoming, e);
    }
}

/// Edges touching one vertex of an undirected graph.
///
/// A self-loop is recorded once.
#[derive(Debug, Clone, Default)]
pub struct UndirectedEdgeContainer {
    edges: Vec<Edge>,
}

impl UndirectedEdgeContainer {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, e: Edge) {
        self.edges.push(e);
    }

    pub fn remove_edge(&mut self, e: &EdgeId) {
        remove_by_id(&mut self.edges, e);
    }
}

// Silent when absent. Keeps insertion order of the remaining edges.
fn remove_by_id(edges: &mut Vec<Edge>, e: &EdgeId) {
    if let Some(idx) = edges.iter().position(|x| x.id == *e) {
        edges.remove(idx);
    }
}
