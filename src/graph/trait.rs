use crate::error::Result;
use crate::graph::*;

/// Read access to a graph.
///
/// Queries about a specific vertex fail with
/// [Error::NoSuchVertex](crate::error::Error::NoSuchVertex) when the vertex is not a member.
/// Queries about a pair of vertices instead return nothing.
pub trait QueryableGraph {
    fn graph_type(&self) -> GraphType;

    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;

    /// `1.0` for every edge of an unweighted graph.
    fn edge_weight(&self, e: &EdgeId) -> Result<f64>;

    /// All edges from `source` to `target`.
    /// In undirected graphs, either orientation matches.
    ///
    /// Empty if either vertex is absent.
    fn edges_connecting(
        &self,
        source: &VertexId,
        target: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// The first of [QueryableGraph::edges_connecting].
    fn edge_connecting(&self, source: &VertexId, target: &VertexId) -> Option<Edge> {
        self.edges_connecting(source, target).next()
    }

    fn contains_edge_between(&self, source: &VertexId, target: &VertexId) -> bool {
        self.edge_connecting(source, target).is_some()
    }

    /// Every edge touching `v`, each once.
    fn edges_of(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = Edge> + '_>>;
    fn in_edges(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = Edge> + '_>>;
    fn out_edges(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = Edge> + '_>>;

    fn degree_of(&self, v: &VertexId) -> Result<usize>;
    fn in_degree_of(&self, v: &VertexId) -> Result<usize>;
    fn out_degree_of(&self, v: &VertexId) -> Result<usize>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
