use super::utils;
use crate::error::Result;
use crate::graph::*;

/// Fluent construction of a [Graph].
///
/// ```
/// use pathgraph::graph::{builder::GraphBuilder, Graph, QueryableGraph, VertexId};
///
/// # fn main() -> pathgraph::error::Result<()> {
/// let g = GraphBuilder::new(Graph::<()>::simple_directed_graph())
///     .add_edge_chain(&[VertexId(1), VertexId(2), VertexId(3)])?
///     .build();
/// assert_eq!(g.edge_size(), 2);
/// # Ok(())
/// # }
/// ```
pub struct GraphBuilder<V> {
    graph: Graph<V>,
}

impl<V> GraphBuilder<V> {
    pub fn new(graph: Graph<V>) -> Self {
        Self { graph }
    }

    pub fn add_vertex(mut self, v: impl Into<Vertex<V>>) -> Self {
        self.graph.add_vertex(v);
        self
    }

    pub fn add_vertices<I>(mut self, vs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Vertex<V>>,
    {
        for v in vs {
            self.graph.add_vertex(v);
        }
        self
    }

    pub fn remove_vertex(mut self, v: &VertexId) -> Self {
        self.graph.remove_vertex(v);
        self
    }

    pub fn remove_vertices<'a, I>(mut self, vs: I) -> Self
    where
        I: IntoIterator<Item = &'a VertexId>,
    {
        for v in vs {
            self.graph.remove_vertex(v);
        }
        self
    }

    pub fn remove_edge(mut self, e: &EdgeId) -> Self {
        self.graph.remove_edge(e);
        self
    }

    pub fn remove_edge_between(mut self, source: &VertexId, target: &VertexId) -> Self {
        self.graph.remove_edge_between(source, target);
        self
    }

    pub fn build(self) -> Graph<V> {
        self.graph
    }
}

/// Edge steps add missing endpoints with a default payload.
impl<V> GraphBuilder<V>
where
    V: Default,
{
    pub fn add_edge(mut self, source: VertexId, target: VertexId) -> Result<Self> {
        utils::add_edge_with_vertices(&mut self.graph, source, target, None)?;
        Ok(self)
    }

    pub fn add_weighted_edge(mut self, source: VertexId, target: VertexId, weight: f64) -> Result<Self> {
        utils::add_edge_with_vertices(&mut self.graph, source, target, Some(weight))?;
        Ok(self)
    }

    pub fn add_edge_with_id(mut self, source: VertexId, target: VertexId, id: EdgeId) -> Result<Self> {
        utils::check_new_edge(&self.graph, &source, &target, false)?;
        utils::ensure_vertices(&mut self.graph, &[source, target]);
        self.graph.add_edge_with_id(&source, &target, id)?;
        Ok(self)
    }

    /// Connects consecutive vertices of `chain`.
    pub fn add_edge_chain(mut self, chain: &[VertexId]) -> Result<Self> {
        for w in chain.windows(2) {
            self = self.add_edge(w[0], w[1])?;
        }
        Ok(self)
    }
}

impl<V> GraphBuilder<V>
where
    V: Clone,
{
    pub fn add_graph(mut self, src: &Graph<V>) -> Result<Self> {
        utils::add_graph(&mut self.graph, src)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: usize) -> VertexId {
        VertexId(x)
    }

    #[test]
    fn vertices() {
        let g = GraphBuilder::new(Graph::<()>::default_directed_graph())
            .add_vertex(v(1))
            .remove_vertex(&v(1))
            .add_vertices(vec![v(1), v(2)])
            .build();
        assert_eq!(g.vertex_size(), 2);
        let g = GraphBuilder::new(g).remove_vertices(&[v(1), v(2)]).build();
        assert_eq!(g.vertex_size(), 0);
    }

    #[test]
    fn edges() {
        let g = GraphBuilder::new(Graph::<()>::default_directed_graph())
            .add_edge(v(1), v(2))
            .unwrap()
            .build();
        assert_eq!(g.edge_size(), 1);

        let g = GraphBuilder::new(Graph::<()>::default_directed_graph())
            .add_edge_with_id(v(1), v(2), EdgeId(7))
            .unwrap()
            .remove_edge_between(&v(1), &v(2))
            .build();
        assert_eq!(g.edge_size(), 0);

        let g = GraphBuilder::new(g)
            .add_edge_with_id(v(1), v(2), EdgeId(7))
            .unwrap()
            .remove_edge(&EdgeId(7))
            .build();
        assert_eq!(g.edge_size(), 0);
        assert_eq!(g.vertex_size(), 2);
    }

    #[test]
    fn chain_and_weights() {
        let g = GraphBuilder::new(Graph::<()>::default_directed_graph())
            .add_edge_chain(&[v(1), v(2), v(3), v(3)])
            .unwrap()
            .build();
        assert_eq!(g.edge_size(), 3);

        let g = GraphBuilder::new(Graph::<()>::simple_directed_weighted_graph())
            .add_weighted_edge(v(1), v(2), 0.5)
            .unwrap()
            .build();
        let e = g.edge_connecting(&v(1), &v(2)).unwrap();
        assert_eq!(g.edge_weight(&e.id), Ok(0.5));

        let unweighted = GraphBuilder::new(Graph::<()>::simple_graph()).add_weighted_edge(v(1), v(2), 0.5);
        assert!(unweighted.is_err());

        let looped = GraphBuilder::new(Graph::<()>::simple_graph()).add_edge_with_id(v(1), v(1), EdgeId(0));
        assert!(looped.is_err());
    }

    #[test]
    fn merge() {
        let mut other: Graph<()> = Graph::default_directed_graph();
        other.add_vertex(v(3));
        other.add_vertex(v(4));
        other.add_edge_with_id(&v(3), &v(4), EdgeId(100)).unwrap();
        let g = GraphBuilder::new(Graph::<()>::default_directed_graph())
            .add_edge(v(1), v(2))
            .unwrap()
            .add_graph(&other)
            .unwrap()
            .build();
        assert_eq!(g.edge_size(), 2);
        assert_eq!(g.vertex_size(), 4);
    }
}
