use super::specifics::*;
use crate::graph::*;

/// Constructors for every supported graph shape.
///
/// None of these can fail, since none of them is mixed.
impl<V> Graph<V> {
    fn undirected(t: GraphType) -> Self {
        Self::assemble(t, Specifics::Undirected(UndirectedSpecifics::new()))
    }

    fn directed(t: GraphType) -> Self {
        Self::assemble(t, Specifics::Directed(DirectedSpecifics::new()))
    }

    /// Undirected, no self-loops, no multiple edges.
    pub fn simple_graph() -> Self {
        Self::undirected(GraphType::simple())
    }

    pub fn simple_weighted_graph() -> Self {
        Self::undirected(GraphType::simple().as_weighted())
    }

    /// Undirected, multiple edges but no self-loops.
    pub fn multigraph() -> Self {
        Self::undirected(GraphType::multigraph())
    }

    pub fn weighted_multigraph() -> Self {
        Self::undirected(GraphType::multigraph().as_weighted())
    }

    /// Undirected, self-loops and multiple edges.
    pub fn pseudograph() -> Self {
        Self::undirected(GraphType::pseudograph())
    }

    pub fn weighted_pseudograph() -> Self {
        Self::undirected(GraphType::pseudograph().as_weighted())
    }

    pub fn simple_directed_graph() -> Self {
        Self::directed(GraphType::directed_simple())
    }

    pub fn simple_directed_weighted_graph() -> Self {
        Self::directed(GraphType::directed_simple().as_weighted())
    }

    /// Directed, self-loops but no multiple edges.
    pub fn default_directed_graph() -> Self {
        Self::directed(
            GraphTypeBuilder::default()
                .directed()
                .allow_self_loops(true)
                .allow_multiple_edges(false)
                .weighted(false)
                .build(),
        )
    }

    pub fn directed_multigraph() -> Self {
        Self::directed(GraphType::directed_multigraph())
    }

    pub fn directed_weighted_multigraph() -> Self {
        Self::directed(GraphType::directed_multigraph().as_weighted())
    }

    pub fn directed_pseudograph() -> Self {
        Self::directed(GraphType::directed_pseudograph())
    }

    pub fn directed_weighted_pseudograph() -> Self {
        Self::directed(GraphType::directed_pseudograph().as_weighted())
    }
}
