use super::*;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::GraphWalk;
use log::debug;

/// Dijkstra's algorithm, optionally bounded by a radius.
///
/// Edge weights must be non-negative.
/// A negative weight is reported as [Error::NegativeEdgeWeight] once the traversal reaches it.
///
/// Targets farther than the radius are treated as unreachable.
///
/// ```
/// use pathgraph::algorithm::{DijkstraShortestPath, ShortestPathAlgorithm};
/// use pathgraph::graph::{Graph, VertexId};
///
/// # fn main() -> pathgraph::error::Result<()> {
/// let mut g: Graph<()> = Graph::simple_weighted_graph();
/// for v in 1..=3 {
///     g.add_vertex(VertexId(v));
/// }
/// g.add_weighted_edge(&VertexId(1), &VertexId(2), 1.0)?;
/// g.add_weighted_edge(&VertexId(2), &VertexId(3), 1.0)?;
/// g.add_weighted_edge(&VertexId(1), &VertexId(3), 5.0)?;
///
/// let dijkstra = DijkstraShortestPath::new(&g);
/// assert_eq!(dijkstra.path_weight(&VertexId(1), &VertexId(3))?, 2.0);
/// # Ok(())
/// # }
/// ```
pub struct DijkstraShortestPath<'a, G> {
    graph: &'a G,
    radius: f64,
}

impl<'a, G> DijkstraShortestPath<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            radius: f64::INFINITY,
        }
    }

    pub fn with_radius(graph: &'a G, radius: f64) -> Result<Self> {
        if !(radius >= 0.0) {
            return Err(Error::NegativeRadius(radius));
        }
        Ok(Self { graph, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// One-shot unbounded point-to-point query.
    pub fn find_path_between(
        graph: &'a G,
        source: &VertexId,
        sink: &VertexId,
    ) -> Result<Option<GraphWalk<'a, G>>> {
        Self::new(graph).path(source, sink)
    }

    fn iter_from(&self, source: &VertexId) -> Result<ClosestFirstIterator<'a, G>> {
        ClosestFirstIterator::new(self.graph, *source, Some(self.radius))
    }

    /// Exhausts the traversal from `source`.
    pub fn shortest_path_tree(&self, source: &VertexId) -> Result<TreeSingleSourcePaths<'a, G>> {
        let mut it = self.iter_from(source)?;
        debug!("shortest path tree from {:?}, radius {}", source, self.radius);
        let mut settled = 0usize;
        for v in it.by_ref() {
            v?;
            settled += 1;
        }
        debug!("shortest path tree from {:?} settled {} vertices", source, settled);
        Ok(it.into_paths())
    }
}

impl<'a, G> ShortestPathAlgorithm<'a, G> for DijkstraShortestPath<'a, G>
where
    G: QueryableGraph + 'a,
{
    fn graph(&self) -> &'a G {
        self.graph
    }

    /// Stops as soon as `sink` is settled.
    fn path(&self, source: &VertexId, sink: &VertexId) -> Result<Option<GraphWalk<'a, G>>> {
        if !self.graph.contains_vertex(source) {
            return Err(Error::NoSuchVertex(*source));
        }
        if !self.graph.contains_vertex(sink) {
            return Err(Error::NoSuchVertex(*sink));
        }
        if source == sink {
            return Ok(Some(GraphWalk::singleton(self.graph, *source, 0.0)));
        }
        let mut it = self.iter_from(source)?;
        debug!("shortest path {:?} -> {:?}, radius {}", source, sink, self.radius);
        for v in it.by_ref() {
            if v? == *sink {
                break;
            }
        }
        Ok(it.into_paths().path(sink))
    }

    fn paths(&self, source: &VertexId) -> Result<Box<dyn SingleSourcePaths<'a, G> + 'a>> {
        Ok(Box::new(self.shortest_path_tree(source)?))
    }
}
