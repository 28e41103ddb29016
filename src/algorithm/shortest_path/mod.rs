//! Single-source shortest paths over non-negative edge weights.
//!
//! [DijkstraShortestPath] answers point-to-point and single-source queries,
//! optionally bounded by a radius.
//! [ClosestFirstIterator] exposes the underlying traversal.

mod closest_first;
pub use self::closest_first::*;
mod tree_paths;
pub use self::tree_paths::*;
mod list_paths;
pub use self::list_paths::*;
mod dijkstra;
pub use self::dijkstra::*;

use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::GraphWalk;
use std::collections::HashMap;

/// Shortest paths from one fixed source to every vertex.
pub trait SingleSourcePaths<'a, G> {
    fn graph(&self) -> &'a G;
    fn source_vertex(&self) -> VertexId;

    /// `0.0` for the source, infinite when `target` is unreachable.
    fn weight(&self, target: &VertexId) -> f64;

    /// A singleton walk for the source, `None` when `target` is unreachable.
    fn path(&self, target: &VertexId) -> Option<GraphWalk<'a, G>>;
}

pub trait ShortestPathAlgorithm<'a, G>
where
    G: QueryableGraph + 'a,
{
    fn graph(&self) -> &'a G;

    /// `Ok(None)` when `sink` is unreachable.
    /// Fails if either vertex is not a member.
    fn path(&self, source: &VertexId, sink: &VertexId) -> Result<Option<GraphWalk<'a, G>>>;

    /// Infinite when `sink` is unreachable.
    fn path_weight(&self, source: &VertexId, sink: &VertexId) -> Result<f64> {
        Ok(self
            .path(source, sink)?
            .map_or(f64::INFINITY, |p| p.weight()))
    }

    /// Runs one point-to-point query per vertex.
    fn paths(&self, source: &VertexId) -> Result<Box<dyn SingleSourcePaths<'a, G> + 'a>> {
        let graph = self.graph();
        if !graph.contains_vertex(source) {
            return Err(Error::NoSuchVertex(*source));
        }
        let mut paths = HashMap::default();
        for v in graph.iter_vertices() {
            if let Some(p) = self.path(source, &v)? {
                paths.insert(v, p);
            }
        }
        Ok(Box::new(ListSingleSourcePaths::new(graph, *source, paths)))
    }
}
