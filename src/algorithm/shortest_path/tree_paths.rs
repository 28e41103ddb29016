use super::{DistanceAndPredecessorMap, SingleSourcePaths};
use crate::graph::*;
use crate::path::GraphWalk;

/// Single-source paths stored as a shortest-path tree.
///
/// Each reached vertex records its distance and the edge it was reached by.
/// Walks are rebuilt on demand by following those edges back to the source.
pub struct TreeSingleSourcePaths<'a, G> {
    graph: &'a G,
    source: VertexId,
    map: DistanceAndPredecessorMap,
}

impl<'a, G> TreeSingleSourcePaths<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G, source: VertexId, map: DistanceAndPredecessorMap) -> Self {
        Self { graph, source, map }
    }

    pub fn distance_and_predecessor_map(&self) -> &DistanceAndPredecessorMap {
        &self.map
    }
}

impl<'a, G> SingleSourcePaths<'a, G> for TreeSingleSourcePaths<'a, G>
where
    G: QueryableGraph,
{
    fn graph(&self) -> &'a G {
        self.graph
    }

    fn source_vertex(&self) -> VertexId {
        self.source
    }

    fn weight(&self, target: &VertexId) -> f64 {
        match self.map.get(target) {
            Some((d, _)) => *d,
            None if *target == self.source => 0.0,
            None => f64::INFINITY,
        }
    }

    fn path(&self, target: &VertexId) -> Option<GraphWalk<'a, G>> {
        if *target == self.source {
            return Some(GraphWalk::singleton(self.graph, self.source, 0.0));
        }
        let (distance, _) = *self.map.get(target)?;
        let mut edges = Vec::new();
        let mut cur = *target;
        while cur != self.source {
            let e = match self.map.get(&cur) {
                Some((_, Some(e))) => *e,
                _ => break,
            };
            edges.push(e.id);
            cur = match e.opposite(&cur) {
                Some(x) => x,
                None => break,
            };
        }
        edges.reverse();
        Some(GraphWalk::from_edges(
            self.graph,
            self.source,
            *target,
            edges,
            distance,
        ))
    }
}
