use super::SingleSourcePaths;
use crate::graph::*;
use crate::path::GraphWalk;
use ahash::RandomState;
use std::collections::HashMap;

/// Single-source paths stored one walk per reachable target.
pub struct ListSingleSourcePaths<'a, G> {
    graph: &'a G,
    source: VertexId,
    paths: HashMap<VertexId, GraphWalk<'a, G>, RandomState>,
}

impl<'a, G> ListSingleSourcePaths<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(
        graph: &'a G,
        source: VertexId,
        paths: HashMap<VertexId, GraphWalk<'a, G>, RandomState>,
    ) -> Self {
        Self {
            graph,
            source,
            paths,
        }
    }
}

impl<'a, G> SingleSourcePaths<'a, G> for ListSingleSourcePaths<'a, G>
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
        match self.paths.get(target) {
            Some(p) => p.weight(),
            None if *target == self.source => 0.0,
            None => f64::INFINITY,
        }
    }

    fn path(&self, target: &VertexId) -> Option<GraphWalk<'a, G>> {
        match self.paths.get(target) {
            Some(p) => Some(p.clone()),
            None if *target == self.source => Some(GraphWalk::singleton(self.graph, self.source, 0.0)),
            None => None,
        }
    }
}
