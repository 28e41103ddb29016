//! A reference graph backed by petgraph, with IDs mapped through bimaps.

use crate::graph::*;
use bimap::BiHashMap;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Undirected};
use std::collections::HashMap;

pub struct MappedStableGraph<Ty: EdgeType> {
    pub graph: StableGraph<VertexId, f64, Ty>,
    pub vmap: BiHashMap<VertexId, NodeIndex>,
    pub emap: BiHashMap<EdgeId, EdgeIndex>,
}

impl<Ty: EdgeType> MappedStableGraph<Ty> {
    fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            vmap: BiHashMap::new(),
            emap: BiHashMap::new(),
        }
    }

    fn add_vertex(&mut self, v: VertexId) {
        let n = self.graph.add_node(v);
        self.vmap.insert(v, n);
    }

    fn remove_vertex(&mut self, v: &VertexId) {
        if let Some((_, n)) = self.vmap.remove_by_left(v) {
            self.graph.remove_node(n);
        }
        let stale: Vec<EdgeId> = self
            .emap
            .iter()
            .filter(|(_, ix)| self.graph.edge_weight(**ix).is_none())
            .map(|(e, _)| *e)
            .collect();
        for e in stale {
            self.emap.remove_by_left(&e);
        }
    }

    fn add_edge(&mut self, s: VertexId, t: VertexId, e: EdgeId, w: f64) {
        if let (Some(ls), Some(lt)) = (self.vmap.get_by_left(&s), self.vmap.get_by_left(&t)) {
            let ix = self.graph.add_edge(*ls, *lt, w);
            self.emap.insert(e, ix);
        }
    }

    fn remove_edge(&mut self, e: &EdgeId) -> bool {
        match self.emap.remove_by_left(e) {
            Some((_, ix)) => self.graph.remove_edge(ix).is_some(),
            None => false,
        }
    }

    fn endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        let ix = self.emap.get_by_left(e)?;
        let (s, t) = self.graph.edge_endpoints(*ix)?;
        Some((self.graph[s], self.graph[t]))
    }

    fn distances(&self, source: &VertexId) -> HashMap<VertexId, f64> {
        let n = match self.vmap.get_by_left(source) {
            Some(n) => *n,
            None => return HashMap::new(),
        };
        petgraph::algo::dijkstra(&self.graph, n, None, |e| *e.weight())
            .into_iter()
            .map(|(n, d)| (self.graph[n], d))
            .collect()
    }
}

/// Either a directed or an undirected reference graph.
pub enum Oracle {
    Directed(MappedStableGraph<Directed>),
    Undirected(MappedStableGraph<Undirected>),
}

macro_rules! dispatch {
    ($self:ident, $g:ident => $body:expr) => {
        match $self {
            Oracle::Directed($g) => $body,
            Oracle::Undirected($g) => $body,
        }
    };
}

impl Oracle {
    pub fn new(directed: bool) -> Self {
        if directed {
            Oracle::Directed(MappedStableGraph::new())
        } else {
            Oracle::Undirected(MappedStableGraph::new())
        }
    }

    pub fn add_vertex(&mut self, v: VertexId) {
        dispatch!(self, g => g.add_vertex(v))
    }

    pub fn remove_vertex(&mut self, v: &VertexId) {
        dispatch!(self, g => g.remove_vertex(v))
    }

    pub fn add_edge(&mut self, s: VertexId, t: VertexId, e: EdgeId, w: f64) {
        dispatch!(self, g => g.add_edge(s, t, e, w))
    }

    pub fn remove_edge(&mut self, e: &EdgeId) -> bool {
        dispatch!(self, g => g.remove_edge(e))
    }

    pub fn vertex_size(&self) -> usize {
        dispatch!(self, g => g.graph.node_count())
    }

    pub fn edge_size(&self) -> usize {
        dispatch!(self, g => g.graph.edge_count())
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        dispatch!(self, g => g.vmap.contains_left(v))
    }

    /// Stored as given, also for undirected graphs.
    pub fn endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        dispatch!(self, g => g.endpoints(e))
    }

    /// Counts of edges ending at `v`, starting at `v` and looping at `v`.
    pub fn degrees(&self, v: &VertexId) -> (usize, usize, usize) {
        let ends: Vec<(VertexId, VertexId)> = dispatch!(self, g => g
            .emap
            .iter()
            .filter_map(|(e, _)| g.endpoints(e))
            .collect());
        let ins = ends.iter().filter(|(_, t)| t == v).count();
        let outs = ends.iter().filter(|(s, _)| s == v).count();
        let loops = ends.iter().filter(|(s, t)| s == v && t == v).count();
        (ins, outs, loops)
    }

    /// Shortest distances from `source` to every reachable vertex.
    pub fn distances(&self, source: &VertexId) -> HashMap<VertexId, f64> {
        dispatch!(self, g => g.distances(source))
    }
}
