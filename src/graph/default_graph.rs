use super::edge_specifics::EdgeSpecifics;
use super::specifics::Specifics;
use crate::error::{Error, Result};
use crate::graph::*;
use ahash::RandomState;
use log::{debug, trace};
use std::collections::HashMap;

/// An in-memory graph whose shape is fixed by its [GraphType].
///
/// Vertices carry a payload of type `V`.
/// Adjacency is indexed per vertex, directed or undirected depending on the type.
/// Edges are registered in a hash map, with weights when the type is weighted.
///
/// |                    | Complexity                                                                |
/// | ------------------ | ------------------------------------------------------------------------- |
/// | `add_vertex`       | $O(\log \|V\|)$                                                           |
/// | `add_edge`         | $O(\log \|V\|)$, plus $O(d^+)$ when multiple edges are disallowed          |
/// | `remove_edge`      | $O(\log \|V\| + d)$, $d$ the degree of its endpoints                      |
/// | `remove_vertex`    | $O(\log \|V\| + d^2)$                                                     |
/// | `contains_edge`    | $O(1)$                                                                    |
/// | `edges_connecting` | $O(\log \|V\| + d^+)$                                                     |
pub struct Graph<V> {
    graph_type: GraphType,
    values: HashMap<VertexId, V, RandomState>,
    specifics: Specifics,
    edge_specifics: EdgeSpecifics,
    vertex_supplier: Option<Box<dyn Supplier<Vertex<V>> + Send + Sync>>,
    edge_ids: Box<dyn Supplier<EdgeId> + Send + Sync>,
}

impl<V> Graph<V> {
    /// Fails with [Error::Unsupported] for mixed graph types.
    pub fn new(graph_type: GraphType) -> Result<Self> {
        let specifics = Specifics::for_type(&graph_type)
            .ok_or(Error::Unsupported("mixed graphs have no adjacency representation"))?;
        Ok(Self::assemble(graph_type, specifics))
    }

    pub(crate) fn assemble(graph_type: GraphType, specifics: Specifics) -> Self {
        debug!("new graph: {}", graph_type);
        Self {
            graph_type,
            values: HashMap::default(),
            specifics,
            edge_specifics: EdgeSpecifics::for_type(&graph_type),
            vertex_supplier: None,
            edge_ids: Box::new(EdgeIdFactory::new()),
        }
    }

    /// Lets [Graph::add_vertex_from_supplier] generate vertices.
    pub fn with_vertex_supplier<S>(mut self, supplier: S) -> Self
    where
        S: Supplier<Vertex<V>> + Send + Sync + 'static,
    {
        self.vertex_supplier = Some(Box::new(supplier));
        self
    }

    /// Replaces the source of IDs for edges created by [Graph::add_edge].
    pub fn with_edge_ids<S>(mut self, ids: S) -> Self
    where
        S: Supplier<EdgeId> + Send + Sync + 'static,
    {
        self.edge_ids = Box::new(ids);
        self
    }

    fn assert_vertex_exist(&self, v: &VertexId) -> Result<()> {
        if self.specifics.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::NoSuchVertex(*v))
        }
    }

    /// Returns `None` without mutation if the vertex is already a member.
    pub fn add_vertex(&mut self, v: impl Into<Vertex<V>>) -> Option<VertexId> {
        let Vertex { id, value } = v.into();
        if !self.specifics.add_vertex(id) {
            return None;
        }
        self.values.insert(id, value);
        Some(id)
    }

    pub fn add_vertex_from_supplier(&mut self) -> Result<VertexId> {
        let supplier = self
            .vertex_supplier
            .as_mut()
            .ok_or(Error::Unsupported("graph has no vertex supplier"))?;
        let v = supplier.supply();
        let id = v.id;
        self.add_vertex(v).ok_or_else(|| {
            Error::InvalidArgument(format!("supplied vertex {:?} is already a member", id))
        })
    }

    pub fn vertex_value(&self, v: &VertexId) -> Option<&V> {
        self.values.get(v)
    }

    pub fn vertex_value_mut(&mut self, v: &VertexId) -> Option<&mut V> {
        self.values.get_mut(v)
    }

    fn check_edge_admission(&self, source: &VertexId, target: &VertexId) -> Result<bool> {
        self.assert_vertex_exist(source)?;
        self.assert_vertex_exist(target)?;
        if !self.graph_type.is_allowing_multiple_edges()
            && self.contains_edge_between(source, target)
        {
            return Ok(false);
        }
        if source == target && !self.graph_type.is_allowing_self_loops() {
            return Err(Error::LoopsNotAllowed(*source));
        }
        Ok(true)
    }

    fn admit_edge(&mut self, id: EdgeId, source: VertexId, target: VertexId) -> Option<EdgeId> {
        let e = self.edge_specifics.add(id, source, target)?;
        self.specifics.add_edge_to_touching_vertices(&e);
        trace!("add {:?}: {:?} -> {:?}", id, source, target);
        Some(id)
    }

    /// Adds an edge with a freshly generated ID.
    ///
    /// Returns `Ok(None)` without mutation when multiple edges are disallowed
    /// and `source` is already connected to `target`.
    pub fn add_edge(&mut self, source: &VertexId, target: &VertexId) -> Result<Option<EdgeId>> {
        if !self.check_edge_admission(source, target)? {
            return Ok(None);
        }
        let id = loop {
            let id = self.edge_ids.supply();
            if !self.edge_specifics.contains(&id) {
                break id;
            }
        };
        Ok(self.admit_edge(id, *source, *target))
    }

    /// Adds an edge identified by `id`.
    ///
    /// Returns `Ok(None)` without mutation when `id` is already registered,
    /// or when multiple edges are disallowed and the vertices are already connected.
    pub fn add_edge_with_id(
        &mut self,
        source: &VertexId,
        target: &VertexId,
        id: EdgeId,
    ) -> Result<Option<EdgeId>> {
        if !self.check_edge_admission(source, target)? {
            return Ok(None);
        }
        Ok(self.admit_edge(id, *source, *target))
    }

    /// Fails with [Error::Unsupported] on unweighted graphs, before touching anything.
    pub fn add_weighted_edge(
        &mut self,
        source: &VertexId,
        target: &VertexId,
        weight: f64,
    ) -> Result<Option<EdgeId>> {
        if !self.edge_specifics.is_weighted() {
            return Err(Error::Unsupported(
                "edge weights cannot be set on an unweighted graph",
            ));
        }
        let id = self.add_edge(source, target)?;
        if let Some(id) = id {
            self.edge_specifics.set_edge_weight(&id, weight)?;
        }
        Ok(id)
    }

    pub fn set_edge_weight(&mut self, e: &EdgeId, weight: f64) -> Result<()> {
        self.edge_specifics.set_edge_weight(e, weight)
    }

    pub fn remove_edge(&mut self, e: &EdgeId) -> Option<Edge> {
        let edge = self.edge_specifics.remove(e)?;
        self.specifics.remove_edge_from_touching_vertices(&edge);
        trace!("remove {:?}", e);
        Some(edge)
    }

    /// Removes the first edge from `source` to `target`, if any.
    pub fn remove_edge_between(&mut self, source: &VertexId, target: &VertexId) -> Option<Edge> {
        let e = self.edge_connecting(source, target)?;
        self.remove_edge(&e.id)
    }

    pub fn remove_all_edges_between(&mut self, source: &VertexId, target: &VertexId) -> Vec<Edge> {
        let ids: Vec<EdgeId> = self
            .edges_connecting(source, target)
            .map(|e| e.id)
            .collect();
        ids.iter().filter_map(|e| self.remove_edge(e)).collect()
    }

    /// Whether any of `edges` was removed.
    pub fn remove_all_edges<I>(&mut self, edges: I) -> bool
    where
        I: IntoIterator<Item = EdgeId>,
    {
        let mut changed = false;
        for e in edges {
            changed |= self.remove_edge(&e).is_some();
        }
        changed
    }

    /// Removes `v` and every edge touching it.
    pub fn remove_vertex(&mut self, v: &VertexId) -> bool {
        let touching: Vec<EdgeId> = match self.specifics.edges_of(v) {
            Some(it) => it.map(|e| e.id).collect(),
            None => return false,
        };
        self.remove_all_edges(touching);
        self.specifics.remove_vertex(v);
        self.values.remove(v);
        trace!("remove {:?}", v);
        true
    }

    /// Whether any of `vertices` was removed.
    pub fn remove_all_vertices<I>(&mut self, vertices: I) -> bool
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut changed = false;
        for v in vertices {
            changed |= self.remove_vertex(&v);
        }
        changed
    }

    /// Removes all vertices and edges. Suppliers are kept.
    pub fn clear(&mut self) {
        self.specifics.clear();
        self.edge_specifics.clear();
        self.values.clear();
    }
}

impl<V> QueryableGraph for Graph<V> {
    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn vertex_size(&self) -> usize {
        self.specifics.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.specifics.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.specifics.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.edge_specifics.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.edge_specifics.iter()
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edge_specifics.contains(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edge_specifics.find(e)
    }

    fn edge_weight(&self, e: &EdgeId) -> Result<f64> {
        self.edge_specifics.edge_weight(e)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        target: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.specifics.edges_connecting(source, target)
    }

    fn edges_of(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = Edge> + '_>> {
        self.specifics.edges_of(v).ok_or(Error::NoSuchVertex(*v))
    }

    fn in_edges(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = Edge> + '_>> {
        self.specifics.in_edges(v).ok_or(Error::NoSuchVertex(*v))
    }

    fn out_edges(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = Edge> + '_>> {
        self.specifics.out_edges(v).ok_or(Error::NoSuchVertex(*v))
    }

    fn degree_of(&self, v: &VertexId) -> Result<usize> {
        self.specifics.degree_of(v).ok_or(Error::NoSuchVertex(*v))
    }

    fn in_degree_of(&self, v: &VertexId) -> Result<usize> {
        self.specifics.in_degree_of(v).ok_or(Error::NoSuchVertex(*v))
    }

    fn out_degree_of(&self, v: &VertexId) -> Result<usize> {
        self.specifics.out_degree_of(v).ok_or(Error::NoSuchVertex(*v))
    }
}

impl<V> std::fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
