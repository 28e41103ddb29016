//! Compositions of the core graph operations.

use crate::error::{Error, Result};
use crate::graph::*;

/// Vertices on the other side of every edge touching `v`.
///
/// A neighbor connected by several edges shows up once per edge.
/// A self-loop lists `v` itself.
pub fn neighbors_of<G>(graph: &G, v: &VertexId) -> Result<Vec<VertexId>>
where
    G: QueryableGraph,
{
    Ok(graph
        .edges_of(v)?
        .filter_map(|e| e.opposite(v))
        .collect())
}

/// Sources of edges entering `v`. Same as [neighbors_of] for undirected graphs.
pub fn predecessors_of<G>(graph: &G, v: &VertexId) -> Result<Vec<VertexId>>
where
    G: QueryableGraph,
{
    if !graph.graph_type().is_directed() {
        return neighbors_of(graph, v);
    }
    Ok(graph.in_edges(v)?.map(|e| e.source).collect())
}

/// Targets of edges leaving `v`. Same as [neighbors_of] for undirected graphs.
pub fn successors_of<G>(graph: &G, v: &VertexId) -> Result<Vec<VertexId>>
where
    G: QueryableGraph,
{
    if !graph.graph_type().is_directed() {
        return neighbors_of(graph, v);
    }
    Ok(graph.out_edges(v)?.map(|e| e.target).collect())
}

pub fn vertex_has_successors<G>(graph: &G, v: &VertexId) -> Result<bool>
where
    G: QueryableGraph,
{
    Ok(!successors_of(graph, v)?.is_empty())
}

pub fn vertex_has_predecessors<G>(graph: &G, v: &VertexId) -> Result<bool>
where
    G: QueryableGraph,
{
    Ok(!predecessors_of(graph, v)?.is_empty())
}

fn copy_weight<V, W>(dest: &mut Graph<V>, src: &Graph<W>, to: &EdgeId, from: &EdgeId) -> Result<()> {
    if dest.graph_type().is_weighted() && src.graph_type().is_weighted() {
        let w = src.edge_weight(from)?;
        dest.set_edge_weight(to, w)?;
    }
    Ok(())
}

/// Copies every vertex and edge of `src` into `dest`.
///
/// Edges keep their IDs. Weights are copied when both graphs are weighted.
/// Returns whether `dest` changed.
pub fn add_graph<V>(dest: &mut Graph<V>, src: &Graph<V>) -> Result<bool>
where
    V: Clone,
{
    let mut changed = false;
    for v in src.iter_vertices() {
        if let Some(value) = src.vertex_value(&v) {
            changed |= dest.add_vertex((v, value.clone())).is_some();
        }
    }
    for e in src.iter_edges() {
        if let Some(id) = dest.add_edge_with_id(&e.source, &e.target, e.id)? {
            copy_weight(dest, src, &id, &e.id)?;
            changed = true;
        }
    }
    Ok(changed)
}

/// Copies `src` into `dest` with every edge turned around.
///
/// Both graphs must be directed. Reversed edges get fresh IDs from `dest`.
pub fn add_graph_reversed<V>(dest: &mut Graph<V>, src: &Graph<V>) -> Result<bool>
where
    V: Clone,
{
    if !src.graph_type().is_directed() || !dest.graph_type().is_directed() {
        return Err(Error::InvalidArgument(
            "graph must be directed".to_owned(),
        ));
    }
    let mut changed = false;
    for v in src.iter_vertices() {
        if let Some(value) = src.vertex_value(&v) {
            changed |= dest.add_vertex((v, value.clone())).is_some();
        }
    }
    for e in src.iter_edges() {
        if let Some(id) = dest.add_edge(&e.target, &e.source)? {
            copy_weight(dest, src, &id, &e.id)?;
            changed = true;
        }
    }
    Ok(changed)
}

/// Removes `v`, connecting each of its predecessors to each of its successors.
///
/// For undirected graphs every pair of distinct neighbors gets connected.
/// Pairs that would form a disallowed self-loop are skipped.
/// Returns `false` if `v` is not a member.
pub fn remove_vertex_and_preserve_connectivity<V>(graph: &mut Graph<V>, v: &VertexId) -> Result<bool> {
    if !graph.contains_vertex(v) {
        return Ok(false);
    }
    let loops = graph.graph_type().is_allowing_self_loops();
    let pairs: Vec<(VertexId, VertexId)> = if graph.graph_type().is_directed() {
        let preds: Vec<_> = predecessors_of(graph, v)?
            .into_iter()
            .filter(|x| x != v)
            .collect();
        let succs: Vec<_> = successors_of(graph, v)?
            .into_iter()
            .filter(|x| x != v)
            .collect();
        let mut pairs = Vec::with_capacity(preds.len() * succs.len());
        for p in preds.iter() {
            for s in succs.iter() {
                pairs.push((*p, *s));
            }
        }
        pairs
    } else {
        let ns: Vec<_> = neighbors_of(graph, v)?
            .into_iter()
            .filter(|x| x != v)
            .collect();
        let mut pairs = Vec::new();
        for (i, a) in ns.iter().enumerate() {
            for b in ns[i + 1..].iter() {
                pairs.push((*a, *b));
            }
        }
        pairs
    };
    for (a, b) in pairs {
        if a == b && !loops {
            continue;
        }
        graph.add_edge(&a, &b)?;
    }
    graph.remove_vertex(v);
    Ok(true)
}

/// Fails as [Graph::add_edge] would once both endpoints are members.
pub(crate) fn check_new_edge<V>(
    graph: &Graph<V>,
    source: &VertexId,
    target: &VertexId,
    weighted: bool,
) -> Result<()> {
    if weighted && !graph.graph_type().is_weighted() {
        return Err(Error::Unsupported(
            "edge weights cannot be set on an unweighted graph",
        ));
    }
    if source == target && !graph.graph_type().is_allowing_self_loops() {
        return Err(Error::LoopsNotAllowed(*source));
    }
    Ok(())
}

pub(crate) fn ensure_vertices<V>(graph: &mut Graph<V>, vs: &[VertexId])
where
    V: Default,
{
    for v in vs {
        if !graph.contains_vertex(v) {
            graph.add_vertex((*v, V::default()));
        }
    }
}

/// Adds an edge, adding missing endpoints first with a default payload.
///
/// A `weight` on an unweighted graph fails with [Error::Unsupported].
/// Nothing is added when the edge is rejected.
pub fn add_edge_with_vertices<V>(
    graph: &mut Graph<V>,
    source: VertexId,
    target: VertexId,
    weight: Option<f64>,
) -> Result<Option<EdgeId>>
where
    V: Default,
{
    check_new_edge(graph, &source, &target, weight.is_some())?;
    ensure_vertices(graph, &[source, target]);
    match weight {
        Some(w) => graph.add_weighted_edge(&source, &target, w),
        None => graph.add_edge(&source, &target),
    }
}

/// Adds an edge from `source` to each of `targets`.
/// Missing vertices are added with a default payload.
///
/// Nothing is added if any of the edges would be rejected.
pub fn add_outgoing_edges<V, I>(graph: &mut Graph<V>, source: VertexId, targets: I) -> Result<()>
where
    V: Default,
    I: IntoIterator<Item = VertexId>,
{
    let pairs: Vec<_> = targets.into_iter().map(|t| (source, t)).collect();
    add_edges_with_vertices(graph, &pairs)
}

/// Adds an edge from each of `sources` to `target`.
/// Missing vertices are added with a default payload.
///
/// Nothing is added if any of the edges would be rejected.
pub fn add_incoming_edges<V, I>(graph: &mut Graph<V>, target: VertexId, sources: I) -> Result<()>
where
    V: Default,
    I: IntoIterator<Item = VertexId>,
{
    let pairs: Vec<_> = sources.into_iter().map(|s| (s, target)).collect();
    add_edges_with_vertices(graph, &pairs)
}

fn add_edges_with_vertices<V>(graph: &mut Graph<V>, pairs: &[(VertexId, VertexId)]) -> Result<()>
where
    V: Default,
{
    for (s, t) in pairs {
        check_new_edge(graph, s, t, false)?;
    }
    for (s, t) in pairs {
        ensure_vertices(graph, &[*s, *t]);
        graph.add_edge(s, t)?;
    }
    Ok(())
}
