use crate::error::{Error, Result};
use crate::graph::*;

/// A walk in a graph, given by its vertices, its edges, or both.
///
/// Whichever list is missing is derived from the graph on each access.
/// A walk without a start vertex is empty.
/// A walk whose start and end coincide and which has no edges is a singleton.
///
/// The walk borrows its graph.
/// Mutating the graph while a walk exists is therefore impossible,
/// but a walk built from lists that do not fit the graph is only caught by
/// [GraphWalk::verify] or when a missing list is derived.
pub struct GraphWalk<'a, G> {
    graph: &'a G,
    start: Option<VertexId>,
    end: Option<VertexId>,
    vertex_list: Option<Vec<VertexId>>,
    edge_list: Option<Vec<EdgeId>>,
    weight: f64,
}

impl<'a, G> Clone for GraphWalk<'a, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            start: self.start,
            end: self.end,
            vertex_list: self.vertex_list.clone(),
            edge_list: self.edge_list.clone(),
            weight: self.weight,
        }
    }
}

fn infeasible(msg: String) -> Error {
    Error::InvalidPath(msg)
}

impl<'a, G> GraphWalk<'a, G>
where
    G: QueryableGraph,
{
    /// Fails if both lists are missing,
    /// or if both are given for a non-empty walk and `edges + 1 != vertices`.
    pub fn new(
        graph: &'a G,
        start: Option<VertexId>,
        end: Option<VertexId>,
        vertex_list: Option<Vec<VertexId>>,
        edge_list: Option<Vec<EdgeId>>,
        weight: f64,
    ) -> Result<Self> {
        match (&vertex_list, &edge_list) {
            (None, None) => {
                return Err(Error::InvalidArgument(
                    "vertex list and edge list cannot both be missing".to_owned(),
                ));
            }
            (Some(vs), Some(es)) if start.is_some() && es.len() + 1 != vs.len() => {
                return Err(Error::InvalidArgument(format!(
                    "vertex list and edge list do not describe the same walk: {} vertices, {} edges",
                    vs.len(),
                    es.len()
                )));
            }
            _ => {}
        }
        Ok(Self {
            graph,
            start,
            end,
            vertex_list,
            edge_list,
            weight,
        })
    }

    pub fn empty(graph: &'a G) -> Self {
        Self {
            graph,
            start: None,
            end: None,
            vertex_list: Some(Vec::new()),
            edge_list: Some(Vec::new()),
            weight: 0.0,
        }
    }

    pub fn singleton(graph: &'a G, v: VertexId, weight: f64) -> Self {
        Self {
            graph,
            start: Some(v),
            end: Some(v),
            vertex_list: Some(vec![v]),
            edge_list: Some(Vec::new()),
            weight,
        }
    }

    /// A walk through `vertices`, which is empty if `vertices` is.
    pub fn from_vertices(graph: &'a G, vertices: Vec<VertexId>, weight: f64) -> Self {
        Self {
            graph,
            start: vertices.first().copied(),
            end: vertices.last().copied(),
            vertex_list: Some(vertices),
            edge_list: None,
            weight,
        }
    }

    pub fn from_edges(
        graph: &'a G,
        start: VertexId,
        end: VertexId,
        edges: Vec<EdgeId>,
        weight: f64,
    ) -> Self {
        Self {
            graph,
            start: Some(start),
            end: Some(end),
            vertex_list: None,
            edge_list: Some(edges),
            weight,
        }
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn start_vertex(&self) -> Option<VertexId> {
        self.start
    }

    pub fn end_vertex(&self) -> Option<VertexId> {
        self.end
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Number of edges.
    pub fn length(&self) -> usize {
        if let Some(es) = &self.edge_list {
            return es.len();
        }
        if let Some(vs) = &self.vertex_list {
            return vs.len().saturating_sub(1);
        }
        0
    }

    /// The given edge list, or one derived from the vertex list by
    /// taking the first edge between each consecutive pair.
    pub fn edge_list(&self) -> Result<Vec<EdgeId>> {
        if let Some(es) = &self.edge_list {
            return Ok(es.clone());
        }
        let vs = match &self.vertex_list {
            Some(vs) => vs,
            None => return Ok(Vec::new()),
        };
        vs.windows(2)
            .map(|w| {
                self.graph
                    .edge_connecting(&w[0], &w[1])
                    .map(|e| e.id)
                    .ok_or_else(|| infeasible(format!("no edge from {:?} to {:?}", w[0], w[1])))
            })
            .collect()
    }

    /// The given vertex list, or one derived from the edge list by
    /// walking from the start vertex.
    pub fn vertex_list(&self) -> Result<Vec<VertexId>> {
        if let Some(vs) = &self.vertex_list {
            return Ok(vs.clone());
        }
        let es = match &self.edge_list {
            Some(es) => es,
            None => return Ok(Vec::new()),
        };
        let start = match self.start {
            Some(s) => s,
            None => return Ok(Vec::new()),
        };
        if es.is_empty() {
            return Ok(if Some(start) == self.end {
                vec![start]
            } else {
                Vec::new()
            });
        }
        let mut res = Vec::with_capacity(es.len() + 1);
        let mut cur = start;
        res.push(cur);
        for id in es {
            let e = self
                .graph
                .find_edge(id)
                .ok_or(Error::NoSuchEdge(*id))?;
            cur = e
                .opposite(&cur)
                .ok_or_else(|| infeasible(format!("{:?} does not touch {:?}", id, cur)))?;
            res.push(cur);
        }
        Ok(res)
    }

    fn weight_of(&self, e: &Edge) -> Result<f64> {
        self.graph.edge_weight(&e.id)
    }

    /// The same walk traversed backwards.
    ///
    /// In undirected graphs the weight is kept.
    /// In directed graphs every arc needs an arc in the opposite direction,
    /// and the weight is the sum of those opposite arcs.
    pub fn reverse(&self) -> Result<Self> {
        let directed = self.graph.graph_type().is_directed();
        let vertex_list = self
            .vertex_list
            .as_ref()
            .map(|vs| vs.iter().rev().copied().collect::<Vec<_>>());
        let mut weight = if directed { 0.0 } else { self.weight };
        let edge_list = match &self.edge_list {
            Some(es) if directed => {
                let mut rev = Vec::with_capacity(es.len());
                for id in es.iter().rev() {
                    let e = self.graph.find_edge(id).ok_or(Error::NoSuchEdge(*id))?;
                    let back = self
                        .graph
                        .edge_connecting(&e.target, &e.source)
                        .ok_or_else(|| {
                            infeasible(format!(
                                "walk cannot be reversed, no reverse arc for {:?}",
                                e
                            ))
                        })?;
                    weight += self.weight_of(&back)?;
                    rev.push(back.id);
                }
                Some(rev)
            }
            Some(es) => Some(es.iter().rev().copied().collect()),
            None => None,
        };
        let has_edges = edge_list.as_ref().map_or(false, |es| !es.is_empty());
        if directed && !has_edges {
            if let Some(vs) = &vertex_list {
                for w in vs.windows(2) {
                    let back = self.graph.edge_connecting(&w[0], &w[1]).ok_or_else(|| {
                        infeasible(format!(
                            "walk cannot be reversed, no arc from {:?} to {:?}",
                            w[0], w[1]
                        ))
                    })?;
                    weight += self.weight_of(&back)?;
                }
            }
        }
        Ok(Self {
            graph: self.graph,
            start: self.end,
            end: self.start,
            vertex_list,
            edge_list,
            weight,
        })
    }

    /// Appends `extension`, which must start where this walk ends.
    ///
    /// Only the lists this walk has are extended.
    pub fn concat(&self, extension: &GraphWalk<'a, G>) -> Result<Self> {
        if self.is_empty() {
            return Err(infeasible("an empty walk cannot be extended".to_owned()));
        }
        if self.end != extension.start {
            return Err(infeasible(format!(
                "walk ending at {:?} cannot be extended by a walk starting at {:?}",
                self.end, extension.start
            )));
        }
        let vertex_list = match &self.vertex_list {
            Some(vs) => {
                let mut vs = vs.clone();
                vs.extend(extension.vertex_list()?.into_iter().skip(1));
                Some(vs)
            }
            None => None,
        };
        let edge_list = match &self.edge_list {
            Some(es) => {
                let mut es = es.clone();
                es.extend(extension.edge_list()?);
                Some(es)
            }
            None => None,
        };
        Ok(Self {
            graph: self.graph,
            start: self.start,
            end: extension.end,
            vertex_list,
            edge_list,
            weight: self.weight + extension.weight,
        })
    }

    /// Checks the walk against the current state of its graph.
    pub fn verify(&self) -> Result<()> {
        let (start, end) = match (self.start, self.end) {
            (None, _) => return Ok(()),
            (Some(s), Some(e)) => (s, e),
            (Some(_), None) => return Err(infeasible("walk has a start but no end".to_owned())),
        };
        let directed = self.graph.graph_type().is_directed();
        let vs = self.vertex_list.as_deref().filter(|vs| !vs.is_empty());
        let es = self.edge_list.as_deref().filter(|es| !es.is_empty());

        if let Some(vs) = vs {
            if vs[0] != start {
                return Err(infeasible(
                    "start vertex must be the first vertex in the vertex list".to_owned(),
                ));
            }
            if vs[vs.len() - 1] != end {
                return Err(infeasible(
                    "end vertex must be the last vertex in the vertex list".to_owned(),
                ));
            }
            if let Some(v) = vs.iter().find(|v| !self.graph.contains_vertex(v)) {
                return Err(Error::NoSuchVertex(*v));
            }
            if es.is_none() {
                for w in vs.windows(2) {
                    if !self.graph.contains_edge_between(&w[0], &w[1]) {
                        return Err(infeasible(format!(
                            "no edge from {:?} to {:?}",
                            w[0], w[1]
                        )));
                    }
                }
            }
        }

        let edges = match es {
            Some(es) => es
                .iter()
                .map(|id| self.graph.find_edge(id).ok_or(Error::NoSuchEdge(*id)))
                .collect::<Result<Vec<Edge>>>()?,
            None => Vec::new(),
        };
        if let Some(first) = edges.first() {
            if !first.is_incident_to(&start) {
                return Err(infeasible(
                    "first edge must leave the start vertex".to_owned(),
                ));
            }
        }
        if vs.is_none() && !edges.is_empty() {
            let mut cur = start;
            for e in edges.iter() {
                let next = e.opposite(&cur).filter(|_| !directed || e.source == cur);
                cur = next.ok_or_else(|| infeasible(format!("conflicting edge {:?}", e)))?;
            }
            if cur != end {
                return Err(infeasible(
                    "edge list does not end in the end vertex".to_owned(),
                ));
            }
        }

        if let (Some(vs), false) = (vs, edges.is_empty()) {
            if edges.len() + 1 != vs.len() {
                return Err(infeasible(format!(
                    "{} vertices do not fit {} edges",
                    vs.len(),
                    edges.len()
                )));
            }
            for (e, w) in edges.iter().zip(vs.windows(2)) {
                let ok = if directed {
                    e.source == w[0] && e.target == w[1]
                } else {
                    e.opposite(&w[0]) == Some(w[1])
                };
                if !ok {
                    return Err(infeasible(format!(
                        "{:?} does not lead from {:?} to {:?}",
                        e.id, w[0], w[1]
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<'a, G> PartialEq for GraphWalk<'a, G>
where
    G: QueryableGraph,
{
    /// Empty walks are equal.
    /// Otherwise ends must agree, and then edge lists must agree,
    /// or vertex lists when this walk has no edges and the graph has no multiple edges.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        if self.start != other.start || self.end != other.end {
            return false;
        }
        let no_edges = self.edge_list.as_ref().map_or(true, |es| es.is_empty());
        if no_edges && !other.graph.graph_type().is_allowing_multiple_edges() {
            return matches!(
                (self.vertex_list(), other.vertex_list()),
                (Ok(a), Ok(b)) if a == b
            );
        }
        matches!(
            (self.edge_list(), other.edge_list()),
            (Ok(a), Ok(b)) if a == b
        )
    }
}

impl<'a, G> std::fmt::Debug for GraphWalk<'a, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("GraphWalk");
        d.field("start", &self.start).field("end", &self.end);
        if let Some(vs) = &self.vertex_list {
            d.field("vertices", vs);
        }
        if let Some(es) = &self.edge_list {
            d.field("edges", es);
        }
        d.field("weight", &self.weight).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn v(x: usize) -> VertexId {
        VertexId(x)
    }

    fn with_vertices(mut g: Graph<()>, n: usize) -> Graph<()> {
        for i in 0..n {
            g.add_vertex(v(i));
        }
        g
    }

    fn edge(g: &mut Graph<()>, s: usize, t: usize) -> EdgeId {
        g.add_edge(&v(s), &v(t)).unwrap().unwrap()
    }

    fn weighted(g: &mut Graph<()>, s: usize, t: usize, w: f64) -> EdgeId {
        g.add_weighted_edge(&v(s), &v(t), w).unwrap().unwrap()
    }

    #[test]
    fn lists_required() {
        let mut g = with_vertices(Graph::pseudograph(), 1);
        edge(&mut g, 0, 0);
        let err = GraphWalk::new(&g, Some(v(0)), Some(v(0)), None, None, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = GraphWalk::new(
            &g,
            Some(v(0)),
            Some(v(0)),
            Some(vec![v(0)]),
            Some(vec![EdgeId(0)]),
            0.0,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn missing_self_loop() {
        let g = with_vertices(Graph::simple_graph(), 1);
        let w = GraphWalk::from_vertices(&g, vec![v(0), v(0)], 0.0);
        assert!(w.verify().is_err());
    }

    #[test]
    fn infeasible_vertex_list() {
        let mut g = with_vertices(Graph::simple_graph(), 4);
        edge(&mut g, 0, 1);
        edge(&mut g, 1, 2);
        edge(&mut g, 2, 3);
        let w = GraphWalk::new(&g, Some(v(0)), Some(v(2)), Some(vec![v(0), v(1), v(3), v(2)]), None, 0.0)
            .unwrap();
        assert_eq!(w.verify().unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert!(w.edge_list().is_err());
    }

    #[test]
    fn infeasible_edge_list() {
        let mut g = with_vertices(Graph::simple_graph(), 4);
        let e1 = edge(&mut g, 0, 1);
        edge(&mut g, 1, 2);
        let e3 = edge(&mut g, 2, 3);
        let w = GraphWalk::from_edges(&g, v(0), v(2), vec![e1, e3], 0.0);
        assert!(w.verify().is_err());
        assert!(w.vertex_list().is_err());
    }

    #[test]
    fn directed_edges_must_point_forward() {
        let mut g = with_vertices(Graph::simple_directed_graph(), 3);
        let a = edge(&mut g, 0, 1);
        let b = edge(&mut g, 2, 1);
        let w = GraphWalk::from_edges(&g, v(0), v(2), vec![a, b], 0.0);
        assert!(w.verify().is_err());
    }

    #[test]
    fn valid_trivial_walks() {
        let g = with_vertices(Graph::simple_graph(), 1);
        for w in [
            GraphWalk::new(&g, None, None, Some(vec![]), Some(vec![]), 0.0).unwrap(),
            GraphWalk::new(&g, None, None, None, Some(vec![]), 0.0).unwrap(),
            GraphWalk::new(&g, None, None, Some(vec![]), None, 0.0).unwrap(),
            GraphWalk::new(&g, Some(v(0)), Some(v(0)), Some(vec![v(0)]), Some(vec![]), 0.0).unwrap(),
        ] {
            assert!(w.verify().is_ok());
        }
    }

    #[test]
    fn empty_walk() {
        let g: Graph<()> = Graph::simple_graph();
        let w = GraphWalk::new(&g, None, None, Some(vec![]), Some(vec![]), 0.0).unwrap();
        assert_eq!(w.length(), 0);
        assert_eq!(w.vertex_list(), Ok(vec![]));
        assert_eq!(w.edge_list(), Ok(vec![]));
        assert!(w.is_empty());
        assert_eq!(GraphWalk::empty(&g), w);
    }

    #[test]
    fn singleton_derivation() {
        let g = with_vertices(Graph::simple_graph(), 1);
        let w = GraphWalk::from_edges(&g, v(0), v(0), vec![], 3.0);
        assert_eq!(w.vertex_list(), Ok(vec![v(0)]));
        assert_eq!(w.length(), 0);
        assert_eq!(w, GraphWalk::singleton(&g, v(0), 0.0));
    }

    #[test]
    fn reverse_undirected() {
        let mut g = with_vertices(Graph::simple_weighted_graph(), 4);
        let e1 = weighted(&mut g, 0, 1, 2.0);
        let e2 = weighted(&mut g, 1, 2, 3.0);
        let e3 = weighted(&mut g, 2, 3, 4.0);
        let gw1 = GraphWalk::from_vertices(&g, vec![v(0), v(1), v(2), v(3)], 9.0);
        let gw2 = GraphWalk::from_edges(&g, v(0), v(3), vec![e1, e2, e3], 9.0);

        let rev1 = gw1.reverse().unwrap();
        assert!(rev1.verify().is_ok());
        let rev2 = gw2.reverse().unwrap();
        assert!(rev2.verify().is_ok());

        let expected = GraphWalk::from_edges(&g, v(3), v(0), vec![e3, e2, e1], 9.0);
        assert_eq!(expected, rev1);
        assert_eq!(expected, rev2);
        assert_eq!(rev1.weight(), 9.0);
        assert_eq!(rev2.weight(), 9.0);
        assert_eq!(gw1.weight(), 9.0);
    }

    #[test]
    fn reverse_directed_without_back_arcs() {
        let mut g = with_vertices(Graph::simple_directed_graph(), 4);
        edge(&mut g, 0, 1);
        edge(&mut g, 1, 2);
        edge(&mut g, 2, 3);
        let gw = GraphWalk::from_vertices(&g, vec![v(0), v(1), v(2), v(3)], 0.0);
        assert_eq!(gw.reverse().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn reverse_directed() {
        let mut g = with_vertices(Graph::simple_directed_weighted_graph(), 4);
        let f1 = weighted(&mut g, 0, 1, 1.0);
        let f2 = weighted(&mut g, 1, 2, 2.0);
        let f3 = weighted(&mut g, 2, 3, 3.0);
        let e1 = weighted(&mut g, 3, 2, 4.0);
        let e2 = weighted(&mut g, 2, 1, 5.0);
        let e3 = weighted(&mut g, 1, 0, 6.0);

        let gw1 = GraphWalk::from_vertices(&g, vec![v(0), v(1), v(2), v(3)], 0.0);
        let rev1 = gw1.reverse().unwrap();
        assert!(rev1.verify().is_ok());
        let expected = GraphWalk::from_edges(&g, v(3), v(0), vec![e1, e2, e3], 15.0);
        assert_eq!(expected, rev1);
        assert_eq!(rev1.weight(), 15.0);

        let gw2 = GraphWalk::from_edges(&g, v(0), v(3), vec![f1, f2, f3], 6.0);
        let rev2 = gw2.reverse().unwrap();
        assert_eq!(rev2.edge_list(), Ok(vec![e1, e2, e3]));
        assert_eq!(rev2.weight(), 15.0);
        assert_eq!(rev2.reverse().unwrap().weight(), 6.0);
    }

    fn check_round_trip(g: &Graph<()>, vs: Vec<VertexId>) {
        let by_vertices = GraphWalk::from_vertices(g, vs.clone(), 0.0);
        let es = by_vertices.edge_list().unwrap();
        assert_eq!(es.len() + 1, vs.len());
        let by_edges = GraphWalk::from_edges(g, vs[0], vs[vs.len() - 1], es, 0.0);
        assert_eq!(by_edges.vertex_list(), Ok(vs));
        assert!(by_vertices.verify().is_ok());
        assert!(by_edges.verify().is_ok());
        assert_eq!(by_vertices, by_edges);
    }

    #[test]
    fn vertices_to_edges_and_back() {
        for shape in [Graph::pseudograph(), Graph::directed_pseudograph()] {
            let mut g = with_vertices(shape, 4);
            edge(&mut g, 0, 1);
            edge(&mut g, 1, 2);
            edge(&mut g, 2, 2);
            edge(&mut g, 2, 3);
            check_round_trip(&g, vec![v(0), v(1), v(2), v(2), v(3)]);
            check_round_trip(&g, vec![v(1), v(2)]);
            check_round_trip(&g, vec![v(3)]);
        }
        let mut g = with_vertices(Graph::simple_graph(), 4);
        edge(&mut g, 0, 1);
        edge(&mut g, 1, 2);
        edge(&mut g, 3, 2);
        check_round_trip(&g, vec![v(3), v(2), v(1), v(0), v(1)]);
    }

    #[test]
    fn illegal_concat() {
        let g = with_vertices(Graph::simple_directed_weighted_graph(), 2);
        let empty = GraphWalk::empty(&g);
        let s0 = GraphWalk::singleton(&g, v(0), 10.0);
        let s1 = GraphWalk::singleton(&g, v(1), 12.0);
        assert!(empty.concat(&s0).is_err());
        assert!(s0.concat(&s1).is_err());
    }

    #[test]
    fn concat() {
        let mut g = with_vertices(Graph::simple_directed_weighted_graph(), 4);
        edge(&mut g, 0, 1);
        edge(&mut g, 1, 2);
        let e3 = edge(&mut g, 2, 3);
        let e4 = edge(&mut g, 3, 1);
        let gw1 = GraphWalk::from_vertices(&g, vec![v(0), v(1), v(2)], 5.0);
        let gw2 = GraphWalk::from_edges(&g, v(2), v(1), vec![e3, e4], 7.0);
        let gw3 = gw1.concat(&gw2).unwrap();
        assert!(gw3.verify().is_ok());
        let expected = GraphWalk::from_vertices(&g, vec![v(0), v(1), v(2), v(3), v(1)], 12.0);
        assert_eq!(expected, gw3);
        assert_eq!(gw3.weight(), 12.0);
    }

    #[test]
    fn concat_keeps_every_edge() {
        let mut g = with_vertices(Graph::simple_directed_graph(), 4);
        let a = edge(&mut g, 0, 1);
        let b = edge(&mut g, 1, 2);
        let c = edge(&mut g, 2, 3);
        let head = GraphWalk::from_edges(&g, v(0), v(1), vec![a], 1.0);
        let tail = GraphWalk::from_edges(&g, v(1), v(3), vec![b, c], 2.0);
        let w = head.concat(&tail).unwrap();
        assert_eq!(w.edge_list(), Ok(vec![a, b, c]));
        assert_eq!(w.length(), 3);
        assert!(w.verify().is_ok());
    }

    #[test]
    fn concat_with_singleton() {
        let mut g = with_vertices(Graph::simple_directed_weighted_graph(), 2);
        edge(&mut g, 0, 1);
        let gw1 = GraphWalk::from_vertices(&g, vec![v(0), v(1)], 5.0);
        let gw2 = GraphWalk::singleton(&g, v(1), 10.0);
        let gw3 = gw1.concat(&gw2).unwrap();
        assert!(gw3.verify().is_ok());
        assert_eq!(gw1, gw3);
    }

    #[test]
    fn debug_output() {
        let g = with_vertices(Graph::simple_graph(), 1);
        let s = format!("{:?}", GraphWalk::singleton(&g, v(0), 0.0));
        assert!(s.starts_with("GraphWalk { start: Some(VertexId(0))"), "{}", s);
    }
}
