use super::TreeSingleSourcePaths;
use crate::error::{Error, Result};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::trace;
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

/// Tentative distance and the edge it was reached by, per seen vertex.
pub type DistanceAndPredecessorMap = HashMap<VertexId, (f64, Option<Edge>), RandomState>;

/// `f64` ordered by [f64::total_cmp], so it can be a heap priority.
#[derive(Debug, Clone, Copy)]
struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dijkstra's traversal: yields vertices in non-decreasing distance from a source.
///
/// Vertices farther than the radius are never yielded.
/// A negative or NaN edge weight met while relaxing is yielded as an error,
/// after which the iterator is exhausted.
///
/// Ties between vertices at equal distance are broken arbitrarily.
pub struct ClosestFirstIterator<'a, G> {
    graph: &'a G,
    source: VertexId,
    radius: f64,
    queue: KeyedPriorityQueue<VertexId, Reverse<Distance>, RandomState>,
    seen: DistanceAndPredecessorMap,
    failed: bool,
}

impl<'a, G> ClosestFirstIterator<'a, G>
where
    G: QueryableGraph,
{
    /// `None` as radius means unbounded.
    pub fn new(graph: &'a G, source: VertexId, radius: Option<f64>) -> Result<Self> {
        let radius = radius.unwrap_or(f64::INFINITY);
        if !(radius >= 0.0) {
            return Err(Error::NegativeRadius(radius));
        }
        if !graph.contains_vertex(&source) {
            return Err(Error::NoSuchVertex(source));
        }
        let mut res = Self {
            graph,
            source,
            radius,
            queue: Self::empty_queue(graph),
            seen: HashMap::default(),
            failed: false,
        };
        res.update_distance(source, None, 0.0);
        Ok(res)
    }

    fn empty_queue(graph: &G) -> KeyedPriorityQueue<VertexId, Reverse<Distance>, RandomState> {
        KeyedPriorityQueue::with_capacity_and_hasher(graph.vertex_size(), RandomState::new())
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether another vertex lies within the radius.
    ///
    /// Once the closest unsettled vertex is beyond the radius,
    /// the frontier is dropped and this stays `false`.
    pub fn has_next(&mut self) -> bool {
        if self.failed {
            return false;
        }
        let beyond = match self.queue.peek() {
            None => return false,
            Some((_, Reverse(d))) => d.0 > self.radius,
        };
        if beyond {
            self.queue = Self::empty_queue(self.graph);
            return false;
        }
        true
    }

    fn fail(&mut self, e: Error) -> Option<Result<VertexId>> {
        self.failed = true;
        self.queue = Self::empty_queue(self.graph);
        Some(Err(e))
    }

    fn update_distance(&mut self, v: VertexId, e: Option<Edge>, distance: f64) {
        match self.seen.get_mut(&v) {
            None => {
                self.seen.insert(v, (distance, e));
                self.queue.push(v, Reverse(Distance(distance)));
            }
            Some(entry) => {
                // settled vertices are no longer in the queue and keep their entry
                if distance < entry.0
                    && self
                        .queue
                        .set_priority(&v, Reverse(Distance(distance)))
                        .is_ok()
                {
                    *entry = (distance, e);
                }
            }
        }
    }

    /// Settled and frontier vertices within the radius.
    pub fn distance_and_predecessor_map(&self) -> DistanceAndPredecessorMap {
        self.seen
            .iter()
            .filter(|(_, (d, _))| *d <= self.radius)
            .map(|(v, x)| (*v, *x))
            .collect()
    }

    pub fn paths(&self) -> TreeSingleSourcePaths<'a, G> {
        TreeSingleSourcePaths::new(self.graph, self.source, self.distance_and_predecessor_map())
    }

    pub fn into_paths(self) -> TreeSingleSourcePaths<'a, G> {
        self.paths()
    }
}

impl<'a, G> Iterator for ClosestFirstIterator<'a, G>
where
    G: QueryableGraph,
{
    type Item = Result<VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let (v, Reverse(Distance(dist))) = self.queue.pop()?;
        let graph = self.graph;
        let edges = match graph.out_edges(&v) {
            Ok(it) => it,
            Err(e) => return self.fail(e),
        };
        for e in edges {
            let u = match e.opposite(&v) {
                Some(u) => u,
                None => continue,
            };
            let w = match graph.edge_weight(&e.id) {
                Ok(w) => w,
                Err(err) => return self.fail(err),
            };
            if !(w >= 0.0) {
                return self.fail(Error::NegativeEdgeWeight {
                    edge: e.id,
                    weight: w,
                });
            }
            self.update_distance(u, Some(e), dist + w);
        }
        trace!("settle {:?} at {}", v, dist);
        Some(Ok(v))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SingleSourcePaths;
    use super::*;
    use crate::error::ErrorKind;

    fn v(x: usize) -> VertexId {
        VertexId(x)
    }

    // 1-2(2) 1-3(3) 1-5(100) 2-4(5) 3-4(20) 4-5(5)
    fn create() -> Graph<()> {
        let mut g = Graph::weighted_pseudograph();
        for i in 1..=5 {
            g.add_vertex(v(i));
        }
        for (s, t, w) in [
            (1, 2, 2.0),
            (1, 3, 3.0),
            (1, 5, 100.0),
            (2, 4, 5.0),
            (3, 4, 20.0),
            (4, 5, 5.0),
        ] {
            g.add_weighted_edge(&v(s), &v(t), w).unwrap();
        }
        g
    }

    fn settle_all<G: QueryableGraph>(it: &mut ClosestFirstIterator<'_, G>) -> Vec<VertexId> {
        let mut res = Vec::new();
        while it.has_next() {
            res.push(it.next().unwrap().unwrap());
        }
        res
    }

    #[test]
    fn order_from_three() {
        let g = create();
        let mut it = ClosestFirstIterator::new(&g, v(3), None).unwrap();
        assert_eq!(settle_all(&mut it), vec![v(3), v(1), v(2), v(4), v(5)]);
        assert!(it.next().is_none());
    }

    #[test]
    fn order_from_one() {
        let g = create();
        let it = ClosestFirstIterator::new(&g, v(1), None).unwrap();
        let order: Vec<_> = it.map(|x| x.unwrap()).collect();
        assert_eq!(order, vec![v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn radius_bounds_traversal() {
        let g = create();
        let mut it = ClosestFirstIterator::new(&g, v(1), Some(11.0)).unwrap();
        assert_eq!(settle_all(&mut it), vec![v(1), v(2), v(3), v(4)]);
        assert!(!it.has_next());
        assert!(it.next().is_none());
        let map = it.distance_and_predecessor_map();
        assert!(!map.contains_key(&v(5)));
        assert_eq!(map.get(&v(4)).map(|x| x.0), Some(7.0));
    }

    #[test]
    fn radius_paths() {
        let g = create();
        let mut it = ClosestFirstIterator::new(&g, v(3), Some(12.0)).unwrap();
        assert_eq!(settle_all(&mut it), vec![v(3), v(1), v(2), v(4)]);
        let paths = it.into_paths();
        assert_eq!(paths.path(&v(4)).map(|p| p.weight()), Some(10.0));
        assert_eq!(paths.path(&v(2)).map(|p| p.weight()), Some(5.0));
        assert_eq!(paths.path(&v(1)).map(|p| p.weight()), Some(3.0));
        assert!(paths.path(&v(5)).is_none());
    }

    #[test]
    fn rejects_bad_arguments() {
        let g = create();
        let e = ClosestFirstIterator::new(&g, v(1), Some(-1.0)).err().unwrap();
        assert_eq!(e, Error::NegativeRadius(-1.0));
        let e = ClosestFirstIterator::new(&g, v(1), Some(f64::NAN)).err().unwrap();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        let e = ClosestFirstIterator::new(&g, v(9), None).err().unwrap();
        assert_eq!(e, Error::NoSuchVertex(v(9)));
        assert!(ClosestFirstIterator::new(&g, v(1), Some(0.0)).is_ok());
    }

    #[test]
    fn negative_weight_stops_traversal() {
        let mut g: Graph<()> = Graph::directed_weighted_pseudograph();
        g.add_vertex(v(1));
        g.add_vertex(v(2));
        g.add_vertex(v(3));
        let e = g.add_weighted_edge(&v(1), &v(2), -100.0).unwrap().unwrap();
        g.add_weighted_edge(&v(2), &v(3), 1.0).unwrap();
        let mut it = ClosestFirstIterator::new(&g, v(1), None).unwrap();
        assert_eq!(
            it.next(),
            Some(Err(Error::NegativeEdgeWeight {
                edge: e,
                weight: -100.0
            }))
        );
        assert!(!it.has_next());
        assert!(it.next().is_none());
    }

    #[test]
    fn nan_weight_stops_traversal() {
        let mut g: Graph<()> = Graph::weighted_pseudograph();
        g.add_vertex(v(1));
        g.add_vertex(v(2));
        g.add_weighted_edge(&v(1), &v(2), f64::NAN).unwrap();
        let mut it = ClosestFirstIterator::new(&g, v(1), None).unwrap();
        let err = it.next().unwrap().unwrap_err();
        assert!(matches!(err, Error::NegativeEdgeWeight { weight, .. } if weight.is_nan()));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(it.next().is_none());
    }

    #[test]
    fn directed_follows_arcs() {
        let mut g: Graph<()> = Graph::directed_weighted_pseudograph();
        for i in 1..=3 {
            g.add_vertex(v(i));
        }
        g.add_weighted_edge(&v(2), &v(1), 1.0).unwrap();
        g.add_weighted_edge(&v(2), &v(3), 1.0).unwrap();
        let order: Vec<_> = ClosestFirstIterator::new(&g, v(1), None)
            .unwrap()
            .map(|x| x.unwrap())
            .collect();
        assert_eq!(order, vec![v(1)]);
    }
}
