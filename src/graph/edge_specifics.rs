use crate::error::{Error, Result};
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Weight of every edge in an unweighted graph.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// The authoritative edge registry of a graph.
#[derive(Debug, Clone)]
pub enum EdgeSpecifics {
    Uniform(HashMap<EdgeId, Edge, RandomState>),
    Weighted(HashMap<EdgeId, (Edge, f64), RandomState>),
}

impl EdgeSpecifics {
    pub fn for_type(t: &GraphType) -> Self {
        if t.is_weighted() {
            EdgeSpecifics::Weighted(HashMap::default())
        } else {
            EdgeSpecifics::Uniform(HashMap::default())
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, EdgeSpecifics::Weighted(_))
    }

    /// Registers an edge with the default weight.
    /// Returns `None` without mutation if `id` is taken.
    pub fn add(&mut self, id: EdgeId, source: VertexId, target: VertexId) -> Option<Edge> {
        if self.contains(&id) {
            return None;
        }
        let e = Edge { id, source, target };
        match self {
            EdgeSpecifics::Uniform(m) => {
                m.insert(id, e);
            }
            EdgeSpecifics::Weighted(m) => {
                m.insert(id, (e, DEFAULT_EDGE_WEIGHT));
            }
        }
        Some(e)
    }

    pub fn remove(&mut self, id: &EdgeId) -> Option<Edge> {
        match self {
            EdgeSpecifics::Uniform(m) => m.remove(id),
            EdgeSpecifics::Weighted(m) => m.remove(id).map(|(e, _)| e),
        }
    }

    pub fn contains(&self, id: &EdgeId) -> bool {
        match self {
            EdgeSpecifics::Uniform(m) => m.contains_key(id),
            EdgeSpecifics::Weighted(m) => m.contains_key(id),
        }
    }

    pub fn find(&self, id: &EdgeId) -> Option<Edge> {
        match self {
            EdgeSpecifics::Uniform(m) => m.get(id).copied(),
            EdgeSpecifics::Weighted(m) => m.get(id).map(|(e, _)| *e),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            EdgeSpecifics::Uniform(m) => m.len(),
            EdgeSpecifics::Weighted(m) => m.len(),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        match self {
            EdgeSpecifics::Uniform(m) => Box::new(m.values().copied()),
            EdgeSpecifics::Weighted(m) => Box::new(m.values().map(|(e, _)| *e)),
        }
    }

    pub fn edge_weight(&self, id: &EdgeId) -> Result<f64> {
        match self {
            EdgeSpecifics::Uniform(m) if m.contains_key(id) => Ok(DEFAULT_EDGE_WEIGHT),
            EdgeSpecifics::Weighted(m) => m.get(id).map(|(_, w)| *w).ok_or(Error::NoSuchEdge(*id)),
            _ => Err(Error::NoSuchEdge(*id)),
        }
    }

    pub fn set_edge_weight(&mut self, id: &EdgeId, weight: f64) -> Result<()> {
        match self {
            EdgeSpecifics::Uniform(_) => Err(Error::Unsupported(
                "edge weights cannot be set on an unweighted graph",
            )),
            EdgeSpecifics::Weighted(m) => match m.get_mut(id) {
                Some((_, w)) => {
                    *w = weight;
                    Ok(())
                }
                None => Err(Error::NoSuchEdge(*id)),
            },
        }
    }

    pub fn clear(&mut self) {
        match self {
            EdgeSpecifics::Uniform(m) => m.clear(),
            EdgeSpecifics::Weighted(m) => m.clear(),
        }
    }
}
