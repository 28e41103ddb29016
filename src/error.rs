use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

/// Errors returned by graph mutation, path handling and shortest-path computation.
///
/// Every variant belongs to one of two kinds, see [Error::kind]:
///
/// * [ErrorKind::InvalidArgument]: the caller passed something the graph cannot accept,
///   e.g. a vertex that is not a member or a negative edge weight met by Dijkstra.
/// * [ErrorKind::UnsupportedOperation]: the graph variant does not offer the operation at all,
///   e.g. setting a weight on an unweighted graph.
///
/// Absence is not an error.
/// Unreachable targets, missing edges between two vertices and the like are reported as
/// `None`, empty iterators or an infinite weight.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("no such vertex in graph: {0:?}")]
    NoSuchVertex(VertexId),

    #[error("no such edge in graph: {0:?}")]
    NoSuchEdge(EdgeId),

    #[error("loops not allowed: {0:?}")]
    LoopsNotAllowed(VertexId),

    /// Also raised for NaN weights.
    #[error("negative edge weight not allowed: {weight} on {edge:?}")]
    NegativeEdgeWeight { edge: EdgeId, weight: f64 },

    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    /// A walk is malformed, infeasible in its graph, or cannot be reversed/extended.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Coarse classification of [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    UnsupportedOperation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unsupported(_) => ErrorKind::UnsupportedOperation,
            Error::NoSuchVertex(_)
            | Error::NoSuchEdge(_)
            | Error::LoopsNotAllowed(_)
            | Error::NegativeEdgeWeight { .. }
            | Error::NegativeRadius(_)
            | Error::InvalidPath(_)
            | Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
