//! In-memory graphs with Dijkstra shortest paths.
//!
//! * [graph] holds the storage: one [Graph](graph::Graph) type covering
//!   simple graphs, multigraphs and pseudographs, directed or undirected, weighted or not.
//! * [path] holds [GraphWalk](path::GraphWalk), a walk through a borrowed graph.
//! * [algorithm] holds the closest-first traversal and [DijkstraShortestPath](algorithm::DijkstraShortestPath).
//!
//! Vertices are identified by [VertexId](graph::VertexId) and edges by [EdgeId](graph::EdgeId).
//! Both are cheap to copy.
//!
//! Mutations and shortest-path queries log through the [log] facade,
//! at `debug` for graph construction and query boundaries, at `trace` for individual steps.

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod path;

pub use self::error::{Error, ErrorKind, Result};
