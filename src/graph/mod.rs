//! Graph storage and mutation.
//!
//! # IDs and payloads
//!
//! Vertices and edges are identified by lightweight ID's, essentially `usize`.
//! Algorithm authors may feel free to copy and store these ID's.
//! A vertex additionally carries a payload, stored by the graph it belongs to.
//!
//! # Shapes
//!
//! A [Graph] is parameterized at runtime by a [GraphType].
//! The type decides whether adjacency is directed or undirected,
//! whether self-loops and multiple edges are admitted,
//! and whether edges carry weights.
//!
//! # Queries
//!
//! Algorithms in this crate are written against [QueryableGraph].

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod supplier;
pub use self::supplier::*;
mod graph_type;
pub use self::graph_type::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod specifics;
mod edge_specifics;
pub use self::edge_specifics::DEFAULT_EDGE_WEIGHT;
mod default_graph;
pub use self::default_graph::*;
mod types;
pub mod builder;
pub mod utils;

#[cfg(test)]
pub(crate) mod ops;
#[cfg(test)]
pub(crate) mod oracle;
