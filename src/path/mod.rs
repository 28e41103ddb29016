//! Walks through a graph.

mod graph_walk;
pub use self::graph_walk::*;
