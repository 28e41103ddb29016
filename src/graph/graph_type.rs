use crate::error::{Error, Result};

/// Structural capabilities of a graph.
///
/// A `GraphType` is immutable.
/// All `as_*` methods return a new descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphType {
    directed: bool,
    undirected: bool,
    self_loops: bool,
    multiple_edges: bool,
    weighted: bool,
    allows_cycles: bool,
    modifiable: bool,
}

impl GraphType {
    /// Directed but not undirected.
    pub fn is_directed(&self) -> bool {
        self.directed && !self.undirected
    }

    /// Undirected but not directed.
    pub fn is_undirected(&self) -> bool {
        self.undirected && !self.directed
    }

    /// Both directed and undirected.
    pub fn is_mixed(&self) -> bool {
        self.directed && self.undirected
    }

    pub fn is_allowing_self_loops(&self) -> bool {
        self.self_loops
    }

    pub fn is_allowing_multiple_edges(&self) -> bool {
        self.multiple_edges
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_allowing_cycles(&self) -> bool {
        self.allows_cycles
    }

    pub fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    /// Neither self-loops nor multiple edges.
    pub fn is_simple(&self) -> bool {
        !self.multiple_edges && !self.self_loops
    }

    /// Multiple edges but no self-loops.
    pub fn is_multigraph(&self) -> bool {
        self.multiple_edges && !self.self_loops
    }

    /// Self-loops and multiple edges.
    pub fn is_pseudograph(&self) -> bool {
        self.multiple_edges && self.self_loops
    }

    pub fn as_directed(&self) -> Self {
        GraphTypeBuilder::from(self).directed().build()
    }

    pub fn as_undirected(&self) -> Self {
        GraphTypeBuilder::from(self).undirected().build()
    }

    pub fn as_mixed(&self) -> Self {
        GraphTypeBuilder::from(self).mixed().build()
    }

    pub fn as_weighted(&self) -> Self {
        GraphTypeBuilder::from(self).weighted(true).build()
    }

    pub fn as_unweighted(&self) -> Self {
        GraphTypeBuilder::from(self).weighted(false).build()
    }

    pub fn as_modifiable(&self) -> Self {
        GraphTypeBuilder::from(self).modifiable(true).build()
    }

    pub fn as_unmodifiable(&self) -> Self {
        GraphTypeBuilder::from(self).modifiable(false).build()
    }

    pub fn simple() -> Self {
        GraphTypeBuilder::default()
            .undirected()
            .allow_self_loops(false)
            .allow_multiple_edges(false)
            .weighted(false)
            .build()
    }

    pub fn multigraph() -> Self {
        GraphTypeBuilder::default()
            .undirected()
            .allow_self_loops(false)
            .allow_multiple_edges(true)
            .weighted(false)
            .build()
    }

    pub fn pseudograph() -> Self {
        GraphTypeBuilder::default()
            .undirected()
            .allow_self_loops(true)
            .allow_multiple_edges(true)
            .weighted(false)
            .build()
    }

    pub fn directed_simple() -> Self {
        GraphTypeBuilder::default()
            .directed()
            .allow_self_loops(false)
            .allow_multiple_edges(false)
            .weighted(false)
            .build()
    }

    pub fn directed_multigraph() -> Self {
        GraphTypeBuilder::default()
            .directed()
            .allow_self_loops(false)
            .allow_multiple_edges(true)
            .weighted(false)
            .build()
    }

    pub fn directed_pseudograph() -> Self {
        GraphTypeBuilder::default()
            .directed()
            .allow_self_loops(true)
            .allow_multiple_edges(true)
            .weighted(false)
            .build()
    }

    pub fn mixed() -> Self {
        GraphTypeBuilder::default()
            .mixed()
            .allow_self_loops(true)
            .allow_multiple_edges(true)
            .weighted(false)
            .build()
    }

    /// Directed acyclic graphs.
    pub fn dag() -> Self {
        GraphTypeBuilder::default()
            .directed()
            .allow_self_loops(false)
            .allow_multiple_edges(true)
            .allow_cycles(false)
            .weighted(false)
            .build()
    }
}

impl std::fmt::Display for GraphType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraphType [directed={}, undirected={}, self-loops={}, multiple-edges={}, weighted={}, allows-cycles={}, modifiable={}]",
            self.directed,
            self.undirected,
            self.self_loops,
            self.multiple_edges,
            self.weighted,
            self.allows_cycles,
            self.modifiable
        )
    }
}

/// Builds [GraphType]s.
///
/// A builder always holds at least one of directed/undirected,
/// so [GraphTypeBuilder::build] cannot fail.
/// The only fallible entry is [GraphTypeBuilder::with_direction].
#[derive(Debug, Clone)]
pub struct GraphTypeBuilder {
    directed: bool,
    undirected: bool,
    self_loops: bool,
    multiple_edges: bool,
    weighted: bool,
    allows_cycles: bool,
    modifiable: bool,
}

impl Default for GraphTypeBuilder {
    /// Undirected, self-loops and multiple edges allowed, unweighted, cycles allowed, modifiable.
    fn default() -> Self {
        Self {
            directed: false,
            undirected: true,
            self_loops: true,
            multiple_edges: true,
            weighted: false,
            allows_cycles: true,
            modifiable: true,
        }
    }
}

impl From<&GraphType> for GraphTypeBuilder {
    fn from(t: &GraphType) -> Self {
        Self {
            directed: t.is_directed() || t.is_mixed(),
            undirected: t.is_undirected() || t.is_mixed(),
            self_loops: t.self_loops,
            multiple_edges: t.multiple_edges,
            weighted: t.weighted,
            allows_cycles: t.allows_cycles,
            modifiable: t.modifiable,
        }
    }
}

impl GraphTypeBuilder {
    /// Starts from explicit directedness.
    /// Fails unless at least one of `directed` and `undirected` holds.
    pub fn with_direction(directed: bool, undirected: bool) -> Result<Self> {
        if !directed && !undirected {
            return Err(Error::InvalidArgument(
                "at least one of directed or undirected must be true".to_owned(),
            ));
        }
        Ok(Self {
            directed,
            undirected,
            ..Self::default()
        })
    }

    pub fn directed(mut self) -> Self {
        self.directed = true;
        self.undirected = false;
        self
    }

    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self.undirected = true;
        self
    }

    pub fn mixed(mut self) -> Self {
        self.directed = true;
        self.undirected = true;
        self
    }

    pub fn allow_self_loops(mut self, value: bool) -> Self {
        self.self_loops = value;
        self
    }

    pub fn allow_multiple_edges(mut self, value: bool) -> Self {
        self.multiple_edges = value;
        self
    }

    pub fn weighted(mut self, value: bool) -> Self {
        self.weighted = value;
        self
    }

    pub fn allow_cycles(mut self, value: bool) -> Self {
        self.allows_cycles = value;
        self
    }

    pub fn modifiable(mut self, value: bool) -> Self {
        self.modifiable = value;
        self
    }

    pub fn build(self) -> GraphType {
        GraphType {
            directed: self.directed,
            undirected: self.undirected,
            self_loops: self.self_loops,
            multiple_edges: self.multiple_edges,
            weighted: self.weighted,
            allows_cycles: self.allows_cycles,
            modifiable: self.modifiable,
        }
    }
}
