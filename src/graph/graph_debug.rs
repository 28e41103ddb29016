use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Each vertex is followed by its outgoing edges and their weights.
/// For undirected graphs every touching edge is listed under both endpoints.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_indent(f, 0)?;
        writeln!(f, "{}", self.graph.graph_type())?;
        let arrow = if self.graph.graph_type().is_directed() {
            "->"
        } else {
            "--"
        };
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 1)?;
            writeln!(f, "{:?}", v)?;
            let edges = match self.graph.out_edges(&v) {
                Ok(it) => it,
                Err(_) => continue,
            };
            for e in edges {
                let other = e.opposite(&v).unwrap_or(e.target);
                self.display_indent(f, 2)?;
                match self.graph.edge_weight(&e.id) {
                    Ok(w) => writeln!(f, "--{:?}[{}]{} {:?}", e.id, w, arrow, other)?,
                    Err(_) => writeln!(f, "--{:?}{} {:?}", e.id, arrow, other)?,
                }
            }
        }
        Ok(())
    }
}
