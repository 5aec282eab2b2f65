use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::adjacency_matrix::AdjacencyMatrix;
use crate::directedness::Directedness;

/// Errors reported by [`Graph`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A query or edge insertion referenced a name that was never registered.
    #[error("unknown node: {0}")]
    UnknownNode(String),
    /// A genuinely new name was registered after the matrix was already
    /// full.  The file loaders make this unreachable by pre-scanning the
    /// node set before sizing the graph.
    #[error("graph is full: sized for {capacity} nodes")]
    CapacityExceeded { capacity: usize },
}

/// Degree of a node, as reported by [`Graph::degree`].
///
/// Directed graphs distinguish the out-degree (set entries in the node's
/// row) from the in-degree (set entries in its column); undirected graphs
/// report the row count alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degree {
    Directed {
        out_degree: usize,
        in_degree: usize,
    },
    Undirected(usize),
}

/// A labeled graph over a dense adjacency matrix.
///
/// Node capacity is fixed at construction and nodes are registered by name,
/// receiving consecutive matrix indices in registration order.  Both
/// endpoints of an edge must be registered before the edge is added.  Once
/// populated the graph is only queried; there is no removal.
#[derive(Clone, Debug)]
pub struct Graph {
    directedness: Directedness,
    matrix: AdjacencyMatrix,
    indexes: HashMap<String, usize>,
    /// Inverse of `indexes`, maintained in lockstep: `names[i]` is the name
    /// mapped to index `i`.
    names: Vec<String>,
}

impl Graph {
    /// Creates an empty graph with an all-zero `capacity` × `capacity`
    /// matrix.
    pub fn new(directedness: Directedness, capacity: usize) -> Self {
        Graph {
            directedness,
            matrix: AdjacencyMatrix::new(capacity),
            indexes: HashMap::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
        }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of nodes the matrix was sized for.
    pub fn capacity(&self) -> usize {
        self.matrix.size()
    }

    /// Registered node names, in index order.
    pub fn node_names(&self) -> &[String] {
        &self.names
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.indexes.contains_key(name)
    }

    pub(crate) fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    fn index_of(&self, name: &str) -> Result<usize, GraphError> {
        self.indexes
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Registers a node, assigning it the next matrix index.  Registering
    /// the same name again is a no-op.
    pub fn add_node(&mut self, name: &str) -> Result<(), GraphError> {
        if self.indexes.contains_key(name) {
            return Ok(());
        }
        if self.names.len() == self.matrix.size() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.matrix.size(),
            });
        }
        self.indexes.insert(name.to_string(), self.names.len());
        self.names.push(name.to_string());
        Ok(())
    }

    /// Adds an edge between two registered nodes.  Undirected graphs set the
    /// symmetric entry as well, so the matrix stays symmetric after every
    /// insertion.  Repeated insertion of the same edge is idempotent.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.matrix.set(from, to);
        if !self.is_directed() {
            self.matrix.set(to, from);
        }
        Ok(())
    }

    /// Tests whether `to` is adjacent to `from`.  Undirected graphs require
    /// the entry to be set in both directions; a half-set pair does not
    /// count as adjacent.
    pub fn is_adjacent(&self, from: &str, to: &str) -> Result<bool, GraphError> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        Ok(if self.is_directed() {
            self.matrix.get(from, to)
        } else {
            self.matrix.get(from, to) && self.matrix.get(to, from)
        })
    }

    /// Computes the degree of a node.
    pub fn degree(&self, name: &str) -> Result<Degree, GraphError> {
        let node = self.index_of(name)?;
        Ok(if self.is_directed() {
            Degree::Directed {
                out_degree: self.matrix.row_ones(node).count(),
                in_degree: self.matrix.col_ones(node).count(),
            }
        } else {
            Degree::Undirected(self.matrix.row_ones(node).count())
        })
    }

    /// Collects the neighbor names of a node.  Directed graphs list
    /// successors only.  Undirected graphs require the connection to be set
    /// in both directions, mirroring [`Graph::is_adjacent`].  A node without
    /// edges yields an empty set.
    pub fn neighbors(&self, name: &str) -> Result<HashSet<&str>, GraphError> {
        let node = self.index_of(name)?;
        Ok(self
            .matrix
            .row_ones(node)
            .filter(|&other| self.is_directed() || self.matrix.get(other, node))
            .map(|other| self.names[other].as_str())
            .collect())
    }

    /// Iterates over the edges of the graph in one pass over the matrix.
    ///
    /// Directed graphs yield every set `(from, to)` entry.  Undirected
    /// graphs yield each unordered pair once, scanning the upper triangle
    /// and requiring the entry to be set in both directions.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            graph: self,
            row: 0,
            col: 0,
        }
    }

    /// Converts the matrix into an adjacency-list view: every registered
    /// node paired with the names its row points to, in index order.
    ///
    /// This is a raw row dump on purpose.  Unlike [`Graph::neighbors`] it
    /// never checks the symmetric entry, and the adjacency-list text format
    /// relies on that: writing the dump and reading it back reproduces the
    /// edge set exactly.
    pub fn to_adjacency_list(&self) -> Vec<(&str, Vec<&str>)> {
        self.names
            .iter()
            .enumerate()
            .map(|(node, name)| {
                let row = self
                    .matrix
                    .row_ones(node)
                    .map(|other| self.names[other].as_str())
                    .collect();
                (name.as_str(), row)
            })
            .collect()
    }
}

impl fmt::Display for Graph {
    /// Row-major dump of the raw matrix values, one line of `0`/`1` cells
    /// per registered node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.node_count() {
            for col in 0..self.node_count() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", u8::from(self.matrix.get(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy edge iterator returned by [`Graph::edges`].
pub struct Edges<'g> {
    graph: &'g Graph,
    row: usize,
    col: usize,
}

impl<'g> Iterator for Edges<'g> {
    type Item = (&'g str, &'g str);

    fn next(&mut self) -> Option<Self::Item> {
        let count = self.graph.node_count();
        while self.row < count {
            if self.col >= count {
                self.row += 1;
                // Undirected scans stay in the upper triangle.
                self.col = if self.graph.is_directed() { 0 } else { self.row };
                continue;
            }
            let (row, col) = (self.row, self.col);
            self.col += 1;
            let present = if self.graph.is_directed() {
                self.graph.matrix.get(row, col)
            } else {
                self.graph.matrix.get(row, col) && self.graph.matrix.get(col, row)
            };
            if present {
                return Some((
                    self.graph.names[row].as_str(),
                    self.graph.names[col].as_str(),
                ));
            }
        }
        None
    }
}
