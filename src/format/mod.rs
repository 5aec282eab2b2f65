//! The two flat text formats: an edge list and an adjacency list.
//!
//! Both start with a directedness tag line (`D` for directed, anything else
//! undirected).  The edge list names one edge per line; the adjacency list
//! names a node per line followed by the nodes its matrix row points to.

pub mod adjacency_list;
pub mod edge_list;

use std::io;

use crate::graph::GraphError;

/// Separator between node names on a line.
pub(crate) const NAME_SEPARATOR: &str = ", ";

/// Separator between an adjacency-list key and its neighbor list.
pub(crate) const ROW_SEPARATOR: &str = ": ";

/// Errors raised while reading or writing the text formats.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A line did not split into the field count its format requires.
    #[error("line {line}: expected exactly two node names separated by \", \"")]
    FieldCount { line: usize },
    /// The graph rejected a node or edge built from the input.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// IO error while reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
