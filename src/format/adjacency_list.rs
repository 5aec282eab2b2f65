//! The adjacency-list format.
//!
//! ```text
//! ND
//! a: b, c
//! b: a
//! c: a
//! ```
//!
//! (A fourth, edgeless node would be written as `d: ` with nothing after
//! the separator.)
//!
//! Every line after the tag is a node name, the `": "` separator, and the
//! comma-separated names its matrix row points to; a node without edges
//! keeps the trailing separator and nothing after it.  Written rows are a
//! raw row dump ([`Graph::to_adjacency_list`]), so an undirected edge
//! appears on both of its endpoints' lines and reading the file back
//! restores the same matrix.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::directedness::Directedness;
use crate::format::{FormatError, NAME_SEPARATOR, ROW_SEPARATOR};
use crate::graph::Graph;

/// Parses a graph from adjacency-list text.
///
/// A node may appear only as a neighbor value, never as a line's own key;
/// such nodes are discovered and registered too, before any edge is added.
pub fn parse(input: &str) -> Result<Graph, FormatError> {
    let directedness = Directedness::from_tag(input.lines().next().unwrap_or(""));

    let mut names: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<(&str, Vec<&str>)> = Vec::new();
    for line in input.lines().skip(1) {
        let (name, neighbors) = split_row(line);
        for name in std::iter::once(name).chain(neighbors.iter().copied()) {
            if seen.insert(name) {
                names.push(name);
            }
        }
        rows.push((name, neighbors));
    }

    let mut graph = Graph::new(directedness, names.len());
    for name in &names {
        graph.add_node(name)?;
    }
    for (name, neighbors) in rows {
        for neighbor in neighbors {
            graph.add_edge(name, neighbor)?;
        }
    }

    debug!(
        nodes = graph.node_count(),
        directed = graph.is_directed(),
        "loaded adjacency-list graph"
    );
    Ok(graph)
}

/// Reads an adjacency-list graph from a file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Graph, FormatError> {
    parse(&fs::read_to_string(path)?)
}

/// Writes the adjacency-list form of a graph.
pub fn write(graph: &Graph, output: &mut impl io::Write) -> Result<(), FormatError> {
    writeln!(output, "{}", graph.directedness().tag())?;
    for (name, neighbors) in graph.to_adjacency_list() {
        writeln!(
            output,
            "{}{}{}",
            name,
            ROW_SEPARATOR,
            neighbors.join(NAME_SEPARATOR)
        )?;
    }
    Ok(())
}

/// Writes the adjacency-list form of a graph to a file, replacing any
/// existing content.
pub fn write_file(graph: &Graph, path: impl AsRef<Path>) -> Result<(), FormatError> {
    let mut file = fs::File::create(path)?;
    write(graph, &mut file)
}

/// Renders the adjacency-list form of a graph to a string.
pub fn render(graph: &Graph) -> String {
    let mut output = Vec::new();
    write(graph, &mut output).expect("writing to a Vec cannot fail");
    String::from_utf8(output).expect("rendered text is UTF-8")
}

fn split_row(line: &str) -> (&str, Vec<&str>) {
    match line.split_once(ROW_SEPARATOR) {
        Some((name, "")) => (name, Vec::new()),
        Some((name, rest)) => (name, rest.split(NAME_SEPARATOR).collect()),
        // No separator at all: a key with no neighbor list.
        None => (line, Vec::new()),
    }
}
