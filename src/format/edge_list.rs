//! The edge-list format.
//!
//! ```text
//! ND
//! a, b
//! b, c
//! ```
//!
//! Every line after the tag names one edge as exactly two node names.
//! Loading makes two passes over the input: the first collects the distinct
//! node set so the matrix can be sized before any node or edge is added.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::directedness::Directedness;
use crate::format::{FormatError, NAME_SEPARATOR};
use crate::graph::Graph;

/// Parses a graph from edge-list text.
pub fn parse(input: &str) -> Result<Graph, FormatError> {
    let directedness = Directedness::from_tag(input.lines().next().unwrap_or(""));

    // First pass: the distinct node set, in first-appearance order so index
    // assignment is deterministic.
    let mut names: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for (number, line) in input.lines().enumerate().skip(1) {
        let (from, to) = split_edge(line, number + 1)?;
        for name in [from, to] {
            if seen.insert(name) {
                names.push(name);
            }
        }
    }

    // Second pass: size the graph, register everything, add the edges.
    let mut graph = Graph::new(directedness, names.len());
    for name in &names {
        graph.add_node(name)?;
    }
    for (number, line) in input.lines().enumerate().skip(1) {
        let (from, to) = split_edge(line, number + 1)?;
        graph.add_edge(from, to)?;
    }

    debug!(
        nodes = graph.node_count(),
        directed = graph.is_directed(),
        "loaded edge-list graph"
    );
    Ok(graph)
}

/// Reads an edge-list graph from a file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Graph, FormatError> {
    parse(&fs::read_to_string(path)?)
}

fn split_edge(line: &str, number: usize) -> Result<(&str, &str), FormatError> {
    let mut fields = line.split(NAME_SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(from), Some(to), None) => Ok((from, to)),
        _ => Err(FormatError::FieldCount { line: number }),
    }
}
