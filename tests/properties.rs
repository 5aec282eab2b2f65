use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use densegraph::format::adjacency_list;
use densegraph::{Degree, Directedness, Graph};

/// Number of distinct node names the generated graphs draw from.
const NAME_POOL: u8 = 8;

fn node_name(index: u8) -> String {
    format!("n{}", index % NAME_POOL)
}

/// Builds a graph over the full name pool from an arbitrary edge sequence.
fn build(directedness: Directedness, edges: &[(u8, u8)]) -> Graph {
    let mut graph = Graph::new(directedness, NAME_POOL as usize);
    for index in 0..NAME_POOL {
        graph.add_node(&node_name(index)).unwrap();
    }
    for &(from, to) in edges {
        graph.add_edge(&node_name(from), &node_name(to)).unwrap();
    }
    graph
}

fn rows(graph: &Graph) -> HashMap<String, HashSet<String>> {
    graph
        .to_adjacency_list()
        .into_iter()
        .map(|(name, row)| {
            (
                name.to_string(),
                row.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}

/// Normalized edge set: directed pairs as-is, undirected pairs sorted.
fn edge_set(graph: &Graph) -> HashSet<(String, String)> {
    graph
        .edges()
        .map(|(from, to)| {
            if graph.is_directed() || from <= to {
                (from.to_string(), to.to_string())
            } else {
                (to.to_string(), from.to_string())
            }
        })
        .collect()
}

#[quickcheck]
fn prop_undirected_matrix_stays_symmetric(edges: Vec<(u8, u8)>) -> bool {
    let graph = build(Directedness::Undirected, &edges);
    let rows = rows(&graph);
    rows.iter()
        .all(|(name, row)| row.iter().all(|other| rows[other].contains(name)))
}

#[quickcheck]
fn prop_undirected_degree_equals_neighbor_count(edges: Vec<(u8, u8)>) -> bool {
    let graph = build(Directedness::Undirected, &edges);
    graph.node_names().iter().all(|name| {
        graph.degree(name).unwrap() == Degree::Undirected(graph.neighbors(name).unwrap().len())
    })
}

#[quickcheck]
fn prop_directed_degrees_match_the_edge_list(edges: Vec<(u8, u8)>) -> bool {
    let graph = build(Directedness::Directed, &edges);
    let edges: Vec<_> = graph.edges().collect();
    graph.node_names().iter().all(|name| {
        let out_expected = edges.iter().filter(|(from, _)| from == name).count();
        let in_expected = edges.iter().filter(|(_, to)| to == name).count();
        graph.degree(name).unwrap()
            == Degree::Directed {
                out_degree: out_expected,
                in_degree: in_expected,
            }
    })
}

#[quickcheck]
fn prop_adjacency_agrees_with_neighbors(directed: bool, edges: Vec<(u8, u8)>) -> bool {
    let directedness = if directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    let graph = build(directedness, &edges);
    graph.node_names().iter().all(|from| {
        let neighbors = graph.neighbors(from).unwrap();
        graph.node_names().iter().all(|to| {
            graph.is_adjacent(from, to).unwrap() == neighbors.contains(to.as_str())
        })
    })
}

#[quickcheck]
fn prop_adjacency_list_round_trip_preserves_the_edge_set(
    directed: bool,
    edges: Vec<(u8, u8)>,
) -> bool {
    let directedness = if directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    let graph = build(directedness, &edges);
    let restored = adjacency_list::parse(&adjacency_list::render(&graph)).unwrap();
    restored.directedness() == graph.directedness()
        && restored.node_count() == graph.node_count()
        && edge_set(&restored) == edge_set(&graph)
}
