use densegraph::format::edge_list;

#[test]
fn test_path_graph_reports_the_middle_node_once() {
    let graph = edge_list::parse("ND\nA, B\nB, C\n").unwrap();
    assert_eq!(graph.articulation_points(), vec!["B"]);
}

#[test]
fn test_star_graph_reports_the_center() {
    // The center is a DFS root with three children; the root condition
    // holds on every child return after the first.
    let graph = edge_list::parse("ND\nX, A\nX, B\nX, C\n").unwrap();
    assert_eq!(graph.articulation_points(), vec!["X", "X"]);
}

#[test]
fn test_cycle_has_no_articulation_points() {
    let graph = edge_list::parse("ND\nA, B\nB, C\nC, A\n").unwrap();
    assert!(graph.articulation_points().is_empty());
}

#[test]
fn test_two_triangles_joined_at_a_node() {
    // Two triangles sharing only B: removing B disconnects them.
    let graph = edge_list::parse("ND\nA, B\nB, C\nC, A\nB, D\nD, E\nE, B\n").unwrap();
    assert_eq!(graph.articulation_points(), vec!["B"]);
}

#[test]
fn test_bridge_endpoints_are_both_reported() {
    // Two triangles joined by the bridge C-D.
    let graph =
        edge_list::parse("ND\nA, B\nB, C\nC, A\nC, D\nD, E\nE, F\nF, D\n").unwrap();
    assert_eq!(graph.articulation_points(), vec!["D", "C"]);
}

#[test]
fn test_disconnected_graph_searches_every_component() {
    let graph = edge_list::parse("ND\nA, B\nB, C\nD, E\nE, F\n").unwrap();
    assert_eq!(graph.articulation_points(), vec!["B", "E"]);
}

#[test]
fn test_search_is_reinvocable() {
    let graph = edge_list::parse("ND\nA, B\nB, C\n").unwrap();
    assert_eq!(graph.articulation_points(), graph.articulation_points());
}

#[test]
fn test_edgeless_graph_from_adjacency_list() {
    let graph = densegraph::format::adjacency_list::parse("ND\nA: \nB: \n").unwrap();
    assert!(graph.articulation_points().is_empty());
}
