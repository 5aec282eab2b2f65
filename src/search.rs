use tracing::{debug, trace};

use crate::graph::Graph;

/// Scratch state for one articulation-point search.
///
/// Built fresh per invocation so repeated searches are independent and the
/// graph itself carries no traversal residue.
struct DfsSession<'g> {
    graph: &'g Graph,
    /// Global visitation clock; incremented before each first visit.
    time: usize,
    discovery: Vec<usize>,
    low: Vec<usize>,
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    reports: Vec<usize>,
}

impl Graph {
    /// Finds the articulation points of the graph with a low-link DFS.
    ///
    /// A DFS tree is rooted at every node not reached by an earlier tree,
    /// taking nodes in registration order, so disconnected graphs are fully
    /// covered.  A root is flagged when it has more than one DFS child; any
    /// other node is flagged when a child's subtree cannot reach back above
    /// it (`low[child] >= discovery[node]`).
    ///
    /// Names are returned in visitation order, once per report event: a node
    /// that satisfies a condition on several child returns appears several
    /// times, exactly as the search encounters it.
    ///
    /// The traversal descends every set entry in the current node's row.  In
    /// a directed graph that means one-way edges are walked without a return
    /// path; the result is well-defined but only carries the usual
    /// cut-vertex meaning on undirected graphs.
    pub fn articulation_points(&self) -> Vec<&str> {
        let count = self.node_count();
        let mut session = DfsSession {
            graph: self,
            time: 0,
            discovery: vec![0; count],
            low: vec![0; count],
            visited: vec![false; count],
            parent: vec![None; count],
            reports: Vec::new(),
        };

        for node in 0..count {
            if !session.visited[node] {
                session.dfs(node);
            }
        }

        debug!(reports = session.reports.len(), "articulation search done");
        session
            .reports
            .iter()
            .map(|&node| self.node_names()[node].as_str())
            .collect()
    }
}

impl DfsSession<'_> {
    fn dfs(&mut self, u: usize) {
        self.visited[u] = true;
        self.time += 1;
        self.discovery[u] = self.time;
        self.low[u] = self.time;
        let mut children = 0;
        trace!(node = u, time = self.time, "visit");

        let graph = self.graph;
        for v in graph.matrix().row_ones(u) {
            if !self.visited[v] {
                children += 1;
                self.parent[v] = Some(u);
                self.dfs(v);
                self.low[u] = self.low[u].min(self.low[v]);

                // Root with more than one DFS child.
                if self.parent[u].is_none() && children > 1 {
                    self.report(u);
                }
                // Non-root whose child subtree cannot reach above it.
                if self.parent[u].is_some() && self.low[v] >= self.discovery[u] {
                    self.report(u);
                }
            } else if Some(v) != self.parent[u] {
                // Back-edge: v was discovered earlier on this tree.
                self.low[u] = self.low[u].min(self.discovery[v]);
            }
        }
    }

    fn report(&mut self, u: usize) {
        trace!(node = u, "articulation point");
        self.reports.push(u);
    }
}
