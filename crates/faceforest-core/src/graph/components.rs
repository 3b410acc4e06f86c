//! Connected component decomposition via iterative depth-first search.
//!
//! The DFS uses an explicit stack and appends a vertex to its component when
//! the vertex is finished (all neighbors visited), so components come out in
//! DFS post-order. Each step either pushes the first unvisited neighbor of
//! the stack top or pops the top as finished.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;

use super::FaceGraph;

/// Decomposes the graph into connected components, one `Vec` per component,
/// each in DFS post-order. Seeds are taken from the vertex store in creation
/// order.
pub fn components(graph: &FaceGraph) -> Vec<Vec<NodeIndex>> {
    let mut discovered: HashSet<NodeIndex> = HashSet::new();
    let mut out = Vec::new();
    for &seed in graph.store() {
        if discovered.contains(&seed) {
            continue;
        }
        out.push(collect_from(graph, seed, &mut discovered));
    }
    out
}

/// Collects the connected component containing `seed`, in DFS post-order.
///
/// Used on freshly cloned vertices during wedge detachment, where the
/// detached sub-graph becomes a new extraction problem.
pub fn component_from(graph: &FaceGraph, seed: NodeIndex) -> Vec<NodeIndex> {
    let mut discovered: HashSet<NodeIndex> = HashSet::new();
    collect_from(graph, seed, &mut discovered)
}

fn collect_from(
    graph: &FaceGraph,
    seed: NodeIndex,
    discovered: &mut HashSet<NodeIndex>,
) -> Vec<NodeIndex> {
    let mut component = Vec::new();
    let mut stack = vec![seed];
    discovered.insert(seed);

    while let Some(&top) = stack.last() {
        match graph.neighbors(top).find(|n| !discovered.contains(n)) {
            Some(next) => {
                discovered.insert(next);
                stack.push(next);
            }
            None => {
                stack.pop();
                component.push(top);
            }
        }
    }
    component
}
