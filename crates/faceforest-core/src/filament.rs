//! Removal of filaments, the dangling degree-1 paths that can belong to no
//! cycle.

use petgraph::stable_graph::NodeIndex;

use crate::graph::FaceGraph;

/// Prunes every filament from `component`.
///
/// Each degree-1 endpoint is walked inward: the edge to its sole neighbor is
/// removed and the walk advances while the next vertex has become degree-1
/// in turn, stopping at a branching vertex or when the path is consumed.
/// Vertices left with no adjacency are dropped from the component.
///
/// Afterwards the component is either empty or every remaining vertex has
/// degree at least two (so at least one cycle exists).
pub fn prune_filaments(graph: &mut FaceGraph, component: &mut Vec<NodeIndex>) {
    let endpoints: Vec<NodeIndex> = component
        .iter()
        .copied()
        .filter(|&v| graph.degree(v) == 1)
        .collect();

    for endpoint in endpoints {
        let mut v = endpoint;
        while graph.degree(v) == 1 {
            let Some(next) = graph.first_neighbor(v) else {
                break;
            };
            graph.remove_edge_between(v, next);
            v = next;
        }
    }

    component.retain(|&v| graph.degree(v) > 0);
}
