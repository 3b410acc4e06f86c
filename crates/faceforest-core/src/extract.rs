//! Per-component minimal cycle basis extraction.
//!
//! Each round over a component prunes filaments, starts at the leftmost
//! vertex, and produces a closed walk by taking the clockwise-most first
//! step and counter-clockwise-most steps after that. The walk's
//! self-intersections are spliced out, each splice point (and the walk
//! start) opens an angular wedge whose interior edges are detached onto a
//! cloned vertex and extracted recursively as a nested sub-problem, and the
//! remaining simple cycle is emitted while its edges are unwound from the
//! live graph so the next round sees them gone.

use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;

use crate::filament::prune_filaments;
use crate::geometry::cross;
use crate::graph::FaceGraph;
use crate::graph::components::component_from;
use crate::tree::CycleTree;
use crate::walker::{clockwise_most, counterclockwise_most};

/// Extracts the full cycle basis of one component.
///
/// Returns an aggregator tree over the faces found; per the unwrap rule a
/// single-face component returns that face directly, and a component with
/// no faces returns an empty tree (dropped by the caller).
pub fn extract_basis(graph: &mut FaceGraph, component: &mut Vec<NodeIndex>) -> CycleTree {
    let mut children = Vec::new();
    loop {
        prune_filaments(graph, component);
        if component.is_empty() {
            break;
        }
        let Some(start) = leftmost_vertex(graph, component) else {
            break;
        };
        let Some(walk) = closed_walk(graph, start) else {
            // A walk that fails to close is only possible on inputs outside
            // the planar contract; abandon the component.
            break;
        };
        let tree = tree_from_closed_walk(graph, walk);
        if !tree.is_empty() {
            children.push(tree);
        }
        component.retain(|&v| graph.degree(v) > 0);
    }
    unwrap_aggregator(CycleTree {
        cycle: Vec::new(),
        children,
    })
}

/// Collapses a childless-or-single-child aggregator.
fn unwrap_aggregator(mut tree: CycleTree) -> CycleTree {
    if tree.cycle.is_empty() && tree.children.len() == 1 {
        return tree.children.remove(0);
    }
    tree
}

/// The vertex with minimum x, ties broken by minimum y.
fn leftmost_vertex(graph: &FaceGraph, component: &[NodeIndex]) -> Option<NodeIndex> {
    component.iter().copied().min_by(|&a, &b| {
        let pa = graph.position(a);
        let pb = graph.position(b);
        pa.x
            .partial_cmp(&pb.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal))
    })
}

/// Builds the closed walk seeded at `start`.
///
/// The first step is clockwise-most with the incoming direction taken from
/// above; every later step is counter-clockwise-most relative to the edge
/// just walked. The walk ends when it returns to `start`, which is then
/// appended again to close it.
///
/// Returns `None` if a step has no continuation or the walk exceeds the
/// live edge budget, both of which only happen outside the planar contract.
fn closed_walk(graph: &FaceGraph, start: NodeIndex) -> Option<Vec<NodeIndex>> {
    let limit = 2 * graph.edge_count() + 1;
    let mut walk = vec![start];
    let mut curr = start;
    let mut adj = clockwise_most(graph, None, curr)?;
    while adj != start {
        if walk.len() > limit {
            return None;
        }
        walk.push(adj);
        let next = counterclockwise_most(graph, Some(curr), adj)?;
        curr = adj;
        adj = next;
    }
    walk.push(start);
    Some(walk)
}

/// Splices self-intersections out of `walk` and returns the detachment
/// indices, in discovery order.
///
/// Scanning the interior entries, the first revisit of a record closes the
/// loop `[i_min, i_max]`: everything strictly between is removed from the
/// walk and from the bookkeeping, `i_min` becomes a detachment point, and
/// the scan resumes just past `i_min`.
fn simplify_walk(walk: &mut Vec<NodeIndex>) -> Vec<usize> {
    let mut first_seen: HashMap<NodeIndex, usize> = HashMap::new();
    let mut detachments: Vec<usize> = Vec::new();
    let mut i = 1;
    while i + 1 < walk.len() {
        match first_seen.get(&walk[i]).copied() {
            None => {
                first_seen.insert(walk[i], i);
            }
            Some(i_min) => {
                let i_max = i;
                if !detachments.contains(&i_min) {
                    detachments.push(i_min);
                }
                first_seen.retain(|_, index| *index <= i_min || *index >= i_max);
                detachments.retain(|&index| index <= i_min || index >= i_max);
                walk.drain(i_min + 1..=i_max);
                i = i_min;
            }
        }
        i += 1;
    }
    detachments
}

/// Turns a closed walk into a [`CycleTree`], detaching wedge sub-problems.
fn tree_from_closed_walk(graph: &mut FaceGraph, mut walk: Vec<NodeIndex>) -> CycleTree {
    let mut detachments = simplify_walk(&mut walk);
    let mut cycle = Vec::new();
    let mut children = Vec::new();

    if walk.len() > 3 {
        detachments.push(0);
        for &index in &detachments {
            if let Some(subtree) = detach_wedge(graph, &walk, index) {
                if !subtree.is_empty() {
                    children.push(subtree);
                }
            }
        }
        cycle = walk.iter().map(|&v| graph.name(v)).collect();
        unwind_cycle(graph, &walk);
    } else if walk.len() >= 2 {
        // A two-edge walk is a doubled-back path, not a face. Its lone edge
        // moves to a clone so the recursion can consume the region behind
        // it without the dead end.
        let original = walk[0];
        let other = walk[1];
        let clone = graph.clone_vertex(original);
        graph.remove_edge_between(original, other);
        graph.add_edge(clone, other);
        let mut sub = component_from(graph, clone);
        let subtree = extract_basis(graph, &mut sub);
        if !subtree.is_empty() {
            children.push(subtree);
        }
    }

    unwrap_aggregator(CycleTree { cycle, children })
}

/// Detaches the edges falling inside the walk's wedge at `index`.
///
/// The wedge at walk vertex `v` is bounded by the walk edges into and out of
/// `v`. Any other incident edge pointing into the wedge belongs to a face
/// nested at `v`: those edges move to a clone of `v`, and the component now
/// reachable from the clone is extracted recursively.
///
/// Returns `None` when no incident edge falls inside the wedge.
fn detach_wedge(graph: &mut FaceGraph, walk: &[NodeIndex], index: usize) -> Option<CycleTree> {
    let original = walk[index];
    let wedge_max = walk[index + 1];
    let wedge_min = if index == 0 {
        walk[walk.len() - 2]
    } else {
        walk[index - 1]
    };

    let origin = graph.position(original);
    let d_min = graph.position(wedge_min) - origin;
    let d_max = graph.position(wedge_max) - origin;
    let convex = d_max.x * d_min.y >= d_max.y * d_min.x;
    let min_name = graph.name(wedge_min);
    let max_name = graph.name(wedge_max);

    let in_wedge: Vec<NodeIndex> = graph
        .neighbors(original)
        .filter(|&adj| {
            let name = graph.name(adj);
            if name == min_name || name == max_name {
                return false;
            }
            let d_adj = graph.position(adj) - origin;
            if convex {
                cross(d_adj, d_min) > 0.0 && cross(d_adj, d_max) < 0.0
            } else {
                cross(d_adj, d_min) > 0.0 || cross(d_adj, d_max) < 0.0
            }
        })
        .collect();

    if in_wedge.is_empty() {
        return None;
    }

    let clone = graph.clone_vertex(original);
    for adj in in_wedge {
        graph.remove_edge_between(original, adj);
        graph.add_edge(clone, adj);
    }
    let mut sub = component_from(graph, clone);
    Some(extract_basis(graph, &mut sub))
}

/// Removes the emitted cycle's edges from the live graph.
///
/// Drops the first walk edge, then consumes the degree-1 chain this opens
/// up from either end, stopping at a branching vertex so edges shared with
/// other faces survive.
fn unwind_cycle(graph: &mut FaceGraph, walk: &[NodeIndex]) {
    let mut v0 = walk[0];
    let mut v1 = walk[1];
    let mut branch = if graph.degree(v0) > 2 { Some(v0) } else { None };
    graph.remove_edge_between(v0, v1);

    while Some(v1) != branch && graph.degree(v1) == 1 {
        let Some(next) = graph.first_neighbor(v1) else {
            break;
        };
        graph.remove_edge_between(v1, next);
        v1 = next;
    }

    if v1 != v0 {
        branch = Some(v1);
        while Some(v0) != branch && graph.degree(v0) == 1 {
            let Some(next) = graph.first_neighbor(v0) else {
                break;
            };
            graph.remove_edge_between(v0, next);
            v0 = next;
        }
    }
}
