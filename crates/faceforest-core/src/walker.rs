//! Clockwise-most and counter-clockwise-most neighbor selection.
//!
//! These are the planar-embedding primitives of the minimal cycle basis
//! walk: given the directed edge just traversed, pick the neighbor that
//! makes the sharpest turn in the requested rotational sense. When there is
//! no previous vertex the incoming direction is taken to be straight down,
//! `(0, -1)`.
//!
//! The comparison structure follows Eberly's minimal-cycle-basis selection
//! exactly, including one asymmetry: after a replacement in the reflex
//! branch, the clockwise variant recomputes convexity with a strict `<`
//! while every other recomputation uses `<=`. Both walkers must keep these
//! comparisons verbatim; fixtures depend on them.

use petgraph::stable_graph::NodeIndex;

use crate::geometry::{Point, cross};
use crate::graph::FaceGraph;

/// Incoming direction used when the walk has no previous vertex.
const FROM_ABOVE: Point = Point { x: 0.0, y: -1.0 };

fn incoming_direction(graph: &FaceGraph, prev: Option<NodeIndex>, curr: NodeIndex) -> Point {
    match prev {
        Some(p) => graph.position(curr) - graph.position(p),
        None => FROM_ABOVE,
    }
}

/// Selects the neighbor of `curr` making the sharpest clockwise turn
/// relative to the edge `prev → curr`.
///
/// Returns `None` when `curr` has no neighbor other than `prev`.
pub fn clockwise_most(
    graph: &FaceGraph,
    prev: Option<NodeIndex>,
    curr: NodeIndex,
) -> Option<NodeIndex> {
    let d_curr = incoming_direction(graph, prev, curr);
    let mut next: Option<NodeIndex> = None;
    let mut d_next = FROM_ABOVE;
    let mut curr_is_convex = false;

    for adj in graph.neighbors(curr) {
        if Some(adj) == prev {
            continue;
        }
        let d_adj = graph.position(adj) - graph.position(curr);
        if next.is_none() {
            next = Some(adj);
            d_next = d_adj;
            curr_is_convex = cross(d_next, d_curr) <= 0.0;
            continue;
        }
        if curr_is_convex {
            if cross(d_curr, d_adj) < 0.0 || cross(d_next, d_adj) < 0.0 {
                next = Some(adj);
                d_next = d_adj;
                curr_is_convex = cross(d_next, d_curr) <= 0.0;
            }
        } else if cross(d_curr, d_adj) < 0.0 && cross(d_next, d_adj) < 0.0 {
            next = Some(adj);
            d_next = d_adj;
            curr_is_convex = cross(d_next, d_curr) < 0.0;
        }
    }
    next
}

/// Selects the neighbor of `curr` making the sharpest counter-clockwise
/// turn relative to the edge `prev → curr`.
///
/// Mirrors [`clockwise_most`]: strict `>` in place of `<`, the convex branch
/// requiring both comparisons and the reflex branch either.
pub fn counterclockwise_most(
    graph: &FaceGraph,
    prev: Option<NodeIndex>,
    curr: NodeIndex,
) -> Option<NodeIndex> {
    let d_curr = incoming_direction(graph, prev, curr);
    let mut next: Option<NodeIndex> = None;
    let mut d_next = FROM_ABOVE;
    let mut curr_is_convex = false;

    for adj in graph.neighbors(curr) {
        if Some(adj) == prev {
            continue;
        }
        let d_adj = graph.position(adj) - graph.position(curr);
        if next.is_none() {
            next = Some(adj);
            d_next = d_adj;
            curr_is_convex = cross(d_next, d_curr) <= 0.0;
            continue;
        }
        if curr_is_convex {
            if cross(d_curr, d_adj) > 0.0 && cross(d_next, d_adj) > 0.0 {
                next = Some(adj);
                d_next = d_adj;
                curr_is_convex = cross(d_next, d_curr) <= 0.0;
            }
        } else if cross(d_curr, d_adj) > 0.0 || cross(d_next, d_adj) > 0.0 {
            next = Some(adj);
            d_next = d_adj;
            curr_is_convex = cross(d_next, d_curr) <= 0.0;
        }
    }
    next
}
