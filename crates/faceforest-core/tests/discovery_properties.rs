//! Property-based tests for the discovery invariants.
//!
//! Geometric properties run on integer-valued coordinates so the winding
//! and area sums are exact and sign comparisons cannot flip in the last
//! ulp; discovery properties shuffle the edge lists of known planar
//! fixtures.
#![allow(clippy::expect_used)]

use faceforest_core::geometry::{Winding, polygon_area, winding_order};
use faceforest_core::nesting::AreaTree;
use faceforest_core::{CycleTree, Point, area_tree, discover};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn normalize(cycle: &[usize]) -> Vec<usize> {
    let mut open = cycle.to_vec();
    if open.len() > 1 && open.first() == open.last() {
        open.pop();
    }
    let n = open.len();
    if n == 0 {
        return open;
    }
    let min_pos = open
        .iter()
        .enumerate()
        .min_by_key(|&(_, name)| *name)
        .map(|(i, _)| i)
        .expect("non-empty");
    let forward: Vec<usize> = (0..n).map(|k| open[(min_pos + k) % n]).collect();
    let backward: Vec<usize> = (0..n).map(|k| open[(min_pos + n - k) % n]).collect();
    if forward <= backward { forward } else { backward }
}

fn normalized_cycles(trees: &[CycleTree]) -> Vec<Vec<usize>> {
    let mut out: Vec<Vec<usize>> = Vec::new();
    for tree in trees {
        if !tree.cycle.is_empty() {
            out.push(normalize(&tree.cycle));
        }
        out.extend(normalized_cycles(&tree.children));
    }
    out.sort();
    out
}

fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((0u32..50, 0u32..50), 3..10)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Point::new(x.into(), y.into())).collect())
}

/// Checks `withoutChildren == total - Σ direct child totals` on every node.
fn assert_area_bookkeeping(tree: &AreaTree) {
    if let AreaTree::Child { area, children, .. } = tree {
        let child_sum: f64 = children
            .iter()
            .map(|child| match child {
                AreaTree::Child { area, .. } => area.total,
                AreaTree::Root { .. } => 0.0,
            })
            .sum();
        assert!(
            (area.without_children - (area.total - child_sum)).abs() < 1e-9,
            "bookkeeping broken: total={}, withoutChildren={}, children={}",
            area.total,
            area.without_children,
            child_sum
        );
    }
    let children = match tree {
        AreaTree::Root { children } | AreaTree::Child { children, .. } => children,
    };
    for child in children {
        assert_area_bookkeeping(child);
    }
}

proptest! {
    /// Reversing a point sequence swaps CW and CCW and preserves COLINEAR.
    #[test]
    fn winding_order_is_self_dual(points in grid_points()) {
        let mut reversed = points.clone();
        reversed.reverse();
        let expected = match winding_order(&points) {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Colinear => Winding::Colinear,
        };
        prop_assert_eq!(winding_order(&reversed), expected);
    }

    /// Closed paths never report a negative area, self-intersecting or not.
    #[test]
    fn polygon_area_is_non_negative(points in grid_points()) {
        let mut path = points;
        if let Some(&first) = path.first() {
            path.push(first);
        }
        prop_assert!(polygon_area(&path) >= 0.0);
    }

    /// The multiset of discovered cycles does not depend on edge order.
    #[test]
    fn shared_edge_fixture_is_edge_order_independent(
        edges in Just(vec![(0, 1), (1, 2), (2, 0), (1, 3), (3, 2)]).prop_shuffle()
    ) {
        let positions = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0), (3.0, 2.0)]);
        let result = discover(&positions, &edges).expect("valid input");
        prop_assert_eq!(
            normalized_cycles(&result.forest),
            vec![vec![0, 1, 2], vec![1, 2, 3]]
        );
    }

    /// Edge order does not change which faces a wedge detachment finds.
    #[test]
    fn wedge_fixture_is_edge_order_independent(
        edges in Just(vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (4, 5), (5, 0)]).prop_shuffle()
    ) {
        let positions = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (1.0, 1.0),
            (2.0, 1.0),
        ]);
        let result = discover(&positions, &edges).expect("valid input");
        prop_assert_eq!(
            normalized_cycles(&result.forest),
            vec![vec![0, 1, 2, 3], vec![0, 4, 5]]
        );

        for cycle in result.cycles() {
            prop_assert_eq!(cycle.first(), cycle.last());
        }
    }

    /// Concentric square rings nest into a chain and every node's area
    /// bookkeeping is consistent.
    #[test]
    fn concentric_rings_nest_with_consistent_areas(
        ring_count in 1usize..4,
        jitter in 0.0f64..0.9
    ) {
        let mut positions = Vec::new();
        let mut edges = Vec::new();
        for ring in 0..ring_count {
            let half = 12.0 - 3.0 * ring as f64 - jitter * (ring as f64 + 1.0) / 4.0;
            let base = positions.len();
            positions.push(Point::new(15.0 - half, 15.0 - half));
            positions.push(Point::new(15.0 + half, 15.0 - half));
            positions.push(Point::new(15.0 + half, 15.0 + half));
            positions.push(Point::new(15.0 - half, 15.0 + half));
            edges.push((base, base + 1));
            edges.push((base + 1, base + 2));
            edges.push((base + 2, base + 3));
            edges.push((base + 3, base));
        }

        let tree = area_tree(&positions, &edges).expect("valid input");
        assert_area_bookkeeping(&tree);

        // Chain depth equals the ring count.
        let mut depth = 0;
        let mut cursor = Some(&tree);
        while let Some(AreaTree::Child { children, .. }) = cursor {
            depth += 1;
            cursor = children.first();
        }
        prop_assert_eq!(depth, ring_count);
    }
}
