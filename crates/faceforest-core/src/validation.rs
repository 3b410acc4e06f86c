//! Input validation for the discovery boundary.
//!
//! The scan is fail-fast and its order is observable: emptiness first, then a
//! single pass over positions (coordinate range before duplicate detection,
//! per position), then a single pass over edges (bounds before duplicate
//! detection, per edge).

use std::collections::{HashMap, HashSet};

use crate::error::DiscoveryError;
use crate::geometry::Point;

/// Bit-level key for componentwise position equality.
///
/// Coordinates are validated finite and non-negative before keying; adding
/// `0.0` folds `-0.0` into `0.0` so the two compare equal.
fn position_key(p: Point) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Checks a discovery input, returning the first violation encountered.
///
/// # Errors
///
/// - [`DiscoveryError::GraphEmpty`] — `positions` or `edges` is empty.
/// - [`DiscoveryError::InvalidCoordinateSystem`] — a coordinate is negative
///   or not finite.
/// - [`DiscoveryError::VerticesHaveSamePosition`] — two positions are
///   componentwise equal.
/// - [`DiscoveryError::EdgeEndpointOutOfBounds`] — an edge endpoint is not a
///   valid index into `positions`.
/// - [`DiscoveryError::DuplicateEdgeFound`] — an ordered endpoint pair
///   repeats. The reversed pair `(b, a)` is a distinct key and is accepted;
///   both spellings collapse to one undirected edge during graph
///   construction.
pub fn validate(positions: &[Point], edges: &[(usize, usize)]) -> Result<(), DiscoveryError> {
    if positions.is_empty() || edges.is_empty() {
        return Err(DiscoveryError::GraphEmpty);
    }

    let mut seen_positions: HashMap<(u64, u64), usize> = HashMap::with_capacity(positions.len());
    for (vertex, &p) in positions.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() || p.x < 0.0 || p.y < 0.0 {
            return Err(DiscoveryError::InvalidCoordinateSystem {
                vertex,
                x: p.x,
                y: p.y,
            });
        }
        if let Some(&first) = seen_positions.get(&position_key(p)) {
            return Err(DiscoveryError::VerticesHaveSamePosition {
                first,
                second: vertex,
            });
        }
        seen_positions.insert(position_key(p), vertex);
    }

    let mut seen_edges: HashSet<(usize, usize)> = HashSet::with_capacity(edges.len());
    for (edge, &(source, target)) in edges.iter().enumerate() {
        if source >= positions.len() || target >= positions.len() {
            let endpoint = if source >= positions.len() { source } else { target };
            return Err(DiscoveryError::EdgeEndpointOutOfBounds { edge, endpoint });
        }
        if !seen_edges.insert((source, target)) {
            return Err(DiscoveryError::DuplicateEdgeFound {
                edge,
                source,
                target,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_positions_are_rejected() {
        let err = validate(&[], &[(0, 1)]).expect_err("must reject");
        assert_eq!(err, DiscoveryError::GraphEmpty);
    }

    #[test]
    fn empty_edges_are_rejected() {
        let positions = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        let err = validate(&positions, &[]).expect_err("must reject");
        assert_eq!(err, DiscoveryError::GraphEmpty);
    }

    #[test]
    fn negative_coordinate_is_rejected() {
        let positions = pts(&[(0.0, 0.0), (1.0, -2.0)]);
        let err = validate(&positions, &[(0, 1)]).expect_err("must reject");
        assert_eq!(
            err,
            DiscoveryError::InvalidCoordinateSystem {
                vertex: 1,
                x: 1.0,
                y: -2.0
            }
        );
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let positions = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        let err = validate(&positions, &[(0, 1)]).expect_err("must reject");
        assert_eq!(err.code(), "INVALID_COORDINATE_SYSTEM");
    }

    #[test]
    fn repeated_position_is_rejected() {
        let positions = pts(&[(1.0, 1.0), (1.0, 1.0)]);
        let err = validate(&positions, &[(0, 1)]).expect_err("must reject");
        assert_eq!(
            err,
            DiscoveryError::VerticesHaveSamePosition { first: 0, second: 1 }
        );
    }

    /// The position scan runs before the edge scan, so a repeated position
    /// wins over a bad edge; within the position scan, the coordinate check
    /// runs first for each position.
    #[test]
    fn scan_order_is_observable() {
        let positions = pts(&[(1.0, 1.0), (1.0, 1.0)]);
        let err = validate(&positions, &[(0, 99)]).expect_err("must reject");
        assert_eq!(err.code(), "VERTICES_HAVE_SAME_POSITION");

        let positions = pts(&[(0.0, -1.0), (0.0, -1.0)]);
        let err = validate(&positions, &[(0, 1)]).expect_err("must reject");
        assert_eq!(err.code(), "INVALID_COORDINATE_SYSTEM");
    }

    #[test]
    fn out_of_bounds_endpoint_is_rejected() {
        let positions = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        let err = validate(&positions, &[(0, 99)]).expect_err("must reject");
        assert_eq!(
            err,
            DiscoveryError::EdgeEndpointOutOfBounds { edge: 0, endpoint: 99 }
        );
    }

    #[test]
    fn ordered_duplicate_edge_is_rejected() {
        let positions = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let err =
            validate(&positions, &[(0, 1), (1, 2), (0, 1)]).expect_err("must reject");
        assert_eq!(
            err,
            DiscoveryError::DuplicateEdgeFound {
                edge: 2,
                source: 0,
                target: 1
            }
        );
    }

    /// The reversed spelling of an edge is a distinct ordered key.
    #[test]
    fn reversed_edge_pair_is_accepted() {
        let positions = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        validate(&positions, &[(0, 1), (1, 0)]).expect("both directions accepted");
    }

    #[test]
    fn valid_input_passes() {
        let positions = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
        validate(&positions, &[(0, 1), (1, 2), (2, 0)]).expect("valid");
    }
}
