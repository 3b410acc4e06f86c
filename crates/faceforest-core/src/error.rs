//! Error values returned at the discovery boundary.
//!
//! Every malformed input is rejected before any graph state is built, with
//! the first matching reason in the scan order of [`crate::validation`].

use std::fmt;

/// Reasons a discovery request can be rejected.
///
/// Variants carry enough context to point at the offending input entry;
/// [`DiscoveryError::code`] returns the stable machine-readable reason
/// string for each variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryError {
    /// The input has no positions or no edges.
    GraphEmpty,
    /// A vertex position has a negative or non-finite coordinate.
    InvalidCoordinateSystem {
        /// Index of the offending position.
        vertex: usize,
        /// The position's x coordinate.
        x: f64,
        /// The position's y coordinate.
        y: f64,
    },
    /// Two input vertices share the same position componentwise.
    VerticesHaveSamePosition {
        /// Index of the position seen first.
        first: usize,
        /// Index of the position that repeats it.
        second: usize,
    },
    /// An edge references a vertex index outside the position array.
    EdgeEndpointOutOfBounds {
        /// Index of the offending edge.
        edge: usize,
        /// The out-of-range endpoint value.
        endpoint: usize,
    },
    /// The same ordered endpoint pair appears twice in the edge list.
    DuplicateEdgeFound {
        /// Index of the repeating edge.
        edge: usize,
        /// The duplicated source endpoint.
        source: usize,
        /// The duplicated target endpoint.
        target: usize,
    },
}

impl DiscoveryError {
    /// Returns the stable reason code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GraphEmpty => "GRAPH_EMPTY",
            Self::InvalidCoordinateSystem { .. } => "INVALID_COORDINATE_SYSTEM",
            Self::VerticesHaveSamePosition { .. } => "VERTICES_HAVE_SAME_POSITION",
            Self::EdgeEndpointOutOfBounds { .. } => "EDGE_ENDPOINT_OUT_OF_BOUNDS",
            Self::DuplicateEdgeFound { .. } => "DUPLICATE_EDGE_FOUND",
        }
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphEmpty => {
                f.write_str("the graph has no positions or no edges")
            }
            Self::InvalidCoordinateSystem { vertex, x, y } => {
                write!(
                    f,
                    "position {vertex} at ({x}, {y}) is outside the non-negative coordinate system"
                )
            }
            Self::VerticesHaveSamePosition { first, second } => {
                write!(f, "positions {first} and {second} are identical")
            }
            Self::EdgeEndpointOutOfBounds { edge, endpoint } => {
                write!(
                    f,
                    "edge {edge} references vertex {endpoint}, which has no position"
                )
            }
            Self::DuplicateEdgeFound {
                edge,
                source,
                target,
            } => {
                write!(f, "edge {edge} repeats the ordered pair ({source}, {target})")
            }
        }
    }
}

impl std::error::Error for DiscoveryError {}

impl serde::Serialize for DiscoveryError {
    /// Serializes as `{"reason": <code>}`, the failure shape of the
    /// discovery boundary.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DiscoveryError", 1)?;
        state.serialize_field("reason", self.code())?;
        state.end()
    }
}
