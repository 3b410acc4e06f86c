//! Minimal cycle basis and face nesting for embedded planar graphs.
//!
//! Given vertex positions and undirected edges, [`discover`] enumerates the
//! closed regions of the embedding as a forest of [`CycleTree`]s, one tree
//! per connected component, with nesting that mirrors how sub-faces were
//! detached during extraction. [`area_tree`] reorganizes the same faces by
//! geometric containment and annotates each with its area gross and net of
//! nested faces.
//!
//! The engine is single-threaded and synchronous; one extraction session
//! owns all of its state and runs to completion or fails fast with a
//! [`DiscoveryError`] before any graph state is built. Inputs must describe
//! a planar embedding; crossing edges are outside the contract and produce
//! unspecified (but terminating) results.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod error;
pub mod extract;
pub mod filament;
pub mod geometry;
pub mod graph;
pub mod nesting;
pub mod tree;
pub mod validation;
pub mod walker;

pub use error::DiscoveryError;
pub use geometry::{Point, Winding};
pub use nesting::{AreaBreakdown, AreaTree, build_area_tree};
pub use tree::{CycleTree, Discovery};
pub use validation::validate;

use graph::FaceGraph;
use graph::components::components;

/// Discovers the minimal cycle basis of the embedded planar graph described
/// by `positions` and `edges`.
///
/// Each position's index is the vertex's name in the output. Components
/// that contain no cycle (single edges, pure filaments) produce nothing, so
/// the forest may be empty.
///
/// # Errors
///
/// Returns the first [`DiscoveryError`] found by [`validate`]; nothing is
/// built for invalid input.
pub fn discover(
    positions: &[Point],
    edges: &[(usize, usize)],
) -> Result<Discovery, DiscoveryError> {
    validate(positions, edges)?;

    let mut graph = FaceGraph::build(positions, edges);
    let mut forest = Vec::new();
    for mut component in components(&graph) {
        let tree = extract::extract_basis(&mut graph, &mut component);
        if !tree.is_empty() {
            forest.push(tree);
        }
    }
    Ok(Discovery { forest })
}

/// Discovers faces and organizes them into a geometric-containment
/// [`AreaTree`] with per-face area annotations.
///
/// # Errors
///
/// Propagates any [`DiscoveryError`] from [`discover`].
pub fn area_tree(
    positions: &[Point],
    edges: &[(usize, usize)],
) -> Result<AreaTree, DiscoveryError> {
    let discovery = discover(positions, edges)?;
    Ok(build_area_tree(positions, &discovery))
}

/// Returns the current version of the faceforest-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
