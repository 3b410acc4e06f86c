//! Fixture generators for the faceforest benchmarks.
//!
//! Grids give a dense planar workload with a face count known in advance;
//! concentric rings exercise the area-nesting assignment at maximum depth.

use std::path::PathBuf;

use faceforest_core::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark workload sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 10×10 grid, the quick smoke baseline.
    Small,
    /// 40×40 grid.
    Medium,
    /// 100×100 grid.
    Large,
}

impl SizeTier {
    /// Grid dimensions `(rows, cols)` for this tier.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Small => (10, 10),
            Self::Medium => (40, 40),
            Self::Large => (100, 100),
        }
    }
}

/// Generates a jittered planar grid.
///
/// Vertices sit on a `rows × cols` lattice with spacing 10, each displaced
/// by a deterministic jitter of less than half a unit so no positions
/// coincide and no edges cross. Edges connect lattice neighbors, producing
/// `(rows - 1) * (cols - 1)` faces.
pub fn generate_grid(rows: usize, cols: usize, seed: u64) -> (Vec<Point>, Vec<(usize, usize)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let dx: f64 = rng.gen_range(0.0..0.4);
            let dy: f64 = rng.gen_range(0.0..0.4);
            positions.push(Point::new(col as f64 * 10.0 + dx, row as f64 * 10.0 + dy));
        }
    }

    let mut edges = Vec::with_capacity(2 * rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let here = row * cols + col;
            if col + 1 < cols {
                edges.push((here, here + 1));
            }
            if row + 1 < rows {
                edges.push((here, here + cols));
            }
        }
    }
    (positions, edges)
}

/// Generates `count` disconnected concentric square rings.
///
/// The area-nesting assignment sees one polygon per ring and nests them
/// into a chain of depth `count`.
pub fn generate_rings(count: usize) -> (Vec<Point>, Vec<(usize, usize)>) {
    let center = 2.0 * count as f64 + 2.0;
    let mut positions = Vec::with_capacity(4 * count);
    let mut edges = Vec::with_capacity(4 * count);
    for ring in 0..count {
        let half = center - 1.0 - ring as f64;
        let base = positions.len();
        positions.push(Point::new(center - half, center - half));
        positions.push(Point::new(center + half, center - half));
        positions.push(Point::new(center + half, center + half));
        positions.push(Point::new(center - half, center + half));
        edges.push((base, base + 1));
        edges.push((base + 1, base + 2));
        edges.push((base + 2, base + 3));
        edges.push((base + 3, base));
    }
    (positions, edges)
}

/// Location of the JSON grid fixture written by `gen-grid`.
pub fn grid_fixture_path() -> PathBuf {
    PathBuf::from("target/bench-fixtures/grid-large.json")
}
