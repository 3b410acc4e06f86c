//! The benchmark fixtures must be valid discovery inputs with the face
//! counts the benchmarks assume.
#![allow(clippy::expect_used)]

use faceforest_bench::{generate_grid, generate_rings};
use faceforest_core::{discover, validate};

#[test]
fn grid_fixture_is_valid_and_has_the_expected_face_count() {
    let (positions, edges) = generate_grid(6, 8, 42);
    validate(&positions, &edges).expect("grid must validate");

    let result = discover(&positions, &edges).expect("grid must discover");
    assert_eq!(result.forest.len(), 1, "a grid is one component");
    assert_eq!(result.cycles().len(), 5 * 7, "one face per lattice cell");
}

#[test]
fn grid_jitter_is_deterministic_per_seed() {
    let (a, _) = generate_grid(4, 4, 7);
    let (b, _) = generate_grid(4, 4, 7);
    let (c, _) = generate_grid(4, 4, 8);
    assert_eq!(a, b, "same seed, same fixture");
    assert_ne!(a, c, "different seed, different jitter");
}

#[test]
fn ring_fixture_nests_to_full_depth() {
    let (positions, edges) = generate_rings(5);
    validate(&positions, &edges).expect("rings must validate");

    let result = discover(&positions, &edges).expect("rings must discover");
    assert_eq!(result.forest.len(), 5, "one component per ring");
}
