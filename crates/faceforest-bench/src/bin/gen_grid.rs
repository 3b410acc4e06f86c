//! Writes the large-tier grid fixture to disk as JSON.
//!
//! The fixture holds the raw `positions` and `edges` arrays so external
//! tools can replay the same workload.

use std::error::Error;
use std::fs;

use faceforest_bench::{SizeTier, generate_grid, grid_fixture_path};

fn main() -> Result<(), Box<dyn Error>> {
    let path = grid_fixture_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let (rows, cols) = SizeTier::Large.dimensions();
    eprintln!("Generating {rows}x{cols} grid...");
    let (positions, edges) = generate_grid(rows, cols, 42);
    eprintln!(
        "Generated {} positions, {} edges",
        positions.len(),
        edges.len()
    );

    let fixture = serde_json::json!({
        "positions": positions,
        "edges": edges,
    });
    fs::write(&path, serde_json::to_vec(&fixture)?)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
