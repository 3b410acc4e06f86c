//! Geometric nesting of discovered faces into an area tree.
//!
//! The cycle forest says which faces were detached from which walk; this
//! layer instead expresses geometric containment. Faces are flattened,
//! measured, sorted by descending area, and assigned to the tightest
//! already-placed polygon that contains them.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, point_in_polygon, point_on_boundary, polygon_area};
use crate::tree::Discovery;

/// A face's area, gross and net of its direct children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBreakdown {
    /// The polygon's own enclosed area.
    pub total: f64,
    /// `total` minus the `total` of every direct child.
    pub without_children: f64,
}

/// A forest of faces ordered by geometric containment.
///
/// Serializes as `{"type": "ROOT", ...}` or `{"type": "CHILD", ...}`; the
/// root form only appears when no single polygon encloses everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AreaTree {
    /// Aggregator over polygons that have no enclosing polygon.
    #[serde(rename = "ROOT")]
    Root {
        /// Top-level polygons.
        children: Vec<AreaTree>,
    },
    /// One polygon and the polygons nested directly inside it.
    #[serde(rename = "CHILD", rename_all = "camelCase")]
    Child {
        /// Index of this polygon in the area-sorted polygon list.
        polygon_index: usize,
        /// Closed vertex-name sequence of the face.
        polygon: Vec<usize>,
        /// Gross and net area of the face.
        area: AreaBreakdown,
        /// Polygons contained directly within this one.
        children: Vec<AreaTree>,
    },
}

impl AreaTree {
    fn total(&self) -> f64 {
        match self {
            Self::Root { .. } => 0.0,
            Self::Child { area, .. } => area.total,
        }
    }
}

/// A measured face awaiting assignment.
struct PolygonRecord {
    cycle: Vec<usize>,
    points: Vec<Point>,
    area: f64,
}

/// `candidate` is nested in `parent` if one of its vertices lies inside the
/// parent and it is not incident on the parent's boundary with every vertex.
/// Faces that only touch the boundary are siblings the face decomposition
/// already separated.
fn is_child_of(candidate: &PolygonRecord, parent: &PolygonRecord) -> bool {
    let Some(&probe) = candidate.points.first() else {
        return false;
    };
    if !point_in_polygon(probe, &parent.points) {
        return false;
    }
    !candidate
        .points
        .iter()
        .all(|&q| point_on_boundary(q, &parent.points))
}

/// Assigns every unvisited polygon at or after `start` that belongs under
/// `parent`, recursing into each adoption so inner polygons nest under the
/// tightest enclosing one (guaranteed by the descending-area order).
fn collect_children(
    records: &[PolygonRecord],
    visited: &mut [bool],
    parent: Option<usize>,
    start: usize,
) -> Vec<AreaTree> {
    let mut children = Vec::new();
    for index in start..records.len() {
        if visited[index] {
            continue;
        }
        let adopt = match parent {
            None => true,
            Some(p) => is_child_of(&records[index], &records[p]),
        };
        if !adopt {
            continue;
        }
        visited[index] = true;
        let grandchildren = collect_children(records, visited, Some(index), index + 1);
        let total = records[index].area;
        let without_children = total - grandchildren.iter().map(AreaTree::total).sum::<f64>();
        children.push(AreaTree::Child {
            polygon_index: index,
            polygon: records[index].cycle.clone(),
            area: AreaBreakdown {
                total,
                without_children,
            },
            children: grandchildren,
        });
    }
    children
}

/// Builds the area tree for a discovery result.
///
/// Cycles are flattened from the forest in pre-order, measured with the
/// geometry kernel, and sorted by descending area before assignment, so a
/// polygon's parent is always its tightest enclosing ancestor. A root with
/// exactly one child unwraps to that child.
pub fn build_area_tree(positions: &[Point], discovery: &Discovery) -> AreaTree {
    let mut records: Vec<PolygonRecord> = discovery
        .cycles()
        .into_iter()
        .map(|cycle| {
            let points: Vec<Point> = cycle.iter().map(|&name| positions[name]).collect();
            let area = polygon_area(&points);
            PolygonRecord {
                cycle: cycle.to_vec(),
                points,
                area,
            }
        })
        .collect();
    records.sort_by(|a, b| {
        b.area
            .partial_cmp(&a.area)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut visited = vec![false; records.len()];
    let mut children = collect_children(&records, &mut visited, None, 0);
    if children.len() == 1 {
        return children.remove(0);
    }
    AreaTree::Root { children }
}
