//! Floating-point geometry kernel for the face discovery engine.
//!
//! All predicates operate in a Y-up, X-right Euclidean plane on `f64`
//! coordinates. The expressions below are evaluated in a fixed order;
//! rearranging them algebraically changes results in the last ulp and breaks
//! fixture compatibility, so they are kept exactly as written.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position in the plane. Also used as a direction vector where the
/// difference of two positions is taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward.
    pub x: f64,
    /// Vertical coordinate, increasing upward.
    pub y: f64,
}

impl Point {
    /// Constructs a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Two-dimensional cross product `a.x * b.y - a.y * b.x`.
///
/// Negative when `b` lies clockwise of `a` (Y-up), positive when
/// counter-clockwise, zero when parallel.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

// ---------------------------------------------------------------------------
// Winding
// ---------------------------------------------------------------------------

/// The rotational sense of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    /// The path turns clockwise (Y-up convention).
    Clockwise,
    /// The path turns counter-clockwise.
    CounterClockwise,
    /// All points lie on a single line (or the path encloses zero area).
    Colinear,
}

/// Computes the winding order of a point sequence.
///
/// Sums `(x_next - x) * (y_next + y)` over every directed edge of the path,
/// including the wrap-around edge from the last point back to the first. A
/// positive sum is [`Winding::Clockwise`], a negative sum is
/// [`Winding::CounterClockwise`], an exact zero is [`Winding::Colinear`].
///
/// Works for open sequences and for closed paths that repeat their first
/// point at the end (the extra zero-length edge contributes nothing).
pub fn winding_order(points: &[Point]) -> Winding {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let from = points[i];
        let to = points[(i + 1) % n];
        sum += (to.x - from.x) * (to.y + from.y);
    }
    if sum > 0.0 {
        Winding::Clockwise
    } else if sum < 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Colinear
    }
}

/// Winding order of the triangle `p1 → p2 → p3`.
#[inline]
pub fn winding_of_triple(p1: Point, p2: Point, p3: Point) -> Winding {
    winding_order(&[p1, p2, p3])
}

// ---------------------------------------------------------------------------
// Segment predicates
// ---------------------------------------------------------------------------

/// Returns `true` if `q` lies within the closed axis-aligned bounding box of
/// `p` and `r`.
///
/// Combined with a colinearity check this decides "point on segment".
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Returns `true` if segment `p1q1` intersects segment `p2q2`.
///
/// The general case requires the endpoints of each segment to fall on
/// opposite sides of the other segment; the special cases catch colinear
/// endpoints that land inside the other segment's bounding box.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = winding_of_triple(p1, q1, p2);
    let o2 = winding_of_triple(p1, q1, q2);
    let o3 = winding_of_triple(p2, q2, p1);
    let o4 = winding_of_triple(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Winding::Colinear && on_segment(p1, p2, q1))
        || (o2 == Winding::Colinear && on_segment(p1, q2, q1))
        || (o3 == Winding::Colinear && on_segment(p2, p1, q2))
        || (o4 == Winding::Colinear && on_segment(p2, q1, q2))
}

// ---------------------------------------------------------------------------
// Polygon predicates
// ---------------------------------------------------------------------------

/// Returns `true` if `p` lies inside the closed polygon `polygon` (boundary
/// included).
///
/// `polygon` is a closed vertex path: its first point is repeated as its
/// last, and consecutive pairs form the edges. A horizontal ray is cast from
/// `p` to just past the polygon's maximum x; crossings are counted per edge.
/// When `p` is colinear with an edge the result is decided by whether `p`
/// lies on that edge.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 2 {
        return false;
    }
    let max_x = polygon.iter().fold(f64::NEG_INFINITY, |acc, q| acc.max(q.x));
    let extreme = Point::new(max_x + 10.0, p.y);

    let mut crossings = 0usize;
    for pair in polygon.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if segments_intersect(from, to, p, extreme) {
            if winding_of_triple(from, p, to) == Winding::Colinear {
                return on_segment(from, p, to);
            }
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Returns `true` if `p` lies on the boundary of the closed polygon.
pub fn point_on_boundary(p: Point, polygon: &[Point]) -> bool {
    polygon.windows(2).any(|pair| {
        winding_of_triple(pair[0], pair[1], p) == Winding::Colinear
            && on_segment(pair[0], p, pair[1])
    })
}

/// Computes the enclosed area of a closed polygon path.
///
/// Each edge contributes the signed trapezoid `((y1 + y2) / 2) * (x2 - x1)`;
/// the sum is taken as-is for a clockwise path and negated for a
/// counter-clockwise one, so the result is non-negative. A colinear path has
/// zero area.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    let winding = winding_order(polygon);
    if winding == Winding::Colinear {
        return 0.0;
    }
    let mut sum = 0.0;
    for pair in polygon.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        sum += ((from.y + to.y) / 2.0) * (to.x - from.x);
    }
    match winding {
        Winding::Clockwise => sum,
        Winding::CounterClockwise => -sum,
        Winding::Colinear => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
