use serde::{Deserialize, Serialize};

/// Position in normalized frame coordinates (`0.0..=1.0` on both axes, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Even-odd (ray casting) containment test against a closed polygon.
///
/// A horizontal ray is cast from `point` towards +x and every edge it crosses toggles
/// the result. Edges are walked as `(i, i - 1)` with wraparound, so vertex order matters
/// and must match the order the polygon was declared in.
///
/// No convexity or simplicity check is made: self-intersecting outlines produce
/// whatever the crossing count yields. Points lying exactly on an edge may land on
/// either side.
#[must_use]
pub fn polygon_contains(vertices: &[Point], point: Point) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let j = (i + n - 1) % n;
        let (vi, vj) = (vertices[i], vertices[j]);
        let straddles = (vi.y > point.y) != (vj.y > point.y);
        if straddles && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
    }
    inside
}
