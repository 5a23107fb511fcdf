use crate::geometry::Line;

use super::{Point3, TOLERANCE};

/// Returns the point on `line` closest to `point`.
///
/// Orthogonal projection: the offset from the line origin is dotted with the
/// unit direction to find the parameter of the foot point.
#[must_use]
pub fn closest_point_on_line(line: &Line, point: &Point3) -> Point3 {
    let diff = point - line.origin();
    let t = diff.dot(line.direction());
    line.point_at(t)
}

/// Returns the minimum distance from `point` to the infinite `line`.
#[must_use]
pub fn point_to_line_dist(line: &Line, point: &Point3) -> f64 {
    (point - closest_point_on_line(line, point)).norm()
}

/// Returns the point on the segment `start`→`end` closest to `point`.
///
/// Degenerate (zero-length) segments collapse to `start`.
#[must_use]
pub fn closest_point_on_segment(start: &Point3, end: &Point3, point: &Point3) -> Point3 {
    let dir = end - start;
    let len_sq = dir.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        return *start;
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = (point - start).dot(&dir) / len_sq;
    let t = t.clamp(0.0, 1.0);

    start + dir * t
}

/// Returns the minimum distance from `point` to the segment `start`→`end`.
#[must_use]
pub fn point_to_segment_dist(start: &Point3, end: &Point3, point: &Point3) -> f64 {
    (point - closest_point_on_segment(start, end, point)).norm()
}
