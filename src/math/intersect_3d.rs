use crate::geometry::Line;

use super::{Point3, TOLERANCE};

/// Relationship between two lines in 3D space.
#[derive(Debug)]
pub enum LinePairRelation {
    /// Lines cross at a single point.
    Intersecting { point: Point3 },
    /// Lines are skew. `midpoint` is the middle of the shortest connecting
    /// segment and `gap` its length.
    Skew { midpoint: Point3, gap: f64 },
    /// Lines are parallel but not coincident.
    Parallel { distance: f64 },
    /// Lines are the same (coincident).
    Coincident,
}

/// Computes the relationship between two lines.
///
/// For non-parallel lines, the near-point on each line is found by
/// intersecting it with the plane spanned by the other line and the common
/// perpendicular `a.dir × b.dir`. The reported midpoint averages the two
/// near-points; when their gap vanishes the lines genuinely cross there.
#[must_use]
pub fn line_line_relation(a: &Line, b: &Line) -> LinePairRelation {
    let da = a.direction();
    let db = b.direction();

    let perp = da.cross(db);
    let perp_len = perp.norm();

    if perp_len < TOLERANCE {
        // Directions are (anti-)parallel — lines are parallel or coincident.
        let diff = b.origin() - a.origin();
        let off = diff - da * diff.dot(da);
        let dist = off.norm();
        if dist < TOLERANCE {
            return LinePairRelation::Coincident;
        }
        return LinePairRelation::Parallel { distance: dist };
    }

    // Near-point on A: intersect A with the plane containing B and perp.
    let nb = db.cross(&perp);
    let ta = (b.origin() - a.origin()).dot(&nb) / da.dot(&nb);
    let near_a = a.point_at(ta);

    // Near-point on B: same construction with the roles swapped.
    let na = da.cross(&perp);
    let tb = (a.origin() - b.origin()).dot(&na) / db.dot(&na);
    let near_b = b.point_at(tb);

    let gap = (near_b - near_a).norm();
    let midpoint = Point3::from((near_a.coords + near_b.coords) * 0.5);

    if gap < TOLERANCE {
        LinePairRelation::Intersecting { point: midpoint }
    } else {
        LinePairRelation::Skew { midpoint, gap }
    }
}
