pub mod distance_3d;
pub mod intersect_3d;

use crate::error::{GeometryError, Result};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Scales `v` to unit length.
///
/// # Errors
///
/// Returns an error if `v` is shorter than [`TOLERANCE`].
pub fn unit_vector(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(*v / len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::KinaxisError;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    // ── unit_vector ──

    #[test]
    fn unit_vector_has_unit_norm() {
        let u = unit_vector(&v(3.0, 4.0, 0.0)).unwrap();
        assert_relative_eq!(u.norm(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn unit_vector_preserves_direction() {
        let u = unit_vector(&v(3.0, 4.0, 0.0)).unwrap();
        assert_relative_eq!(u.x, 0.6, epsilon = TOLERANCE);
        assert_relative_eq!(u.y, 0.8, epsilon = TOLERANCE);
        assert!(u.z.abs() < TOLERANCE);
    }

    #[test]
    fn unit_vector_rejects_zero() {
        assert!(matches!(
            unit_vector(&v(0.0, 0.0, 0.0)),
            Err(KinaxisError::Geometry(GeometryError::ZeroVector))
        ));
    }

    // ── algebra conventions the frame math relies on ──

    #[test]
    fn magnitude_of_3_4_0() {
        assert_relative_eq!(v(3.0, 4.0, 0.0).norm(), 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn dot_of_orthogonal_axes_is_zero() {
        let d = v(1.0, 0.0, 0.0).dot(&v(0.0, 1.0, 0.0));
        assert!(d.abs() < TOLERANCE);
    }

    #[test]
    fn cross_is_right_handed() {
        let c = v(1.0, 0.0, 0.0).cross(&v(0.0, 1.0, 0.0));
        assert!((c - v(0.0, 0.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-4.0, 0.5, 2.0);
        assert!((a.cross(&b) + b.cross(&a)).norm() < TOLERANCE);
    }

    #[test]
    fn translation_round_trip() {
        let p = Point3::new(1.0, -2.0, 3.0);
        let d = v(0.5, 7.0, -1.5);
        let back = (p + d) + d * -1.0;
        assert!((back - p).norm() < TOLERANCE);
    }
}
