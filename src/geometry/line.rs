use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite line defined by an origin point and a direction vector.
///
/// The direction is normalized at construction, so the parametric form
/// `P(t) = origin + t * direction` measures `t` in real distance units.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates the line through two points, directed from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are coincident.
    pub fn through_points(a: Point3, b: Point3) -> Result<Self> {
        Self::new(a, b - a)
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
