use crate::error::{FrameError, Result};
use crate::math::{unit_vector, Point3, Vector3, TOLERANCE};

/// A body-relative coordinate frame in 3D space.
///
/// Defined by an origin point and three mutually orthogonal unit basis
/// vectors. Built from tracked markers, the frame maps sensor-space
/// positions into coordinates relative to the tracked body.
#[derive(Debug, Clone)]
pub struct BodyFrame {
    origin: Point3,
    x_axis: Vector3,
    y_axis: Vector3,
    z_axis: Vector3,
}

impl BodyFrame {
    /// Creates a frame from an origin and explicit x / z axes.
    ///
    /// Both axes are normalized; the y axis is derived as `x × z`.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is zero-length or the axes are not
    /// perpendicular.
    pub fn new(origin: Point3, x_axis: Vector3, z_axis: Vector3) -> Result<Self> {
        let x_axis = unit_vector(&x_axis)?;
        let z_axis = unit_vector(&z_axis)?;

        let dot = x_axis.dot(&z_axis);
        if dot.abs() > TOLERANCE {
            return Err(FrameError::AxesNotOrthogonal { dot }.into());
        }

        let y_axis = x_axis.cross(&z_axis);

        Ok(Self {
            origin,
            x_axis,
            y_axis,
            z_axis,
        })
    }

    /// Creates a frame from three non-collinear markers.
    ///
    /// The origin is the centroid of the markers. The z axis is the unit
    /// normal of the marker plane, oriented by the winding order
    /// `m1 → m2 → m3`; the x axis points from `m1` to `m2`; the y axis is
    /// `x × z`. Callers that need a stable z orientation across captures
    /// must supply the markers in a consistent winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the markers are coincident or collinear.
    pub fn from_markers(m1: Point3, m2: Point3, m3: Point3) -> Result<Self> {
        let u = m2 - m1;
        let v = m3 - m1;

        let normal = u.cross(&v);
        if normal.norm() < TOLERANCE {
            return Err(FrameError::CollinearMarkers.into());
        }

        let z_axis = unit_vector(&normal)?;
        let x_axis = unit_vector(&u)?;
        let y_axis = x_axis.cross(&z_axis);

        let origin = Point3::from((m1.coords + m2.coords + m3.coords) / 3.0);

        Ok(Self {
            origin,
            x_axis,
            y_axis,
            z_axis,
        })
    }

    /// Returns the origin of the frame (centroid of the markers).
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the x basis vector.
    #[must_use]
    pub fn x_axis(&self) -> &Vector3 {
        &self.x_axis
    }

    /// Returns the y basis vector.
    #[must_use]
    pub fn y_axis(&self) -> &Vector3 {
        &self.y_axis
    }

    /// Returns the z basis vector (marker-plane normal).
    #[must_use]
    pub fn z_axis(&self) -> &Vector3 {
        &self.z_axis
    }

    /// Transforms a point from global (sensor) space into frame-local
    /// coordinates.
    ///
    /// The basis vectors are unit length by construction, so each local
    /// coordinate is a plain dot product of the offset from the origin.
    #[must_use]
    pub fn to_local(&self, point: &Point3) -> Point3 {
        let d = point - self.origin;
        Point3::new(
            d.dot(&self.x_axis),
            d.dot(&self.y_axis),
            d.dot(&self.z_axis),
        )
    }

    /// Transforms a point from frame-local coordinates back into global
    /// space.
    #[must_use]
    pub fn from_local(&self, point: &Point3) -> Point3 {
        self.origin + self.x_axis * point.x + self.y_axis * point.y + self.z_axis * point.z
    }
}
