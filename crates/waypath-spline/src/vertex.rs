//! Vertex capability for spline control points.

use waypath_math::Point3;

/// Capability trait for anything usable as a spline control point.
///
/// The evaluators read nothing from a vertex besides its position, so path
/// tools can store richer waypoint types (ids, flags, speed limits) and
/// feed them to the spline unchanged.
pub trait SplineVertex {
    fn position(&self) -> Point3;
}

impl SplineVertex for Point3 {
    fn position(&self) -> Point3 {
        *self
    }
}

impl SplineVertex for (f64, f64, f64) {
    fn position(&self) -> Point3 {
        Point3::new(self.0, self.1, self.2)
    }
}
