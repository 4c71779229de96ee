//! The four-point Catmull-Rom blending polynomial and its derivative.

use waypath_math::{Point3, Vector3};

/// Evaluate the cubic Catmull-Rom blend of four consecutive control points
/// at local parameter `u`.
///
/// The curve runs from `b` to `c`; `a` and `d` only shape the tangents.
/// Passes exactly through `b` at `u = 0` and `c` at `u = 1`, with C1
/// continuity across consecutive quadruples.
pub fn position(a: Point3, b: Point3, c: Point3, d: Point3, u: f64) -> Point3 {
    let u2 = u * u;
    let u3 = u2 * u;
    0.5 * ((-a + 3.0 * b - 3.0 * c + d) * u3
        + (2.0 * a - 5.0 * b + 4.0 * c - d) * u2
        + (c - a) * u
        + 2.0 * b)
}

/// First derivative of [`position`] with respect to `u`.
///
/// The magnitude is per segment-local unit, not per global parameter and
/// not arclength-normalized. Callers walking a path at constant speed must
/// rescale themselves.
pub fn velocity(a: Point3, b: Point3, c: Point3, d: Point3, u: f64) -> Vector3 {
    1.5 * (-a + 3.0 * b - 3.0 * c + d) * (u * u)
        + (2.0 * a - 5.0 * b + 4.0 * c - d) * u
        + 0.5 * (c - a)
}
