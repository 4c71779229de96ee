//! Curve traits and implementations.

mod catmull_rom;

use waypath_core::Result;
use waypath_math::{Point3, Vector3};

pub use catmull_rom::{CatmullRomSpline, MIN_CONTROL_POINTS};

/// Trait for parametric path curves in 3D space.
///
/// Evaluation is fallible: a curve backed by an external point source
/// surfaces precondition failures (too few points, parameter before the
/// start) instead of returning garbage vectors.
pub trait Curve: Send + Sync {
    /// Evaluate the curve position at parameter `t`.
    fn point_at(&self, t: f64) -> Result<Point3>;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Result<Vector3>;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is flagged as closed.
    fn is_closed(&self) -> bool {
        false
    }
}
