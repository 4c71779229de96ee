//! Ordered control-point access.

use waypath_math::Point3;

use crate::vertex::SplineVertex;

/// An ordered, indexable sequence of control points.
///
/// Indices are zero-based in insertion order and must stay stable for the
/// duration of a single evaluation call; the evaluators never mutate the
/// source. Callers must keep `index < count()`; the spline bounds-checks
/// before reading, but implementations are free to panic on a bad index.
pub trait PointSource {
    /// Number of stored control points.
    fn count(&self) -> usize;

    /// Position of the control point at `index`.
    fn position_at(&self, index: usize) -> Point3;
}

impl<V: SplineVertex> PointSource for [V] {
    fn count(&self) -> usize {
        self.len()
    }

    fn position_at(&self, index: usize) -> Point3 {
        self[index].position()
    }
}

impl<V: SplineVertex> PointSource for Vec<V> {
    fn count(&self) -> usize {
        self.len()
    }

    fn position_at(&self, index: usize) -> Point3 {
        self[index].position()
    }
}

impl<S: PointSource + ?Sized> PointSource for &S {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn position_at(&self, index: usize) -> Point3 {
        (**self).position_at(index)
    }
}
