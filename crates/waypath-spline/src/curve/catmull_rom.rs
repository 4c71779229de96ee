//! Catmull-Rom spline over an externally supplied control-point sequence.

use serde::{Deserialize, Serialize};

use waypath_core::traits::{BoundingBox, Validate};
use waypath_core::{PathError, Result, Tolerance};
use waypath_math::{Aabb3, Point3, Vector3};

use super::Curve;
use crate::catmull::{blend, segment};
use crate::source::PointSource;

/// Minimum number of control points for one interpolatable segment.
pub const MIN_CONTROL_POINTS: usize = 4;

/// A Catmull-Rom spline through the control points of an ordered source.
///
/// The first and last points are tangent anchors only; the curve spans the
/// `count() - 3` segments between the interior points, covered by the
/// global parameter over `[0, 1]`. `t > 1` extrapolates the last segment;
/// `t < 0` is rejected.
///
/// The `closed` flag is carried for path-closing tooling and exposed via
/// [`Curve::is_closed`], but no evaluator reads it: segments never wrap
/// from the last point back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatmullRomSpline<S> {
    source: S,
    closed: bool,
}

impl<S: PointSource> CatmullRomSpline<S> {
    /// Build a spline over `source`, rejecting sources with fewer than
    /// [`MIN_CONTROL_POINTS`] control points.
    pub fn new(source: S) -> Result<Self> {
        let spline = Self {
            source,
            closed: false,
        };
        spline.segments()?;
        Ok(spline)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of stored control points.
    pub fn count(&self) -> usize {
        self.source.count()
    }

    /// Number of interpolatable segments (`count - 3`).
    pub fn segment_count(&self) -> Result<usize> {
        self.segments()
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Position within the segment running from control point `anchor` to
    /// `anchor + 1`, at local parameter `u`.
    ///
    /// This is the form for callers that already know which segment they
    /// are in and want to skip the global-to-local mapping. `u` outside
    /// `[0, 1]` extrapolates the segment polynomial.
    pub fn point_on_segment(&self, anchor: usize, u: f64) -> Result<Point3> {
        let [a, b, c, d] = self.anchor_quad(anchor)?;
        Ok(blend::position(a, b, c, d, u))
    }

    /// Tangent within the segment running from `anchor` to `anchor + 1`.
    ///
    /// The magnitude is per segment-local unit, not per global `t` and not
    /// arclength-normalized.
    pub fn tangent_on_segment(&self, anchor: usize, u: f64) -> Result<Vector3> {
        let [a, b, c, d] = self.anchor_quad(anchor)?;
        Ok(blend::velocity(a, b, c, d, u))
    }

    /// Anchors of segments whose bounding control points coincide within
    /// `tol.linear`.
    ///
    /// Such spans collapse to a point and produce near-zero tangents;
    /// authoring tools usually deduplicate the offending waypoints.
    pub fn degenerate_spans(&self, tol: Tolerance) -> Result<Vec<usize>> {
        let segments = self.segments()?;
        let mut spans = Vec::new();
        for anchor in 1..=segments {
            let b = self.source.position_at(anchor);
            let c = self.source.position_at(anchor + 1);
            if tol.is_zero((c - b).length()) {
                spans.push(anchor);
            }
        }
        Ok(spans)
    }

    // Count is re-read on every call so a source that shrank since
    // construction surfaces an error instead of an out-of-bounds read.
    fn segments(&self) -> Result<usize> {
        let count = self.source.count();
        if count < MIN_CONTROL_POINTS {
            return Err(PathError::InsufficientPoints {
                required: MIN_CONTROL_POINTS,
                actual: count,
            });
        }
        Ok(count - 3)
    }

    fn anchor_quad(&self, anchor: usize) -> Result<[Point3; 4]> {
        let segments = self.segments()?;
        if anchor < 1 || anchor > segments {
            return Err(PathError::AnchorOutOfRange {
                anchor,
                max: segments,
            });
        }
        Ok([
            self.source.position_at(anchor - 1),
            self.source.position_at(anchor),
            self.source.position_at(anchor + 1),
            self.source.position_at(anchor + 2),
        ])
    }

    fn global_quad(&self, t: f64) -> Result<([Point3; 4], f64)> {
        let segments = self.segments()?;
        let (index, u) = segment::locate(t, segments);
        if index < 0 {
            return Err(PathError::ParameterOutOfRange { t });
        }
        let i = index as usize;
        Ok((
            [
                self.source.position_at(i),
                self.source.position_at(i + 1),
                self.source.position_at(i + 2),
                self.source.position_at(i + 3),
            ],
            u,
        ))
    }
}

impl<S: PointSource + Send + Sync> Curve for CatmullRomSpline<S> {
    fn point_at(&self, t: f64) -> Result<Point3> {
        let ([a, b, c, d], u) = self.global_quad(t)?;
        Ok(blend::position(a, b, c, d, u))
    }

    fn tangent_at(&self, t: f64) -> Result<Vector3> {
        let ([a, b, c, d], u) = self.global_quad(t)?;
        Ok(blend::velocity(a, b, c, d, u))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<S: PointSource> Validate for CatmullRomSpline<S> {
    fn validate(&self) -> Result<()> {
        self.segments()?;
        for index in 0..self.source.count() {
            if !self.source.position_at(index).is_finite() {
                return Err(PathError::NonFinitePosition { index });
            }
        }
        Ok(())
    }
}

impl<S: PointSource> BoundingBox for CatmullRomSpline<S> {
    type Bounds = Aabb3;

    /// Bounds of the control points. The curve can overshoot this box
    /// between points.
    fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points((0..self.source.count()).map(|i| self.source.position_at(i)))
    }
}
