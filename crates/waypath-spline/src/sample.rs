//! Sampling curves into polylines for authoring and motion tooling.

use waypath_core::Result;
use waypath_math::Point3;

use crate::curve::Curve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Segments are split recursively while the midpoint deviates from the
/// chord by more than `tolerance`, so straight stretches stay coarse and
/// bends get dense.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Result<Vec<Point3>> {
    let (t_min, t_max) = curve.domain();
    let p_min = curve.point_at(t_min)?;
    let p_max = curve.point_at(t_max)?;
    let mut points = vec![p_min];
    subdivide(curve, t_min, t_max, p_min, p_max, tolerance, &mut points, 0)?;
    Ok(points)
}

/// Sample a curve at `steps` uniform parameter increments across its
/// domain, returning `steps + 1` points including both endpoints.
///
/// Uniform in parameter, not arclength: evenly spaced control points give
/// evenly spaced samples, uneven spacing does not.
pub fn sample_uniform(curve: &dyn Curve, steps: usize) -> Result<Vec<Point3>> {
    let (t_min, t_max) = curve.domain();
    let steps = steps.max(1);
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = t_min + (t_max - t_min) * i as f64 / steps as f64;
        points.push(curve.point_at(t)?);
    }
    Ok(points)
}

#[allow(clippy::too_many_arguments)]
fn subdivide(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    p0: Point3,
    p1: Point3,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) -> Result<()> {
    if depth >= MAX_DEPTH {
        points.push(p1);
        return Ok(());
    }

    let t_mid = (t0 + t1) * 0.5;
    let p_mid = curve.point_at(t_mid)?;
    let chord_mid = (p0 + p1) * 0.5;

    if (p_mid - chord_mid).length() > tolerance {
        subdivide(curve, t0, t_mid, p0, p_mid, tolerance, points, depth + 1)?;
        subdivide(curve, t_mid, t1, p_mid, p1, tolerance, points, depth + 1)?;
    } else {
        points.push(p1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CatmullRomSpline;

    fn collinear(n: usize) -> CatmullRomSpline<Vec<Point3>> {
        let pts = (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        CatmullRomSpline::new(pts).unwrap()
    }

    fn bent() -> CatmullRomSpline<Vec<Point3>> {
        CatmullRomSpline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polyline_of_straight_path_stays_coarse() {
        let spline = collinear(6);
        let points = curve_to_polyline(&spline, 0.01).unwrap();
        // No subdivision needed anywhere on a straight path.
        assert_eq!(points.len(), 2);
        assert!((points[0] - Point3::new(1.0, 0.0, 0.0)).length() < 1e-12);
        assert!((points[1] - Point3::new(4.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_polyline_of_bent_path_subdivides() {
        let spline = bent();
        let points = curve_to_polyline(&spline, 0.01).unwrap();
        assert!(
            points.len() > 4,
            "bent path should subdivide, got {} points",
            points.len()
        );
        // Every sampled point must still lie on the curve's z = 0 plane.
        for p in &points {
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_uniform_hits_endpoints() {
        let spline = collinear(6);
        let points = sample_uniform(&spline, 10).unwrap();
        assert_eq!(points.len(), 11);
        assert!((points[0] - Point3::new(1.0, 0.0, 0.0)).length() < 1e-12);
        assert!((points[10] - Point3::new(4.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_sample_uniform_even_spacing_on_even_points() {
        let spline = collinear(7);
        let points = sample_uniform(&spline, 8).unwrap();
        let mut gaps = points.windows(2).map(|w| (w[1] - w[0]).length());
        let first = gaps.next().unwrap();
        for gap in gaps {
            assert!((gap - first).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_uniform_zero_steps_clamped() {
        let spline = collinear(4);
        let points = sample_uniform(&spline, 0).unwrap();
        assert_eq!(points.len(), 2);
    }
}
