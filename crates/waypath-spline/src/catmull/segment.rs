//! Global-parameter to segment resolution.

/// Resolve a global parameter `t` over `segments` interpolatable segments
/// into a segment index and local parameter.
///
/// The index is clamped at the top so `t = 1.0` lands in the last segment
/// instead of overflowing past the last point quadruple. The local
/// parameter is the unclamped scaled value minus the resolved index, so at
/// the clamped end it reaches or exceeds 1.0: the last segment
/// extrapolates rather than renormalizing.
///
/// No lower clamp: `t < 0` yields a negative index, which callers must
/// reject before indexing a point source.
///
/// # Arguments
/// * `t` - Global parameter, nominally in `[0, 1]`
/// * `segments` - Number of interpolatable segments (point count minus 3),
///   must be at least 1
pub fn locate(t: f64, segments: usize) -> (isize, f64) {
    let scaled = t * segments as f64;
    let raw = scaled.floor() as isize;
    let index = raw.min(segments as isize - 1);
    (index, scaled - index as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_start() {
        assert_eq!(locate(0.0, 3), (0, 0.0));
    }

    #[test]
    fn test_locate_interior() {
        let (index, u) = locate(0.25, 2);
        assert_eq!(index, 0);
        assert!((u - 0.5).abs() < 1e-12);

        let (index, u) = locate(0.5, 2);
        assert_eq!(index, 1);
        assert!(u.abs() < 1e-12);
    }

    #[test]
    fn test_locate_end_clamps_index_not_u() {
        // t = 1 must resolve to the last segment with u = 1, not one past it.
        let (index, u) = locate(1.0, 1);
        assert_eq!(index, 0);
        assert!((u - 1.0).abs() < 1e-12);

        let (index, u) = locate(1.0, 4);
        assert_eq!(index, 3);
        assert!((u - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_locate_past_end_extrapolates() {
        let (index, u) = locate(1.25, 2);
        assert_eq!(index, 1);
        assert!((u - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_locate_negative_goes_below_zero() {
        let (index, u) = locate(-0.3, 2);
        assert_eq!(index, -1);
        assert!((u - 0.4).abs() < 1e-12);
    }
}
