//! Segment and line intersection.

use crate::Point2;

/// Intersection of line `a1→a2` with line `b1→b2`, evaluated parametrically
/// along `a`.
///
/// The caller must already know the two segments cross: the side values of
/// `a1` and `a2` against `b` have opposite signs with a product below
/// `-epsilon`. Under that precondition the denominator is bounded away from
/// zero. Parallel input returns `a1`.
pub fn segment_intersection(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> Point2 {
    let r = (a2.0 - a1.0, a2.1 - a1.1);
    let s = (b2.0 - b1.0, b2.1 - b1.1);
    let denom = r.0 * s.1 - r.1 * s.0;

    if denom == 0.0 {
        return a1;
    }

    let t = ((b1.0 - a1.0) * s.1 - (b1.1 - a1.1) * s.0) / denom;
    (a1.0 + t * r.0, a1.1 + t * r.1)
}

/// Intersection of segment `p1→p2` with the infinite line through
/// `line_start`/`line_end`, given the precomputed side values of both
/// endpoints.
///
/// Interpolating on the side values keeps the result on the segment even
/// when the cut line is much longer than the edge.
#[inline]
pub fn split_point(p1: Point2, p2: Point2, side1: f64, side2: f64) -> Point2 {
    let t = side1 / (side1 - side2);
    (p1.0 + t * (p2.0 - p1.0), p1.1 + t * (p2.1 - p1.1))
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}
