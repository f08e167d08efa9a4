//! Polygon measures over vertex slices.

use crate::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise. Uses
/// Kahan summation so long thin slivers keep their sign.
pub fn signed_area(polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut c = 0.0; // Compensation for lost low-order bits

    for i in 0..n {
        let j = (i + 1) % n;
        let term = polygon[i].0 * polygon[j].1 - polygon[j].0 * polygon[i].1;

        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum / 2.0
}

/// Unsigned area of a polygon.
#[inline]
pub fn area(polygon: &[Point2]) -> f64 {
    signed_area(polygon).abs()
}

/// Returns true if the polygon winds counter-clockwise.
#[inline]
pub fn is_ccw(polygon: &[Point2]) -> bool {
    signed_area(polygon) > 0.0
}

/// Returns the polygon in counter-clockwise order.
pub fn ensure_ccw(polygon: &[Point2]) -> Vec<Point2> {
    if signed_area(polygon) < 0.0 {
        polygon.iter().rev().copied().collect()
    } else {
        polygon.to_vec()
    }
}

/// Closed perimeter length.
pub fn perimeter(polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let (x0, y0) = polygon[i];
            let (x1, y1) = polygon[(i + 1) % n];
            ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
        })
        .sum()
}

/// Translates every vertex by `(dx, dy)`.
pub fn translate(polygon: &[Point2], dx: f64, dy: f64) -> Vec<Point2> {
    polygon.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

/// Removes consecutive vertices closer than `epsilon`, including the
/// closing pair (last, first).
pub fn dedup_vertices(polygon: &[Point2], epsilon: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(polygon.len());
    for &p in polygon {
        match out.last() {
            Some(&q) if close(p, q, epsilon) => {}
            _ => out.push(p),
        }
    }
    while out.len() > 1 && close(out[0], out[out.len() - 1], epsilon) {
        out.pop();
    }
    out
}

#[inline]
fn close(a: Point2, b: Point2, epsilon: f64) -> bool {
    (a.0 - b.0).abs() <= epsilon && (a.1 - b.1).abs() <= epsilon
}
