//! Placement transforms and bounding boxes.

use crate::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid 2D placement: rotation about the local origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform2D {
    /// Translation along x.
    pub tx: f64,
    /// Translation along y.
    pub ty: f64,
    /// Rotation in radians.
    pub angle: f64,
}

impl Transform2D {
    /// Identity transform.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Pure translation.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self { tx, ty, angle: 0.0 }
    }

    /// Rotation followed by translation.
    pub fn new(tx: f64, ty: f64, angle: f64) -> Self {
        Self { tx, ty, angle }
    }

    /// Returns true if this is (numerically) the identity.
    pub fn is_identity(&self) -> bool {
        self.tx == 0.0 && self.ty == 0.0 && self.angle.abs() < 1e-12
    }

    /// Maps a local point to world coordinates.
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        if self.angle.abs() < 1e-12 {
            return (p.0 + self.tx, p.1 + self.ty);
        }
        let (sin_a, cos_a) = self.angle.sin_cos();
        (
            p.0 * cos_a - p.1 * sin_a + self.tx,
            p.0 * sin_a + p.1 * cos_a + self.ty,
        )
    }

    /// Maps a world point back to local coordinates.
    #[inline]
    pub fn apply_inverse(&self, p: Point2) -> Point2 {
        let x = p.0 - self.tx;
        let y = p.1 - self.ty;
        if self.angle.abs() < 1e-12 {
            return (x, y);
        }
        let (sin_a, cos_a) = self.angle.sin_cos();
        (x * cos_a + y * sin_a, -x * sin_a + y * cos_a)
    }

    /// Maps a sequence of local points to world coordinates.
    pub fn apply_all(&self, points: &[Point2]) -> Vec<Point2> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// Maps a sequence of world points to local coordinates.
    pub fn apply_inverse_all(&self, points: &[Point2]) -> Vec<Point2> {
        points.iter().map(|&p| self.apply_inverse(p)).collect()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl AABB2D {
    /// Creates a box from its corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Tight box around the points. `None` if there are none.
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut bb = Self::new(first.0, first.1, first.0, first.1);
        for &(x, y) in rest {
            bb.min_x = bb.min_x.min(x);
            bb.min_y = bb.min_y.min(y);
            bb.max_x = bb.max_x.max(x);
            bb.max_y = bb.max_y.max(y);
        }
        Some(bb)
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center of the box.
    pub fn center(&self) -> Point2 {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: Point2) -> bool {
        p.0 >= self.min_x && p.0 <= self.max_x && p.1 >= self.min_y && p.1 <= self.max_y
    }

    /// Returns true if the two boxes overlap or touch.
    pub fn intersects(&self, other: &AABB2D) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &AABB2D) -> AABB2D {
        AABB2D::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grows the box by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> AABB2D {
        AABB2D::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// Corners as `([min_x, min_y], [max_x, max_y])`.
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        ([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_roundtrip() {
        let t = Transform2D::translation(3.0, -1.0);
        let p = t.apply((1.0, 1.0));
        assert_eq!(p, (4.0, 0.0));
        assert_eq!(t.apply_inverse(p), (1.0, 1.0));
    }

    #[test]
    fn test_rotation_inverse() {
        let t = Transform2D::new(1.0, 2.0, std::f64::consts::FRAC_PI_2);
        let p = t.apply((1.0, 0.0));
        assert_relative_eq!(p.0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.1, 3.0, epsilon = 1e-12);

        let back = t.apply_inverse(p);
        assert_relative_eq!(back.0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(back.1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity() {
        assert!(Transform2D::identity().is_identity());
        assert!(!Transform2D::translation(0.1, 0.0).is_identity());
    }

    #[test]
    fn test_aabb_queries() {
        let a = AABB2D::new(0.0, 0.0, 2.0, 2.0);
        let b = AABB2D::new(2.0, 1.0, 3.0, 3.0);
        let c = AABB2D::new(5.0, 5.0, 6.0, 6.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.contains_point((2.0, 2.0)));
        assert!(!a.contains_point((2.1, 0.0)));
        assert_eq!(a.union(&c), AABB2D::new(0.0, 0.0, 6.0, 6.0));
        assert_eq!(a.center(), (1.0, 1.0));
        assert_eq!(a.expanded(1.0).width(), 4.0);
    }
}
