//! Robust geometric predicates and lattice scaling.
//!
//! Orientation is evaluated with Shewchuk's adaptive precision arithmetic
//! (via the `robust` crate), so the sign of a side test is exact even when a
//! point sits almost on a cut line. Callers still apply an explicit dead band
//! through [`Side::classify`] because cut endpoints come from pointer input
//! and are never exactly on a vertex.
//!
//! ## References
//!
//! - Shewchuk, J.R. (1997). "Adaptive Precision Floating-Point Arithmetic and
//!   Fast Robust Predicates for Computational Geometry"
//!
//! ## Example
//!
//! ```rust
//! use jigcut_core::robust::{side, Side};
//!
//! let value = side((-3.0, 0.0), (3.0, 0.0), (0.0, 2.0));
//! assert_eq!(Side::classify(value, 1e-4), Side::Left);
//! ```

use robust::{orient2d as robust_orient2d, Coord};

use crate::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are arranged counter-clockwise (left turn).
    CounterClockwise,
    /// Points are arranged clockwise (right turn).
    Clockwise,
    /// Points are collinear.
    Collinear,
}

impl Orientation {
    /// Returns true if the orientation is counter-clockwise.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }

    /// Returns true if the orientation is clockwise.
    #[inline]
    pub fn is_cw(self) -> bool {
        matches!(self, Orientation::Clockwise)
    }

    /// Returns true if the points are collinear.
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Classification of a point against a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Strictly left of the line (positive cross product).
    Left,
    /// Strictly right of the line (negative cross product).
    Right,
    /// Within the dead band around the line.
    On,
}

impl Side {
    /// Classifies a raw [`side`] value using a symmetric dead band.
    #[inline]
    pub fn classify(value: f64, epsilon: f64) -> Side {
        if value > epsilon {
            Side::Left
        } else if value < -epsilon {
            Side::Right
        } else {
            Side::On
        }
    }
}

// ============================================================================
// Core Predicates
// ============================================================================

/// Determines the orientation of three 2D points.
///
/// - `Orientation::CounterClockwise` if `pc` lies to the left of the directed line from `pa` to `pb`
/// - `Orientation::Clockwise` if `pc` lies to the right
/// - `Orientation::Collinear` if the three points are exactly collinear
#[inline]
pub fn orient2d(pa: Point2, pb: Point2, pc: Point2) -> Orientation {
    let result = orient2d_raw(pa, pb, pc);

    if result > 0.0 {
        Orientation::CounterClockwise
    } else if result < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns the raw orientation determinant, twice the signed area of the
/// triangle `(pa, pb, pc)`.
#[inline]
pub fn orient2d_raw(pa: Point2, pb: Point2, pc: Point2) -> f64 {
    robust_orient2d(
        Coord { x: pa.0, y: pa.1 },
        Coord { x: pb.0, y: pb.1 },
        Coord { x: pc.0, y: pc.1 },
    )
}

/// Cross product `(line_end - line_start) × (point - line_start)`.
///
/// Positive when `point` is left of the directed line, negative when right,
/// near zero when on it. The magnitude is the distance from the line times
/// the line's length, so dead bands are in world units × length.
#[inline]
pub fn side(line_start: Point2, line_end: Point2, point: Point2) -> f64 {
    orient2d_raw(line_start, line_end, point)
}

/// Checks if a point lies inside or on the boundary of a triangle.
///
/// Works for either winding of `(a, b, c)`. A degenerate (collinear)
/// triangle contains nothing.
pub fn point_in_triangle(a: Point2, b: Point2, c: Point2, p: Point2) -> bool {
    if orient2d(a, b, c).is_collinear() {
        return false;
    }

    let o1 = orient2d(a, b, p);
    let o2 = orient2d(b, c, p);
    let o3 = orient2d(c, a, p);

    let has_ccw = o1.is_ccw() || o2.is_ccw() || o3.is_ccw();
    let has_cw = o1.is_cw() || o2.is_cw() || o3.is_cw();

    // Mixed turns put the point outside
    !(has_ccw && has_cw)
}

// ============================================================================
// Integer Coordinate Scaling
// ============================================================================

/// Mapping between world coordinates and the integer lattice used by
/// boolean operations.
///
/// Areas measured on the lattice are divided by `scale²` to recover world
/// area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalingConfig {
    /// The scale factor (coordinates are multiplied by this value).
    pub scale: f64,
    /// The inverse scale factor (for converting back).
    pub inv_scale: f64,
}

impl ScalingConfig {
    /// Creates a scaling that preserves `precision` decimal places.
    ///
    /// ```rust
    /// use jigcut_core::robust::ScalingConfig;
    ///
    /// let config = ScalingConfig::new(3);
    /// assert_eq!(config.scale, 1000.0);
    /// ```
    pub fn new(precision: u32) -> Self {
        Self::from_factor(10_u32.saturating_pow(precision))
    }

    /// Creates a scaling from an integer multiplier such as `1000`.
    pub fn from_factor(factor: u32) -> Self {
        let scale = factor.max(1) as f64;
        Self {
            scale,
            inv_scale: 1.0 / scale,
        }
    }

    /// Scales a coordinate onto the lattice.
    #[inline]
    pub fn scale_coord(&self, x: f64) -> f64 {
        (x * self.scale).round()
    }

    /// Scales a point onto the lattice.
    #[inline]
    pub fn scale_point(&self, p: Point2) -> Point2 {
        (self.scale_coord(p.0), self.scale_coord(p.1))
    }

    /// Unscales a coordinate back to world units.
    #[inline]
    pub fn unscale_coord(&self, x: f64) -> f64 {
        x * self.inv_scale
    }

    /// Unscales a point back to world units.
    #[inline]
    pub fn unscale_point(&self, p: Point2) -> Point2 {
        (self.unscale_coord(p.0), self.unscale_coord(p.1))
    }

    /// Converts a lattice area back to world units².
    #[inline]
    pub fn unscale_area(&self, area: f64) -> f64 {
        area * self.inv_scale * self.inv_scale
    }

    /// Scales an entire polygon.
    pub fn scale_polygon(&self, polygon: &[Point2]) -> Vec<Point2> {
        polygon.iter().map(|&p| self.scale_point(p)).collect()
    }

    /// Unscales an entire polygon.
    pub fn unscale_polygon(&self, polygon: &[Point2]) -> Vec<Point2> {
        polygon.iter().map(|&p| self.unscale_point(p)).collect()
    }
}

impl Default for ScalingConfig {
    /// Default scaling preserves 3 decimal places.
    fn default() -> Self {
        Self::from_factor(1000)
    }
}
