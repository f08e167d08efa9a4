//! The target frame pieces are assembled into.

use jigcut_core::{Error, Point2, Result, AABB2D};
use jigcut_d2::Polygon2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference outline plus its precomputed area and bounding box.
///
/// Any simple polygon works; the frame need not be axis-aligned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetFrame {
    polygon: Polygon2D,
    area: f64,
    aabb: AABB2D,
}

impl TargetFrame {
    /// Wraps a polygon as a frame. Fails with [`Error::InvalidFrame`] on zero area.
    pub fn new(polygon: Polygon2D) -> Result<Self> {
        let area = polygon.area();
        if !(area.is_finite() && area > 0.0) {
            return Err(Error::InvalidFrame(format!("frame area {} is not positive", area)));
        }
        let aabb = polygon.aabb();
        Ok(Self {
            polygon,
            area,
            aabb,
        })
    }

    /// Validates raw vertices as a frame.
    pub fn from_vertices(vertices: Vec<Point2>) -> Result<Self> {
        let polygon = Polygon2D::new(vertices).map_err(|err| match err {
            Error::InvalidGeometry(msg) => Error::InvalidFrame(msg),
            other => other,
        })?;
        Self::new(polygon)
    }

    /// Axis-aligned square frame centered at `center`.
    pub fn square(center: Point2, half_size: f64) -> Result<Self> {
        let (cx, cy) = center;
        Self::from_vertices(vec![
            (cx - half_size, cy + half_size),
            (cx + half_size, cy + half_size),
            (cx + half_size, cy - half_size),
            (cx - half_size, cy - half_size),
        ])
    }

    pub fn polygon(&self) -> &Polygon2D {
        &self.polygon
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn aabb(&self) -> &AABB2D {
        &self.aabb
    }
}
