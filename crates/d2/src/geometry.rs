//! Immutable polygon type.

use geo::{Area, Centroid, Coord, LineString, Polygon as GeoPolygon};
use jigcut_core::geom::polygon as geom_polygon;
use jigcut_core::{Config, Error, Point2, Result, Transform2D, AABB2D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simple polygon, implicitly closed, with at least three distinct vertices
/// and non-zero area.
///
/// Winding is preserved exactly as given. Every operation that changes the
/// shape returns a new value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Polygon2D {
    vertices: Vec<Point2>,
}

impl Polygon2D {
    /// Validates and wraps a vertex list using the default tolerances.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        let config = Config::default();
        Self::with_tolerance(vertices, config.epsilon, config.area_epsilon)
    }

    /// Validates and wraps a vertex list using the tolerances of `config`.
    pub fn from_config(vertices: Vec<Point2>, config: &Config) -> Result<Self> {
        Self::with_tolerance(vertices, config.epsilon, config.area_epsilon)
    }

    /// Validates and wraps a vertex list.
    ///
    /// Consecutive vertices closer than `epsilon` are merged (including a
    /// repeated closing vertex). Fails if fewer than three remain or the
    /// area is at or below `area_epsilon`.
    pub fn with_tolerance(vertices: Vec<Point2>, epsilon: f64, area_epsilon: f64) -> Result<Self> {
        if vertices.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Error::InvalidGeometry(
                "polygon has non-finite coordinates".to_string(),
            ));
        }

        let vertices = geom_polygon::dedup_vertices(&vertices, epsilon);
        if vertices.len() < 3 {
            return Err(Error::InvalidGeometry(format!(
                "polygon must have at least 3 distinct vertices, got {}",
                vertices.len()
            )));
        }

        let area = geom_polygon::area(&vertices);
        if area <= area_epsilon {
            return Err(Error::InvalidGeometry(format!(
                "polygon area {:.3e} is degenerate",
                area
            )));
        }

        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle, counter-clockwise.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        Self::new(vec![
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ])
    }

    /// Axis-aligned square centered at `center`.
    pub fn square(center: Point2, half_size: f64) -> Result<Self> {
        Self::rectangle(
            center.0 - half_size,
            center.1 - half_size,
            center.0 + half_size,
            center.1 + half_size,
        )
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area, positive for counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        geom_polygon::signed_area(&self.vertices)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.to_geo_polygon().unsigned_area()
    }

    /// Returns true if the polygon winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        geom_polygon::is_ccw(&self.vertices)
    }

    /// Area centroid.
    pub fn centroid(&self) -> Point2 {
        match self.to_geo_polygon().centroid() {
            Some(c) => (c.x(), c.y()),
            // Validation guarantees non-zero area, so this is a fallback only
            None => AABB2D::from_points(&self.vertices)
                .map(|bb| bb.center())
                .unwrap_or((0.0, 0.0)),
        }
    }

    /// Perimeter length.
    pub fn perimeter(&self) -> f64 {
        geom_polygon::perimeter(&self.vertices)
    }

    /// Bounding box.
    pub fn aabb(&self) -> AABB2D {
        let (x, y) = self.vertices[0];
        AABB2D::from_points(&self.vertices).unwrap_or(AABB2D::new(x, y, x, y))
    }

    /// Returns a translated copy.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            vertices: geom_polygon::translate(&self.vertices, dx, dy),
        }
    }

    /// Returns a copy mapped through `transform`.
    ///
    /// Rigid transforms keep the polygon valid, so no re-validation happens.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        if transform.is_identity() {
            return self.clone();
        }
        Self {
            vertices: transform.apply_all(&self.vertices),
        }
    }

    /// Converts to a geo crate Polygon.
    pub fn to_geo_polygon(&self) -> GeoPolygon<f64> {
        let exterior = LineString::from(
            self.vertices
                .iter()
                .map(|&(x, y)| Coord { x, y })
                .collect::<Vec<_>>(),
        );
        GeoPolygon::new(exterior, Vec::new())
    }
}

impl TryFrom<Vec<Point2>> for Polygon2D {
    type Error = Error;

    fn try_from(vertices: Vec<Point2>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon2D> for Vec<Point2> {
    fn from(polygon: Polygon2D) -> Self {
        polygon.vertices
    }
}
