//! Puzzle pieces.

use std::fmt;

use jigcut_core::{Point2, Result, Transform2D, AABB2D};
use jigcut_d2::{Mesh2D, Polygon2D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identity of a piece within a cutting session.
///
/// Children of a split always receive fresh ids; an id is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub u64);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece#{}", self.0)
    }
}

/// One piece of the puzzle.
///
/// The polygon is stored in local coordinates and placed in the world by
/// `transform`. Geometry never changes after construction; cutting produces
/// new pieces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    id: PieceId,
    polygon: Polygon2D,
    color: String,
    transform: Transform2D,
    parent: Option<PieceId>,
    generation: usize,
}

impl Piece {
    /// Creates a root piece (no parent) born in `generation`.
    pub fn new(
        id: PieceId,
        polygon: Polygon2D,
        color: impl Into<String>,
        transform: Transform2D,
        generation: usize,
    ) -> Self {
        Self {
            id,
            polygon,
            color: color.into(),
            transform,
            parent: None,
            generation,
        }
    }

    /// Creates a child of `self` from a local-space polygon.
    ///
    /// The child inherits the color tag and placement.
    pub fn child(&self, id: PieceId, polygon: Polygon2D, generation: usize) -> Self {
        Self {
            id,
            polygon,
            color: self.color.clone(),
            transform: self.transform,
            parent: Some(self.id),
            generation,
        }
    }

    /// Same piece (same id and geometry) at a new placement.
    pub fn placed(&self, transform: Transform2D) -> Self {
        Self {
            transform,
            ..self.clone()
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Polygon in local coordinates.
    pub fn polygon(&self) -> &Polygon2D {
        &self.polygon
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// The piece this one was cut from, if any.
    pub fn parent(&self) -> Option<PieceId> {
        self.parent
    }

    /// Generation in which the piece was created.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    /// Polygon in world coordinates.
    pub fn world_polygon(&self) -> Polygon2D {
        self.polygon.transformed(&self.transform)
    }

    pub fn world_aabb(&self) -> AABB2D {
        self.world_polygon().aabb()
    }

    pub fn world_centroid(&self) -> Point2 {
        self.transform.apply(self.polygon.centroid())
    }

    /// Render/collision mesh in local coordinates.
    pub fn mesh(&self) -> Result<Mesh2D> {
        Mesh2D::from_polygon(&self.polygon)
    }
}
