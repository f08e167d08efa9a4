//! Cut inputs supplied by the input-handling layer.

use jigcut_core::{Error, Point2, Result, Transform2D, AABB2D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight cut, read as an infinite line through `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutLine {
    pub start: Point2,
    pub end: Point2,
}

impl CutLine {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// The same line expressed in a piece's local frame.
    pub fn to_local(&self, transform: &Transform2D) -> Self {
        Self {
            start: transform.apply_inverse(self.start),
            end: transform.apply_inverse(self.end),
        }
    }
}

/// A freeform cut: an open polyline of at least two points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPath {
    points: Vec<Point2>,
}

impl CutPath {
    /// Creates a path, rejecting fewer than two points or non-finite input.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::InvalidGeometry(format!(
                "cut path needs at least 2 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Error::InvalidGeometry(
                "cut path has non-finite coordinates".to_string(),
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Bounding box of the path itself, without the blade width.
    pub fn aabb(&self) -> Option<AABB2D> {
        AABB2D::from_points(&self.points)
    }

    /// The same path expressed in a piece's local frame.
    pub fn to_local(&self, transform: &Transform2D) -> Vec<Point2> {
        transform.apply_inverse_all(&self.points)
    }
}

/// Either kind of cut.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CutInput {
    /// Half-plane split across the whole generation.
    Line(CutLine),
    /// Stroke split confined to where the path passes.
    Path(CutPath),
}

impl From<CutLine> for CutInput {
    fn from(line: CutLine) -> Self {
        CutInput::Line(line)
    }
}

impl From<CutPath> for CutInput {
    fn from(path: CutPath) -> Self {
        CutInput::Path(path)
    }
}
