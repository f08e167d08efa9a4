//! Pieces as the player has placed them.

use jigcut_cutting::Piece;
use jigcut_d2::Polygon2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piece's world outline and whether it is snapped into the frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    /// Outline in world coordinates.
    pub polygon: Polygon2D,
    /// Set by the drag/snap layer when the piece locked into place.
    pub snapped: bool,
}

impl PlacedPiece {
    pub fn new(polygon: Polygon2D, snapped: bool) -> Self {
        Self { polygon, snapped }
    }

    /// World outline of a cut piece at its current placement.
    pub fn from_piece(piece: &Piece, snapped: bool) -> Self {
        Self::new(piece.world_polygon(), snapped)
    }
}
