//! Generation snapshots.
//!
//! A generation is the list of pieces active at one point of the cutting
//! timeline. Pieces are shared between snapshots through [`Arc`], so a cut
//! only allocates its children; everything it did not touch is carried over
//! by reference.

use std::sync::Arc;

use jigcut_core::Result;
use jigcut_d2::Mesh2D;

use crate::piece::{Piece, PieceId};

/// Immutable snapshot of the active pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    index: usize,
    cuts_applied: usize,
    pieces: Vec<Arc<Piece>>,
}

impl Generation {
    pub fn new(index: usize, cuts_applied: usize, pieces: Vec<Arc<Piece>>) -> Self {
        Self {
            index,
            cuts_applied,
            pieces,
        }
    }

    /// Position in the timeline; the initial pieces are generation 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cuts applied since generation 0. Re-placing pieces does not count.
    pub fn cuts_applied(&self) -> usize {
        self.cuts_applied
    }

    pub fn pieces(&self) -> &[Arc<Piece>] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn get(&self, id: PieceId) -> Option<&Arc<Piece>> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of piece areas.
    pub fn total_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.area()).sum()
    }

    /// One local-space mesh per piece, in piece order.
    pub fn meshes(&self) -> Result<Vec<Mesh2D>> {
        self.pieces.iter().map(|p| p.mesh()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use jigcut_core::Transform2D;
    use jigcut_d2::Polygon2D;

    fn generation() -> Generation {
        let a = Polygon2D::rectangle(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = Polygon2D::rectangle(0.0, 0.0, 2.0, 1.0).unwrap();
        Generation::new(
            0,
            0,
            vec![
                Arc::new(Piece::new(PieceId(0), a, "a", Transform2D::identity(), 0)),
                Arc::new(Piece::new(PieceId(1), b, "b", Transform2D::identity(), 0)),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let gen = generation();
        assert_eq!(gen.len(), 2);
        assert!(gen.contains(PieceId(1)));
        assert!(!gen.contains(PieceId(7)));
        assert_eq!(gen.get(PieceId(0)).map(|p| p.color()), Some("a"));
    }

    #[test]
    fn test_total_area_and_meshes() {
        let gen = generation();
        assert_relative_eq!(gen.total_area(), 3.0, epsilon = 1e-12);

        let meshes = gen.meshes().unwrap();
        assert_eq!(meshes.len(), 2);
        assert!(meshes.iter().all(|m| m.triangle_count() == 2));
    }
}
