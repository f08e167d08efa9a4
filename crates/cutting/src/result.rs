//! Result types for applied cuts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::piece::PieceId;

/// What a single cut did to the generation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutReport {
    /// Index of the generation the cut produced.
    pub generation: usize,

    /// Pieces that were split and are no longer active.
    pub split: Vec<PieceId>,

    /// Newly created pieces.
    pub children: Vec<PieceId>,

    /// Number of pieces carried over unchanged.
    pub untouched: usize,
}

impl CutReport {
    /// Returns true if no piece was split.
    pub fn is_noop(&self) -> bool {
        self.split.is_empty()
    }

    /// Net change in piece count.
    pub fn piece_delta(&self) -> isize {
        self.children.len() as isize - self.split.len() as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_delta() {
        let report = CutReport {
            generation: 3,
            split: vec![PieceId(1)],
            children: vec![PieceId(4), PieceId(5), PieceId(6)],
            untouched: 2,
        };
        assert!(!report.is_noop());
        assert_eq!(report.piece_delta(), 2);
        assert!(CutReport::default().is_noop());
    }
}
