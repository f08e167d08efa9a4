//! Completion check results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why an evaluation came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompletionStatus {
    /// The frame counts as filled.
    Complete,
    /// Nothing has been placed.
    NoPieces,
    /// Too few pieces are snapped; no geometry was computed.
    SnappedGate,
    /// Too few piece centroids lie inside the frame; no geometry was computed.
    CentroidGate,
    /// The frame has no area once snapped to the lattice; `scale_factor` is
    /// too coarse for it.
    DegenerateFrame,
    /// Coverage would pass, but at least one piece is still loose.
    NotAllSnapped,
    /// Coverage and dominant-region checks both failed.
    InsufficientCoverage,
}

/// Diagnostics of one completion evaluation.
///
/// Ratios that were not computed because a gate failed are `0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompletionReport {
    /// Final decision.
    pub complete: bool,

    /// Reason for the decision.
    pub status: CompletionStatus,

    /// Number of placed pieces evaluated.
    pub piece_count: usize,

    /// Fraction of pieces flagged as snapped.
    pub snapped_ratio: f64,

    /// Fraction of piece centroids inside the frame's bounding box.
    pub centroid_ratio: f64,

    /// Covered frame area over frame area.
    pub coverage_ratio: f64,

    /// Largest covered region over frame area.
    pub dominant_ratio: f64,

    /// Number of disjoint covered regions.
    pub region_count: usize,

    /// Regions above the significance cut-off.
    pub significant_regions: usize,
}

impl CompletionReport {
    /// Report for an evaluation that stopped before any geometry work.
    pub(crate) fn gated(
        status: CompletionStatus,
        piece_count: usize,
        snapped_ratio: f64,
        centroid_ratio: f64,
    ) -> Self {
        Self {
            complete: false,
            status,
            piece_count,
            snapped_ratio,
            centroid_ratio,
            coverage_ratio: 0.0,
            dominant_ratio: 0.0,
            region_count: 0,
            significant_regions: 0,
        }
    }

    /// Returns true if the geometry pipeline ran.
    pub fn measured(&self) -> bool {
        !matches!(
            self.status,
            CompletionStatus::NoPieces
                | CompletionStatus::SnappedGate
                | CompletionStatus::CentroidGate
                | CompletionStatus::DegenerateFrame
        )
    }
}
