//! Deciding whether the placed pieces fill the target frame.
//!
//! # Algorithm
//!
//! 1. **Gates**: enough pieces snapped, enough centroids inside the frame's
//!    bounding box; otherwise stop without geometry work
//! 2. Map every piece and the frame onto the integer lattice
//!    (`scale_factor`) and union the pieces (non-zero fill)
//! 3. **Heal**: inflate the union by `heal_buffer` to close cut seams
//! 4. Intersect with the frame and measure each resulting region against
//!    the frame's own lattice area, so both sides of every ratio carry the
//!    same rounding
//! 5. Decide: every piece snapped, and either coverage reaches
//!    `coverage_threshold` or, for puzzles that do not look multi-layered,
//!    the largest region reaches `dominant_threshold`
//!
//! Union removes double counting of overlaps, healing absorbs the slivers
//! left by cutting tolerances, and the intersection discards anything that
//! drifted outside the frame.

use jigcut_core::geom::polygon::{area, ensure_ccw};
use jigcut_core::{Config, Point2, Result, ScalingConfig};
use jigcut_d2::boolean::{intersection, normalized_contours, region_area, union_all, Contour};
use jigcut_d2::offset::inflate;

use crate::frame::TargetFrame;
use crate::placed::PlacedPiece;
use crate::report::{CompletionReport, CompletionStatus};

/// Covered regions and the frame they were clipped to, in world units².
#[derive(Debug, Clone, PartialEq)]
struct Coverage {
    regions: Vec<f64>,
    frame_area: f64,
}

impl Coverage {
    fn total(&self) -> f64 {
        self.regions.iter().sum()
    }

    fn largest(&self) -> f64 {
        self.regions.iter().copied().fold(0.0, f64::max)
    }
}

/// Stateless completion check; see [`CompletionSession`](crate::CompletionSession)
/// for the one-shot lock.
#[derive(Debug, Clone)]
pub struct CompletionEvaluator {
    config: Config,
    scaling: ScalingConfig,
}

impl CompletionEvaluator {
    /// Creates an evaluator after validating `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let scaling = ScalingConfig::from_factor(config.scale_factor);
        Ok(Self { config, scaling })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates one static scene.
    pub fn evaluate(&self, pieces: &[PlacedPiece], frame: &TargetFrame) -> CompletionReport {
        let count = pieces.len();
        if count == 0 {
            return CompletionReport::gated(CompletionStatus::NoPieces, 0, 0.0, 0.0);
        }

        let snapped = pieces.iter().filter(|p| p.snapped).count();
        let snapped_ratio = snapped as f64 / count as f64;
        if snapped_ratio < self.config.snapped_gate {
            log::debug!(
                "completion gated: {}/{} snapped ({:.3})",
                snapped,
                count,
                snapped_ratio
            );
            return CompletionReport::gated(CompletionStatus::SnappedGate, count, snapped_ratio, 0.0);
        }

        let inside = pieces
            .iter()
            .filter(|p| frame.aabb().contains_point(p.polygon.centroid()))
            .count();
        let centroid_ratio = inside as f64 / count as f64;
        if centroid_ratio < self.config.centroid_gate {
            log::debug!(
                "completion gated: {}/{} centroids in frame ({:.3})",
                inside,
                count,
                centroid_ratio
            );
            return CompletionReport::gated(
                CompletionStatus::CentroidGate,
                count,
                snapped_ratio,
                centroid_ratio,
            );
        }

        let coverage = self.coverage(pieces, frame);
        if coverage.frame_area <= 0.0 {
            log::warn!(
                "frame collapses at scale factor {}; completion not evaluated",
                self.config.scale_factor
            );
            return CompletionReport::gated(
                CompletionStatus::DegenerateFrame,
                count,
                snapped_ratio,
                centroid_ratio,
            );
        }

        let coverage_ratio = coverage.total() / coverage.frame_area;
        let dominant_ratio = coverage.largest() / coverage.frame_area;
        let significant_cutoff = self.config.significant_region_ratio * coverage.frame_area;
        let significant_regions = coverage
            .regions
            .iter()
            .filter(|&&a| a > significant_cutoff)
            .count();

        let all_snapped = snapped == count;
        let multi_layer = significant_regions as f64 >= self.config.multi_layer_ratio * count as f64;
        let covered = coverage_ratio >= self.config.coverage_threshold
            || (!multi_layer && dominant_ratio >= self.config.dominant_threshold);

        let status = match (covered, all_snapped) {
            (true, true) => CompletionStatus::Complete,
            (true, false) => CompletionStatus::NotAllSnapped,
            (false, _) => CompletionStatus::InsufficientCoverage,
        };

        log::debug!(
            "completion check: coverage {:.4}, dominant {:.4}, {} region(s) ({} significant), {:?}",
            coverage_ratio,
            dominant_ratio,
            coverage.regions.len(),
            significant_regions,
            status
        );

        CompletionReport {
            complete: status == CompletionStatus::Complete,
            status,
            piece_count: count,
            snapped_ratio,
            centroid_ratio,
            coverage_ratio,
            dominant_ratio,
            region_count: coverage.regions.len(),
            significant_regions,
        }
    }

    /// Union, heal, intersect; areas back in world units².
    fn coverage(&self, pieces: &[PlacedPiece], frame: &TargetFrame) -> Coverage {
        let frame_contour = self.to_lattice(frame.polygon().vertices());
        let frame_area = self.scaling.unscale_area(area(&frame_contour));
        if frame_area <= 0.0 {
            return Coverage {
                regions: Vec::new(),
                frame_area,
            };
        }

        let scaled: Vec<Contour> = pieces
            .iter()
            .map(|p| self.to_lattice(p.polygon.vertices()))
            .collect();

        let merged = union_all(&scaled);
        let healed = inflate(&merged, self.config.scaled_heal_buffer());
        let clipped = intersection(&normalized_contours(&healed), &[frame_contour]);

        Coverage {
            regions: clipped
                .iter()
                .map(|region| self.scaling.unscale_area(region_area(region)))
                .collect(),
            frame_area,
        }
    }

    fn to_lattice(&self, vertices: &[Point2]) -> Contour {
        ensure_ccw(&self.scaling.scale_polygon(vertices))
    }
}
