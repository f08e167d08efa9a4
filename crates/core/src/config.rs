//! Engine-wide tolerances and thresholds.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every tolerance and policy threshold used by slicing, meshing and
/// completion checks.
///
/// World-unit values are converted to lattice units where needed; callers
/// never pre-scale them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Dead band for side-of-line classification and vertex deduplication (world units).
    pub epsilon: f64,

    /// Areas at or below this are degenerate (world units²).
    pub area_epsilon: f64,

    /// Width of the blade swept along a freeform cut path (world units).
    pub cut_width: f64,

    /// Regions smaller than this after a freeform cut are discarded as slivers (world units²).
    pub min_split_area: f64,

    /// Multiplier mapping world coordinates onto the integer lattice used for
    /// completion checks.
    pub scale_factor: u32,

    /// Outward buffer applied to the union of placed pieces to close cut seams (world units).
    pub heal_buffer: f64,

    /// Minimum fraction of snapped pieces before any geometry work is done.
    pub snapped_gate: f64,

    /// Minimum fraction of piece centroids inside the frame's bounding box.
    pub centroid_gate: f64,

    /// Coverage ratio at which the frame counts as filled.
    pub coverage_threshold: f64,

    /// Ratio the largest covered region must reach on the dominant-region path.
    pub dominant_threshold: f64,

    /// Regions whose area ratio exceeds this are counted as significant.
    pub significant_region_ratio: f64,

    /// Significant-region count below this fraction of the piece count allows
    /// the dominant-region path.
    pub multi_layer_ratio: f64,

    /// Number of generation snapshots a cutting session retains for undo.
    pub history_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            area_epsilon: 1e-9,
            cut_width: 0.02,
            min_split_area: 1e-3,
            scale_factor: 1000,
            heal_buffer: 0.0015,
            snapped_gate: 0.90,
            centroid_gate: 0.95,
            coverage_threshold: 0.96,
            dominant_threshold: 0.95,
            significant_region_ratio: 0.01,
            multi_layer_ratio: 0.70,
            history_depth: 32,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the side-classification dead band.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the degenerate-area threshold.
    pub fn with_area_epsilon(mut self, area_epsilon: f64) -> Self {
        self.area_epsilon = area_epsilon;
        self
    }

    /// Sets the freeform blade width.
    pub fn with_cut_width(mut self, width: f64) -> Self {
        self.cut_width = width;
        self
    }

    /// Sets the sliver threshold for freeform cuts.
    pub fn with_min_split_area(mut self, area: f64) -> Self {
        self.min_split_area = area;
        self
    }

    /// Sets the lattice scale factor.
    pub fn with_scale_factor(mut self, factor: u32) -> Self {
        self.scale_factor = factor;
        self
    }

    /// Sets the seam heal buffer.
    pub fn with_heal_buffer(mut self, buffer: f64) -> Self {
        self.heal_buffer = buffer;
        self
    }

    /// Sets the snapped-fraction gate.
    pub fn with_snapped_gate(mut self, gate: f64) -> Self {
        self.snapped_gate = gate;
        self
    }

    /// Sets the centroid-in-frame gate.
    pub fn with_centroid_gate(mut self, gate: f64) -> Self {
        self.centroid_gate = gate;
        self
    }

    /// Sets the coverage threshold.
    pub fn with_coverage_threshold(mut self, threshold: f64) -> Self {
        self.coverage_threshold = threshold;
        self
    }

    /// Sets the dominant-region threshold.
    pub fn with_dominant_threshold(mut self, threshold: f64) -> Self {
        self.dominant_threshold = threshold;
        self
    }

    /// Sets the significant-region ratio.
    pub fn with_significant_region_ratio(mut self, ratio: f64) -> Self {
        self.significant_region_ratio = ratio;
        self
    }

    /// Sets the multi-layer bypass ratio.
    pub fn with_multi_layer_ratio(mut self, ratio: f64) -> Self {
        self.multi_layer_ratio = ratio;
        self
    }

    /// Sets how many generation snapshots are retained.
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    /// Heal buffer expressed in lattice units.
    pub fn scaled_heal_buffer(&self) -> f64 {
        self.heal_buffer * self.scale_factor as f64
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("epsilon", self.epsilon),
            ("area_epsilon", self.area_epsilon),
            ("cut_width", self.cut_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("min_split_area", self.min_split_area),
            ("heal_buffer", self.heal_buffer),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        let ratios = [
            ("snapped_gate", self.snapped_gate),
            ("centroid_gate", self.centroid_gate),
            ("coverage_threshold", self.coverage_threshold),
            ("dominant_threshold", self.dominant_threshold),
            ("significant_region_ratio", self.significant_region_ratio),
            ("multi_layer_ratio", self.multi_layer_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.scale_factor == 0 {
            return Err(Error::InvalidConfig(
                "scale_factor must be at least 1".to_string(),
            ));
        }

        if self.history_depth == 0 {
            return Err(Error::InvalidConfig(
                "history_depth must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
