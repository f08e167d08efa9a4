//! Buffering: square-capped strokes and outward inflation.
//!
//! Both operations go through the `i_overlay` offset builders:
//! [`StrokeOffset`] for open polylines and [`OutlineOffset`] for closed
//! regions. Corners use a miter join, so right angles stay square.

use i_overlay::mesh::outline::offset::OutlineOffset;
use i_overlay::mesh::stroke::offset::StrokeOffset;
use i_overlay::mesh::style::{LineCap, LineJoin, OutlineStyle, StrokeStyle};
use jigcut_core::geom::segment::distance;
use jigcut_core::Point2;

use crate::boolean::{from_shapes, normalized_contours, to_path, Region};

/// Minimum segment length considered when stroking.
const MIN_SEGMENT_LENGTH: f64 = 1e-12;

/// Corners sharper than this angle (radians) are clipped instead of mitered.
const MITER_LIMIT_ANGLE: f64 = 0.1;

/// Buffers an open polyline by `width / 2` on each side with square caps,
/// producing the thin closed "blade" used for freeform cuts.
///
/// Self-crossing paths are fine; the stroke is filled as one shape.
/// Returns no regions if the path has no segment of positive length.
pub fn stroke_polyline(path: &[Point2], width: f64) -> Vec<Region> {
    if width <= 0.0 {
        return Vec::new();
    }
    let has_length = path
        .windows(2)
        .any(|seg| distance(seg[0], seg[1]) >= MIN_SEGMENT_LENGTH);
    if !has_length {
        return Vec::new();
    }

    let style = StrokeStyle::new(width)
        .start_cap(LineCap::Square)
        .end_cap(LineCap::Square)
        .line_join(LineJoin::Miter(MITER_LIMIT_ANGLE));

    from_shapes(to_path(path).stroke(style, false))
}

/// Grows regions outward by `distance`.
///
/// Holes shrink by the same amount and close entirely when narrower than
/// `2 × distance`. Regions whose grown outlines meet are merged. Non-positive
/// distances return the input unchanged.
pub fn inflate(regions: &[Region], distance: f64) -> Vec<Region> {
    if distance <= 0.0 || regions.is_empty() {
        return regions.to_vec();
    }

    // The outline builder takes outer rings clockwise and holes
    // counter-clockwise, the reverse of `normalized_contours`
    let paths: Vec<Vec<[f64; 2]>> = normalized_contours(regions)
        .iter()
        .map(|c| c.iter().rev().map(|&(x, y)| [x, y]).collect())
        .collect();

    let style = OutlineStyle::new(distance).line_join(LineJoin::Miter(MITER_LIMIT_ANGLE));
    from_shapes(paths.outline(style))
}
