//! Polygon boolean operations on top of `i_overlay`.
//!
//! Inputs are plain contours; outputs are [`Region`]s, one per connected
//! island, outer contour first and holes after it. Contour orientation is
//! normalized on the way in (outer counter-clockwise, holes clockwise) so the
//! non-zero fill rule treats holes as holes regardless of what produced them.

use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use jigcut_core::geom::polygon::{area, ensure_ccw, signed_area};
use jigcut_core::Point2;

pub use i_overlay::core::fill_rule::FillRule;

/// A closed ring of vertices, implicitly closed.
pub type Contour = Vec<Point2>;

/// One connected island: outer contour followed by zero or more holes.
pub type Region = Vec<Contour>;

/// Unions any number of simple polygons into disjoint islands.
///
/// Each input is oriented counter-clockwise first, so mixed windings cannot
/// cancel under the non-zero rule.
pub fn union_all(polygons: &[Contour]) -> Vec<Region> {
    let mut inputs = polygons.iter().filter(|p| p.len() >= 3);

    let first = match inputs.next() {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut result: Vec<Region> = vec![vec![ensure_ccw(first)]];

    for polygon in inputs {
        let subject = normalized_contours(&result);
        let clip = vec![ensure_ccw(polygon)];
        let merged = overlay(&subject, &clip, OverlayRule::Union, FillRule::NonZero);

        if merged.is_empty() {
            // Overlay lost everything; keep what we had
            log::warn!("union step produced no regions, skipping one input");
            continue;
        }
        result = merged;
    }

    result
}

/// Unions `subject` with `clip`, each filled under `fill_rule`.
pub fn union(subject: &[Contour], clip: &[Contour], fill_rule: FillRule) -> Vec<Region> {
    overlay(subject, clip, OverlayRule::Union, fill_rule)
}

/// Subtracts `clip` from `subject`.
pub fn difference(subject: &[Contour], clip: &[Contour], fill_rule: FillRule) -> Vec<Region> {
    overlay(subject, clip, OverlayRule::Difference, fill_rule)
}

/// Intersects `subject` with `clip` under the non-zero rule.
pub fn intersection(subject: &[Contour], clip: &[Contour]) -> Vec<Region> {
    overlay(subject, clip, OverlayRule::Intersect, FillRule::NonZero)
}

/// Area of a region: outer area minus hole areas.
pub fn region_area(region: &Region) -> f64 {
    let mut contours = region.iter();
    let outer = match contours.next() {
        Some(c) => area(c),
        None => return 0.0,
    };
    let holes: f64 = contours.map(|c| area(c)).sum();
    (outer - holes).max(0.0)
}

/// Total area of a set of regions.
pub fn total_area(regions: &[Region]) -> f64 {
    regions.iter().map(region_area).sum()
}

/// Flattens regions into contours with outer rings counter-clockwise and
/// holes clockwise.
pub fn normalized_contours(regions: &[Region]) -> Vec<Contour> {
    let mut out = Vec::new();
    for region in regions {
        for (i, contour) in region.iter().enumerate() {
            let ccw = ensure_ccw(contour);
            if i == 0 {
                out.push(ccw);
            } else {
                out.push(ccw.into_iter().rev().collect());
            }
        }
    }
    out
}

/// Runs one overlay and converts the result back to regions.
fn overlay(
    subject: &[Contour],
    clip: &[Contour],
    rule: OverlayRule,
    fill_rule: FillRule,
) -> Vec<Region> {
    let subject: Vec<Vec<[f64; 2]>> = subject.iter().map(|c| to_path(c)).collect();
    let clip: Vec<Vec<[f64; 2]>> = clip.iter().map(|c| to_path(c)).collect();

    from_shapes(subject.overlay(&clip, rule, fill_rule))
}

/// Converts `i_overlay` shapes back into regions, dropping collapsed rings.
pub(crate) fn from_shapes(shapes: Vec<Vec<Vec<[f64; 2]>>>) -> Vec<Region> {
    let mut regions = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let region: Region = shape
            .into_iter()
            .filter(|contour| contour.len() >= 3)
            .map(|contour| contour.into_iter().map(|[x, y]| (x, y)).collect())
            .collect();

        // A shape whose outer ring collapsed carries no area
        match region.first() {
            Some(outer) if signed_area(outer) != 0.0 => regions.push(region),
            _ => {}
        }
    }
    regions
}

pub(crate) fn to_path(contour: &[Point2]) -> Vec<[f64; 2]> {
    contour.iter().map(|&(x, y)| [x, y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Contour {
        vec![
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ]
    }

    #[test]
    fn test_union_of_tiles_is_one_region() {
        let tiles = vec![
            rect(-1.0, 0.0, 0.0, 1.0),
            rect(0.0, 0.0, 1.0, 1.0),
            rect(-1.0, -1.0, 0.0, 0.0),
            rect(0.0, -1.0, 1.0, 0.0),
        ];
        let merged = union_all(&tiles);
        assert_eq!(merged.len(), 1);
        assert_relative_eq!(total_area(&merged), 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_mixed_winding() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b: Contour = rect(1.0, 1.0, 3.0, 3.0).into_iter().rev().collect();
        let merged = union_all(&[a, b]);
        assert_eq!(merged.len(), 1);
        assert_relative_eq!(total_area(&merged), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_disjoint() {
        let merged = union_all(&[rect(0.0, 0.0, 1.0, 1.0), rect(5.0, 5.0, 6.0, 6.0)]);
        assert_eq!(merged.len(), 2);
        assert_relative_eq!(total_area(&merged), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_empty() {
        assert!(union_all(&[]).is_empty());
    }

    #[test]
    fn test_difference_splits() {
        let subject = vec![rect(0.0, 0.0, 4.0, 2.0)];
        let blade = vec![rect(1.9, -1.0, 2.1, 3.0)];
        let pieces = difference(&subject, &blade, FillRule::EvenOdd);
        assert_eq!(pieces.len(), 2);
        assert_relative_eq!(total_area(&pieces), 8.0 - 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_intersection_clips_to_frame() {
        let subject = vec![rect(0.0, 0.0, 3.0, 3.0)];
        let frame = vec![rect(1.0, 1.0, 5.0, 5.0)];
        let clipped = intersection(&subject, &frame);
        assert_eq!(clipped.len(), 1);
        assert_relative_eq!(total_area(&clipped), 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_region_area_subtracts_holes() {
        let region: Region = vec![rect(0.0, 0.0, 4.0, 4.0), rect(1.0, 1.0, 2.0, 2.0)];
        assert_relative_eq!(region_area(&region), 15.0);
    }

    #[test]
    fn test_normalized_contours_orientation() {
        let region: Region = vec![
            rect(0.0, 0.0, 4.0, 4.0).into_iter().rev().collect(),
            rect(1.0, 1.0, 2.0, 2.0),
        ];
        let contours = normalized_contours(&[region]);
        assert!(signed_area(&contours[0]) > 0.0);
        assert!(signed_area(&contours[1]) < 0.0);
    }
}
