//! Polygon slicing.
//!
//! Two modes:
//!
//! - **Half-plane split** ([`PolygonSlicer::split_by_line`]): partitions a
//!   polygon by an infinite line into exactly two children, or leaves it
//!   whole.
//! - **Stroke split** ([`PolygonSlicer::split_by_path`]): buffers an open
//!   polyline into a thin blade and subtracts it, so only material under the
//!   stroke is removed. Yields two or more children, or leaves it whole.
//!
//! Inputs are never modified; children are new [`Polygon2D`] values.

use jigcut_core::geom::segment::{distance, split_point};
use jigcut_core::robust::side;
use jigcut_core::{Config, Point2, AABB2D};

use crate::boolean::{difference, normalized_contours, region_area, FillRule, Region};
use crate::geometry::Polygon2D;
use crate::offset::stroke_polyline;

/// Outcome of a slicing attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceOutcome {
    /// The cut missed, only grazed the polygon, or produced degenerate parts.
    Unsplit,
    /// The polygon is replaced by these children.
    Split(Vec<Polygon2D>),
}

impl SliceOutcome {
    /// Returns true if the polygon was split.
    pub fn is_split(&self) -> bool {
        matches!(self, SliceOutcome::Split(_))
    }

    /// Children of a split, empty when unsplit.
    pub fn into_children(self) -> Vec<Polygon2D> {
        match self {
            SliceOutcome::Split(children) => children,
            SliceOutcome::Unsplit => Vec::new(),
        }
    }
}

/// Splits polygons along straight lines or stroked polylines.
#[derive(Debug, Clone)]
pub struct PolygonSlicer {
    epsilon: f64,
    area_epsilon: f64,
    cut_width: f64,
    min_split_area: f64,
}

impl PolygonSlicer {
    /// Creates a slicer using the tolerances of `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            epsilon: config.epsilon,
            area_epsilon: config.area_epsilon,
            cut_width: config.cut_width,
            min_split_area: config.min_split_area,
        }
    }

    /// Half-plane split by the infinite line through `line_start` and `line_end`.
    ///
    /// Vertices within `epsilon` of the line go to both sides; edges whose
    /// endpoints lie strictly on opposite sides contribute their crossing
    /// point to both sides. The split is accepted only if both sides keep at
    /// least three vertices and non-degenerate area.
    ///
    /// For a concave polygon crossed more than twice, each side is a single
    /// ring that touches itself along the cut line.
    pub fn split_by_line(
        &self,
        polygon: &Polygon2D,
        line_start: Point2,
        line_end: Point2,
    ) -> SliceOutcome {
        let length = distance(line_start, line_end);
        if length < self.epsilon {
            return SliceOutcome::Unsplit;
        }

        let vertices = polygon.vertices();
        let n = vertices.len();

        // Signed distances, so the dead band is in world units
        let dist: Vec<f64> = vertices
            .iter()
            .map(|&p| side(line_start, line_end, p) / length)
            .collect();

        let mut left: Vec<Point2> = Vec::with_capacity(n + 2);
        let mut right: Vec<Point2> = Vec::with_capacity(n + 2);

        for i in 0..n {
            let j = (i + 1) % n;
            let (p1, d1) = (vertices[i], dist[i]);
            let (p2, d2) = (vertices[j], dist[j]);

            if d1 >= -self.epsilon {
                left.push(p1);
            }
            if d1 <= self.epsilon {
                right.push(p1);
            }

            let crosses = (d1 > self.epsilon && d2 < -self.epsilon)
                || (d1 < -self.epsilon && d2 > self.epsilon);
            if crosses {
                let hit = split_point(p1, p2, d1, d2);
                left.push(hit);
                right.push(hit);
            }
        }

        if left.len() < 3 || right.len() < 3 {
            return SliceOutcome::Unsplit;
        }

        match (self.child(left), self.child(right)) {
            (Some(l), Some(r)) => SliceOutcome::Split(vec![l, r]),
            _ => SliceOutcome::Unsplit,
        }
    }

    /// Stroke split: subtracts the `cut_width` blade swept along `path`.
    ///
    /// Regions smaller than `min_split_area` are discarded. The polygon is
    /// replaced only if two or more regions survive. A region that would keep
    /// an interior hole (a closed stroke loop inside the polygon) cannot be
    /// a simple piece, so the polygon is left whole in that case.
    pub fn split_by_path(&self, polygon: &Polygon2D, path: &[Point2]) -> SliceOutcome {
        let path = dedup_path(path, self.epsilon);
        if path.len() < 2 {
            return SliceOutcome::Unsplit;
        }

        let blade = stroke_polyline(&path, self.cut_width);
        if blade.is_empty() {
            return SliceOutcome::Unsplit;
        }

        let blade_box = AABB2D::from_points(&path)
            .map(|bb| bb.expanded(self.cut_width))
            .filter(|bb| bb.intersects(&polygon.aabb()));
        if blade_box.is_none() {
            return SliceOutcome::Unsplit;
        }

        let subject = vec![polygon.vertices().to_vec()];
        let regions = difference(&subject, &normalized_contours(&blade), FillRule::EvenOdd);

        let survivors: Vec<Region> = regions
            .into_iter()
            .filter(|region| region_area(region) >= self.min_split_area)
            .collect();

        log::debug!(
            "stroke split: {} region(s) above {:.3e}",
            survivors.len(),
            self.min_split_area
        );

        if survivors.len() < 2 {
            return SliceOutcome::Unsplit;
        }

        if survivors.iter().any(|region| region.len() > 1) {
            log::warn!("stroke would leave a piece with an interior hole; piece left whole");
            return SliceOutcome::Unsplit;
        }

        let mut children = Vec::with_capacity(survivors.len());
        for mut region in survivors {
            match self.child(region.swap_remove(0)) {
                Some(child) => children.push(child),
                None => return SliceOutcome::Unsplit,
            }
        }

        SliceOutcome::Split(children)
    }

    fn child(&self, vertices: Vec<Point2>) -> Option<Polygon2D> {
        Polygon2D::with_tolerance(vertices, self.epsilon, self.area_epsilon).ok()
    }
}

impl Default for PolygonSlicer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Drops consecutive repeated points from an open path.
fn dedup_path(path: &[Point2], epsilon: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(path.len());
    for &p in path {
        match out.last() {
            Some(&q) if distance(p, q) <= epsilon => {}
            _ => out.push(p),
        }
    }
    out
}

/// Convenience wrapper over [`PolygonSlicer::split_by_line`] with default tolerances.
pub fn split_by_line(polygon: &Polygon2D, line_start: Point2, line_end: Point2) -> SliceOutcome {
    PolygonSlicer::default().split_by_line(polygon, line_start, line_end)
}
