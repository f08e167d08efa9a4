//! Broad-phase lookup of pieces by bounding box using an R*-tree.
//!
//! A cut only has to visit pieces whose world AABB can meet it: the blade's
//! box for stroke cuts, or boxes straddling the line for half-plane cuts.

use jigcut_core::robust::side;
use jigcut_core::{Point2, Transform2D, AABB2D};
use rstar::{RTree, RTreeObject, SelectionFunction, AABB};

use crate::geometry::Polygon2D;

/// An entry in the 2D spatial index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialEntry2D {
    /// Position of the item in the caller's list.
    pub index: usize,
    /// Caller-defined identity of the item.
    pub key: u64,
    /// Axis-aligned bounding box (min_x, min_y, max_x, max_y).
    pub aabb: [f64; 4],
}

impl SpatialEntry2D {
    /// Creates a new spatial entry.
    pub fn new(index: usize, key: u64, aabb: [f64; 4]) -> Self {
        Self { index, key, aabb }
    }

    /// Creates an entry for a polygon placed in the world by `transform`.
    pub fn from_placed(index: usize, key: u64, polygon: &Polygon2D, transform: &Transform2D) -> Self {
        let bb = polygon.transformed(transform).aabb();
        Self::new(index, key, [bb.min_x, bb.min_y, bb.max_x, bb.max_y])
    }

}

impl RTreeObject for SpatialEntry2D {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.aabb[0], self.aabb[1]], [self.aabb[2], self.aabb[3]])
    }
}

/// Selects boxes that reach both sides of an infinite line.
struct StraddlesLine {
    start: Point2,
    end: Point2,
    length: f64,
    epsilon: f64,
}

impl StraddlesLine {
    fn straddles(&self, min: [f64; 2], max: [f64; 2]) -> bool {
        let mut left = false;
        let mut right = false;
        for corner in [(min[0], min[1]), (max[0], min[1]), (max[0], max[1]), (min[0], max[1])] {
            let d = side(self.start, self.end, corner) / self.length;
            left |= d >= -self.epsilon;
            right |= d <= self.epsilon;
        }
        left && right
    }
}

impl SelectionFunction<SpatialEntry2D> for StraddlesLine {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        self.straddles(envelope.lower(), envelope.upper())
    }

    fn should_unpack_leaf(&self, leaf: &SpatialEntry2D) -> bool {
        let [min_x, min_y, max_x, max_y] = leaf.aabb;
        self.straddles([min_x, min_y], [max_x, max_y])
    }
}

/// 2D spatial index using an R*-tree.
#[derive(Debug)]
pub struct SpatialIndex2D {
    tree: RTree<SpatialEntry2D>,
}

impl SpatialIndex2D {
    /// Creates a new empty spatial index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Creates a spatial index with the given entries.
    pub fn with_entries(entries: Vec<SpatialEntry2D>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Inserts a new entry.
    pub fn insert(&mut self, entry: SpatialEntry2D) {
        self.tree.insert(entry);
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Finds all entries whose bounding boxes intersect the given box.
    pub fn query_aabb(&self, min: [f64; 2], max: [f64; 2]) -> Vec<&SpatialEntry2D> {
        let envelope = AABB::from_corners(min, max);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Finds all entries whose bounding boxes intersect `bb`.
    pub fn query_box(&self, bb: &AABB2D) -> Vec<&SpatialEntry2D> {
        let (min, max) = bb.corners();
        self.query_aabb(min, max)
    }

    /// Finds all entries whose bounding boxes touch or straddle the infinite
    /// line through `start` and `end`, within `epsilon` world units.
    ///
    /// Subtrees whose envelope lies entirely on one side are pruned.
    pub fn query_line(&self, start: Point2, end: Point2, epsilon: f64) -> Vec<&SpatialEntry2D> {
        let length = ((end.0 - start.0).powi(2) + (end.1 - start.1).powi(2)).sqrt();
        if length == 0.0 {
            return Vec::new();
        }

        self.tree
            .locate_with_selection_function(StraddlesLine {
                start,
                end,
                length,
                epsilon,
            })
            .collect()
    }

    /// Returns an iterator over all entries in the index.
    pub fn iter(&self) -> impl Iterator<Item = &SpatialEntry2D> {
        self.tree.iter()
    }
}

impl Default for SpatialIndex2D {
    fn default() -> Self {
        Self::new()
    }
}
