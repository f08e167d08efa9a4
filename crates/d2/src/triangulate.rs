//! Ear-clipping triangulation and render meshes.
//!
//! # Algorithm
//!
//! 1. Orient a working index list counter-clockwise (reversed for clockwise input)
//! 2. Scan consecutive triples `(u, v, w)`; a triple is an ear when it turns
//!    left by more than the tolerance and no other active vertex lies in it
//! 3. Emit the ear, drop `v`, and keep scanning from the same neighborhood
//!
//! Each shrink step gets `2 × active` scan attempts. Running out means the
//! input was not simple; [`triangulate`] then returns the partial result
//! flagged incomplete, while [`triangulate_strict`] reports an error.
//!
//! # Complexity
//!
//! - Time: O(n²) for a polygon with n vertices
//! - Space: O(n)

use jigcut_core::geom::polygon::signed_area;
use jigcut_core::robust::{orient2d_raw, point_in_triangle};
use jigcut_core::{Error, Point2, Result};

use crate::geometry::Polygon2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum doubled triangle area for an ear to count as convex.
pub const DEFAULT_EAR_EPSILON: f64 = 1e-10;

/// Output of ear clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    /// Flat triangle list; each consecutive triple indexes the input points.
    pub indices: Vec<usize>,
    /// False when the scan bound was hit before the polygon was consumed.
    pub complete: bool,
}

impl Triangulation {
    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if there are no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Best-effort triangulation of a simple polygon.
///
/// A simple polygon of `n` vertices yields exactly `n - 2` triangles and
/// `complete == true`. Fewer than three points yield an empty, incomplete
/// result.
pub fn triangulate(points: &[Point2]) -> Triangulation {
    triangulate_with_epsilon(points, DEFAULT_EAR_EPSILON)
}

/// [`triangulate`] with an explicit ear convexity tolerance.
pub fn triangulate_with_epsilon(points: &[Point2], epsilon: f64) -> Triangulation {
    let n = points.len();
    if n < 3 {
        return Triangulation {
            indices: Vec::new(),
            complete: false,
        };
    }

    let mut active: Vec<usize> = if signed_area(points) > 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };

    let mut indices = Vec::with_capacity(3 * (n - 2));
    let mut nv = n;
    let mut attempts = 2 * nv;
    let mut v = nv - 1;

    while nv > 2 {
        if attempts == 0 {
            log::warn!(
                "ear clipping stopped with {} active vertices ({} of {} triangles)",
                nv,
                indices.len() / 3,
                n - 2
            );
            return Triangulation {
                indices,
                complete: false,
            };
        }
        attempts -= 1;

        let u = if v >= nv { 0 } else { v };
        v = if u + 1 >= nv { 0 } else { u + 1 };
        let w = if v + 1 >= nv { 0 } else { v + 1 };

        if is_ear(points, &active, u, v, w, nv, epsilon) {
            indices.extend_from_slice(&[active[u], active[v], active[w]]);
            active.remove(v);
            nv -= 1;
            attempts = 2 * nv;
        }
    }

    Triangulation {
        indices,
        complete: true,
    }
}

/// Triangulation that refuses partial output.
pub fn triangulate_strict(points: &[Point2]) -> Result<Vec<usize>> {
    let result = triangulate(points);
    if result.complete {
        Ok(result.indices)
    } else {
        Err(Error::Triangulation {
            produced: result.triangle_count(),
            expected: points.len().saturating_sub(2),
        })
    }
}

fn is_ear(
    points: &[Point2],
    active: &[usize],
    u: usize,
    v: usize,
    w: usize,
    nv: usize,
    epsilon: f64,
) -> bool {
    let a = points[active[u]];
    let b = points[active[v]];
    let c = points[active[w]];

    // Working order is counter-clockwise, so an ear must turn left
    if orient2d_raw(a, b, c) <= epsilon {
        return false;
    }

    for (p, &idx) in active.iter().enumerate().take(nv) {
        if p == u || p == v || p == w {
            continue;
        }
        let q = points[idx];
        // Pinch points repeat a corner; they do not block the ear
        if q == a || q == b || q == c {
            continue;
        }
        if point_in_triangle(a, b, c, q) {
            return false;
        }
    }

    true
}

/// Vertices plus triangle indices, ready for a renderer or collider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh2D {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Flat triangle list into `vertices`.
    pub indices: Vec<usize>,
}

impl Mesh2D {
    /// Meshes a polygon, failing if ear clipping does not converge.
    pub fn from_polygon(polygon: &Polygon2D) -> Result<Self> {
        let indices = triangulate_strict(polygon.vertices())?;
        Ok(Self {
            vertices: polygon.vertices().to_vec(),
            indices,
        })
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point2; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                self.vertices[t[0]],
                self.vertices[t[1]],
                self.vertices[t[2]],
            ]
        })
    }

    /// Sum of triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| orient2d_raw(a, b, c).abs() * 0.5)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use jigcut_core::geom::polygon::area;

    fn triangle_area_sum(points: &[Point2], indices: &[usize]) -> f64 {
        indices
            .chunks_exact(3)
            .map(|t| orient2d_raw(points[t[0]], points[t[1]], points[t[2]]).abs() * 0.5)
            .sum()
    }

    #[test]
    fn test_square_two_triangles() {
        let square = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let result = triangulate(&square);
        assert!(result.complete);
        assert_eq!(result.triangle_count(), 2);
        assert_relative_eq!(triangle_area_sum(&square, &result.indices), 1.0);
    }

    #[test]
    fn test_clockwise_input() {
        let square = vec![(-2.0, 2.0), (2.0, 2.0), (2.0, -2.0), (-2.0, -2.0)];
        let result = triangulate(&square);
        assert!(result.complete);
        assert_eq!(result.indices.len(), 6);
        assert_relative_eq!(triangle_area_sum(&square, &result.indices), 16.0);
    }

    #[test]
    fn test_l_shape() {
        let l_shape = vec![
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ];
        let result = triangulate(&l_shape);
        assert!(result.complete);
        assert_eq!(result.triangle_count(), 4);
        assert_relative_eq!(
            triangle_area_sum(&l_shape, &result.indices),
            area(&l_shape),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_collinear_vertex_on_edge() {
        // Mid-edge vertex as left behind by a straight cut
        let poly = vec![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (0.0, 1.0)];
        let result = triangulate(&poly);
        assert!(result.complete);
        assert_eq!(result.triangle_count(), 3);
        assert_relative_eq!(triangle_area_sum(&poly, &result.indices), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_indices_reference_input() {
        let tri = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let result = triangulate(&tri);
        let mut idx = result.indices.clone();
        idx.sort_unstable();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn test_too_few_points() {
        let result = triangulate(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(result.is_empty());
        assert!(!result.complete);
    }

    #[test]
    fn test_self_intersecting_bowtie_is_bounded() {
        let bowtie = vec![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
        let result = triangulate(&bowtie);
        // Terminates; at most n - 2 triangles
        assert!(result.triangle_count() <= 2);
    }

    #[test]
    fn test_strict_rejects_fully_collinear() {
        let line = vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
        let err = triangulate_strict(&line).unwrap_err();
        assert!(matches!(
            err,
            Error::Triangulation {
                produced: 0,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_mesh_from_polygon() {
        let poly = Polygon2D::rectangle(0.0, 0.0, 3.0, 2.0).unwrap();
        let mesh = Mesh2D::from_polygon(&poly).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_relative_eq!(mesh.area(), 6.0, epsilon = 1e-12);
    }
}
