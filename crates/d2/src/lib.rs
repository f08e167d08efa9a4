//! # jigcut 2D
//!
//! Polygon operations for the jigcut puzzle engine: slicing pieces, meshing
//! them, and the boolean/buffer primitives the completion check is built on.
//!
//! ## Features
//!
//! - Immutable, validated [`Polygon2D`]
//! - Half-plane and stroke slicing ([`PolygonSlicer`])
//! - Ear-clipping triangulation and render meshes ([`triangulate`], [`Mesh2D`])
//! - Union / difference / intersection over `i_overlay` ([`boolean`])
//! - Square-capped strokes and outward inflation ([`offset`])
//! - R*-tree broad phase over piece bounding boxes ([`SpatialIndex2D`])
//!
//! ## Quick Start
//!
//! ```rust
//! use jigcut_d2::{Polygon2D, PolygonSlicer, Config};
//!
//! let square = Polygon2D::new(vec![(-2.0, 2.0), (2.0, 2.0), (2.0, -2.0), (-2.0, -2.0)]).unwrap();
//! let slicer = PolygonSlicer::new(&Config::default());
//!
//! let halves = slicer.split_by_line(&square, (-3.0, 0.0), (3.0, 0.0)).into_children();
//! assert_eq!(halves.len(), 2);
//!
//! let total: f64 = halves.iter().map(|p| p.area()).sum();
//! assert!((total - 16.0).abs() < 1e-9);
//! ```

pub mod boolean;
pub mod geometry;
pub mod offset;
pub mod slice;
pub mod spatial_index;
pub mod triangulate;

// Re-exports
pub use boolean::{Contour, Region};
pub use geometry::Polygon2D;
pub use slice::{PolygonSlicer, SliceOutcome};
pub use spatial_index::{SpatialEntry2D, SpatialIndex2D};
pub use triangulate::{triangulate, triangulate_strict, Mesh2D, Triangulation};
pub use jigcut_core::{Config, Error, Point2, Result, ScalingConfig, Transform2D, AABB2D};
