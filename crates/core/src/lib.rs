//! # jigcut Core
//!
//! Shared types, predicates and configuration for the jigcut puzzle geometry
//! engine.
//!
//! The engine cuts a square into polygonal pieces, meshes them for display,
//! and decides when the pieces dragged back into the target frame cover it.
//! This crate holds the layer everything else builds on:
//!
//! - **Points**: [`Point2`] is a plain `(x, y)` pair of `f64`
//! - **Predicates**: [`robust`] (orientation, side-of-line, point in triangle)
//! - **Polygon measures**: [`geom::polygon`] (signed area, centroid, AABB)
//! - **Segments**: [`geom::segment`] (parametric line intersection)
//! - **Scaling**: [`ScalingConfig`] maps world coordinates onto an integer lattice
//! - **Transforms**: [`Transform2D`], [`AABB2D`]
//! - **Configuration**: [`Config`], the single home of every tolerance and threshold
//!
//! ## Configuration
//!
//! ```rust
//! use jigcut_core::Config;
//!
//! let config = Config::new()
//!     .with_cut_width(0.05)
//!     .with_scale_factor(1000)
//!     .with_coverage_threshold(0.97);
//!
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geom;
pub mod robust;
pub mod transform;

/// A 2D point or vector as `(x, y)`.
pub type Point2 = (f64, f64);

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use crate::robust::{orient2d, point_in_triangle, side, Orientation, ScalingConfig, Side};
pub use transform::{Transform2D, AABB2D};
