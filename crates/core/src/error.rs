//! Error types for jigcut.

use thiserror::Error;

/// Errors produced by the puzzle geometry engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Polygon input is unusable (too few vertices, zero area, non-finite coordinates).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Target frame is missing or has no area.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// A configuration value is out of its valid range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Ear clipping stopped before consuming the polygon.
    #[error("triangulation did not converge: produced {produced} of {expected} triangles")]
    Triangulation {
        /// Triangles emitted before the scan bound was hit.
        produced: usize,
        /// Triangles a simple polygon of the same size yields.
        expected: usize,
    },

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
