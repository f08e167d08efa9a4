//! Free functions over raw vertex slices.
//!
//! Higher crates wrap these in validated types; these functions accept any
//! slice and degrade gracefully (zero area, `None` centroid) on degenerate input.

pub mod polygon;
pub mod segment;
