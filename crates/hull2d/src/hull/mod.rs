//! Convex hulls of 2D point sets (V-representation only).
//!
//! Purpose
//! - Provide a single, canonical vertex-sequence polygon (`ConvexPolygon`)
//!   built once from raw points via Andrew's monotone chain, plus the pure
//!   queries defined over that sequence.
//! - Keep the API minimal and numerically explicit (eps-aware).
//!
//! Why V-rep only
//! - Every operation here (perimeter, shoelace area, centroid, bounding box,
//!   union-by-rehull) reads the boundary vertices directly; no half-space
//!   form is ever needed.
//!
//! Code cross-refs: `Point2`, `chain::convex_hull`, `ConvexPolygon`

pub mod chain;
pub mod point;
pub mod polygon;
pub mod rand;
pub mod svg;

pub use chain::convex_hull;
pub use point::Point2;
pub use polygon::ConvexPolygon;
