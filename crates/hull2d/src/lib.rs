//! 2D convex hulls and derived polygon properties.
//!
//! The core type is [`ConvexPolygon`]: an immutable, canonically ordered
//! vertex sequence produced by Andrew's monotone chain, with pure geometric
//! queries (area, perimeter, centroid, regularity, bounding box, union,
//! point membership) layered on top.
//!
//! API Policy
//! - Inputs are finite `f64` coordinates; NaN and infinities are out of
//!   contract and not rejected.
//! - All queries are total over constructed polygons; degenerate vertex
//!   counts (0, 1, 2) are valid polygons, not errors.

pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{ConvexPolygon, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{draw_point_cloud, draw_point_ring, CloudCfg};
    pub use crate::hull::svg::polygon_outline;
    pub use crate::hull::{convex_hull, ConvexPolygon, Point2};
    pub use nalgebra::Vector2 as Vec2;
}
