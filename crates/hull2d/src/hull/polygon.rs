//! Canonical convex polygon and its derived-property queries.
//!
//! Purpose
//! - Own the hull vertex sequence produced by `chain::convex_hull` and
//!   expose pure, total queries over it. Nothing here mutates a polygon
//!   after construction; `union` builds a fresh one.
//!
//! Degenerate counts
//! - 0, 1, and 2 vertices are valid polygons. Queries branch explicitly on
//!   the small counts rather than signaling errors: a two-vertex polygon is
//!   an open segment with one edge, zero area, and is never regular.

use super::chain::convex_hull;
use super::point::{Point2, EPS};

/// Convex polygon as a canonically ordered vertex sequence.
///
/// Invariants:
/// - `verts` is the convex hull boundary of the construction input, in CCW
///   traversal order (lower chain then upper chain), with no consecutive
///   tolerant-equal vertices.
/// - Immutable after construction; safe to share read-only across threads.
#[derive(Clone, Debug, Default)]
pub struct ConvexPolygon {
    verts: Vec<Point2>,
}

impl ConvexPolygon {
    /// Build the hull of an arbitrary point collection. The input may be
    /// empty, unordered, and contain duplicates; it is reduced to hull form
    /// immediately and never consulted again.
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            verts: convex_hull(points),
        }
    }

    /// Hull vertices in canonical CCW order.
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.verts
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.verts.len()
    }

    /// Edge count: 0 for at most one vertex, 1 for the open two-vertex
    /// segment, n for a closed n-gon.
    pub fn num_edges(&self) -> usize {
        match self.verts.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    /// Boundary length: cyclic vertex-to-predecessor distances. The open
    /// two-vertex segment counts its single distance once, not doubled.
    pub fn perimeter(&self) -> f64 {
        match self.verts.len() {
            0 | 1 => 0.0,
            2 => self.verts[0].distance(self.verts[1]),
            n => (0..n)
                .map(|i| {
                    let prev = if i == 0 { n - 1 } else { i - 1 };
                    self.verts[prev].distance(self.verts[i])
                })
                .sum(),
        }
    }

    /// Enclosed area via the shoelace formula, |signed sum| / 2.
    /// Zero for fewer than three vertices.
    pub fn area(&self) -> f64 {
        let n = self.verts.len();
        if n <= 2 {
            return 0.0;
        }
        let mut signed = 0.0;
        for i in 0..n {
            let p = self.verts[i];
            let q = self.verts[(i + 1) % n];
            signed += p.x * q.y - q.x * p.y;
        }
        signed.abs() / 2.0
    }

    /// Vertex centroid: the unweighted mean of the hull vertices (not the
    /// area-weighted centroid). `None` for the empty polygon.
    pub fn centroid(&self) -> Option<Point2> {
        let n = self.verts.len();
        if n == 0 {
            return None;
        }
        let sum = self
            .verts
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords());
        Some(Point2::from(sum / n as f64))
    }

    /// Equal-edge-length regularity test: every cyclic consecutive-vertex
    /// distance matches the first within `EPS` absolute tolerance.
    ///
    /// Angles are NOT checked, so a rhombus passes. Trivially true for at
    /// most one vertex; the two-vertex segment is never regular.
    pub fn is_regular(&self) -> bool {
        let n = self.verts.len();
        if n <= 1 {
            return true;
        }
        if n == 2 {
            return false;
        }
        let d = self.verts[0].distance(self.verts[1]);
        (0..n).all(|i| {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            (self.verts[prev].distance(self.verts[i]) - d).abs() <= EPS
        })
    }

    /// Axis-aligned bounding box as (min corner, max corner).
    /// `None` for the empty polygon.
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        let first = *self.verts.first()?;
        let init = (first, first);
        let (lo, hi) = self.verts.iter().skip(1).fold(init, |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some((lo, hi))
    }

    /// Hull of the union of both vertex sets. Since both inputs are already
    /// hulls, this is the convex hull of the union of the underlying point
    /// sets: hull(hull(A) ∪ hull(B)) = hull(A ∪ B). Neither input is
    /// touched; the result owns fresh vertices.
    pub fn union(&self, other: &ConvexPolygon) -> ConvexPolygon {
        let mut merged = Vec::with_capacity(self.verts.len() + other.verts.len());
        merged.extend_from_slice(&self.verts);
        merged.extend_from_slice(&other.verts);
        ConvexPolygon::from_points(&merged)
    }

    /// Tolerant equality: same vertex count and pairwise `tolerant_eq` in
    /// canonical order. Inherits the non-transitivity of the point test.
    pub fn tolerant_eq(&self, other: &ConvexPolygon) -> bool {
        self.verts.len() == other.verts.len()
            && self
                .verts
                .iter()
                .zip(&other.verts)
                .all(|(a, b)| a.tolerant_eq(*b))
    }

    /// Point membership, boundary inclusive.
    ///
    /// For a closed CCW hull the point must not lie strictly right of any
    /// directed edge; the cross products are compared against `-EPS` so
    /// boundary points with rounding noise still count as inside.
    pub fn contains_point(&self, p: Point2) -> bool {
        match self.verts.len() {
            0 => false,
            1 => self.verts[0].tolerant_eq(p),
            2 => on_segment(self.verts[0], self.verts[1], p),
            n => (0..n).all(|i| {
                let a = self.verts[i];
                let b = self.verts[(i + 1) % n];
                let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
                cross >= -EPS
            }),
        }
    }
}

/// Closeness of `p` to the closed segment `a..b`, within `EPS`.
fn on_segment(a: Point2, b: Point2, p: Point2) -> bool {
    let ab = b.coords() - a.coords();
    let ap = p.coords() - a.coords();
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return a.tolerant_eq(p);
    }
    let t = (ap.dot(&ab) / len2).clamp(0.0, 1.0);
    let nearest = a.coords() + ab * t;
    (p.coords() - nearest).norm() <= EPS
}
