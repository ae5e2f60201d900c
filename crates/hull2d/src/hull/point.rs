//! The 2D point value type and its comparison tolerances.
//!
//! - `Point2`: immutable coordinate pair; no identity beyond coordinates.
//! - `tolerant_eq`: per-axis box tolerance `EPS = 1e-7`. Deliberately NOT
//!   wired into `PartialEq` so ordered containers and hashing never see a
//!   non-transitive relation.
//! - `exact_cmp`: exact lexicographic order (x, then y). The sort key is
//!   exact while equality is tolerant; the two disagree near the epsilon
//!   boundary and are kept as distinct named operations on purpose.

use nalgebra::Vector2;
use std::cmp::Ordering;

/// Comparison tolerance for geometric equality, per axis.
pub const EPS: f64 = 1e-7;

/// Immutable 2D point over finite `f64` coordinates.
///
/// The derived `PartialEq` is exact bitwise float equality and exists for
/// test assertions; geometric comparison goes through [`Point2::tolerant_eq`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as an nalgebra vector.
    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance. Never negative; zero iff both points coincide.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (self.coords() - other.coords()).norm()
    }

    /// Tolerant equality: `|Δx| < EPS && |Δy| < EPS`.
    ///
    /// Not an equivalence relation: transitivity can fail across chains of
    /// points near the threshold. Callers must not rely on it.
    #[inline]
    pub fn tolerant_eq(self, other: Point2) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }

    /// Exact lexicographic order: x first, tie-broken by y.
    ///
    /// No tolerance here; two points that are `tolerant_eq` may still sort
    /// as strictly ordered. Non-finite coordinates compare as equal.
    #[inline]
    pub fn exact_cmp(self, other: Point2) -> Ordering {
        match self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
