//! Andrew's monotone chain convex hull.
//!
//! Conventions
//! - Input points are sorted by the exact lexicographic order; duplicates
//!   are removed inside the chain scans via the tolerant per-axis equality,
//!   never before sorting. Mixing the two comparisons would change hull
//!   output on near-duplicate inputs.
//! - A vertex survives only on a strict left turn (`Turn::Left`); collinear
//!   interior points are dropped from the boundary.
//! - Output is the hull boundary in counter-clockwise traversal order,
//!   lower chain then trimmed upper chain, with no consecutive
//!   tolerant-equal vertices. 0, 1, and 2-point inputs pass through as the
//!   (deduplicated) degenerate hulls.

use super::point::Point2;

/// Orientation of the turn `p -> q -> r`, by sign of the cross product of
/// `(q - p)` and `(r - p)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Classify the turn at `q` when walking `p -> q -> r`.
#[inline]
pub fn turn(p: Point2, q: Point2, r: Point2) -> Turn {
    let cross = (q.x - p.x) * (r.y - p.y) - (r.x - p.x) * (q.y - p.y);
    if cross > 0.0 {
        Turn::Left
    } else if cross < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Append `r` to a growing chain, first popping tail vertices that no
/// longer form a strict left turn with it. Skips `r` entirely when it is
/// tolerant-equal to the current tail.
fn keep_left(chain: &mut Vec<Point2>, r: Point2) {
    while chain.len() > 1 && turn(chain[chain.len() - 2], chain[chain.len() - 1], r) != Turn::Left {
        chain.pop();
    }
    match chain.last() {
        Some(&tail) if tail.tolerant_eq(r) => {}
        _ => chain.push(r),
    }
}

/// Convex hull of an arbitrary point collection (unordered, possibly empty,
/// possibly containing duplicates), in CCW order.
///
/// Every input point lies on or inside the polygon formed by the returned
/// vertices. For fewer than three distinct points the result degenerates to
/// the deduplicated input (empty, single point, or open segment).
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.exact_cmp(*b));

    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for &p in &pts {
        keep_left(&mut lower, p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        keep_left(&mut upper, p);
    }

    // The upper chain's endpoints duplicate the lower chain's.
    if upper.len() > 2 {
        lower.extend_from_slice(&upper[1..upper.len() - 1]);
    }
    lower
}
