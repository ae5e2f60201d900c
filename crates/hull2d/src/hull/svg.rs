//! SVG outline rendering of a polygon on a fixed 400×400 canvas.
//!
//! Normalization
//! - Vertices are mapped into the canvas with a 2-px margin by scaling x
//!   and y independently over the bounding-box extents (aspect is NOT
//!   preserved: a long thin polygon fills the canvas in both axes).
//! - The y axis is flipped so geometric "up" renders upward.
//!
//! This is a terminal, optional side effect: the string producer here has
//! no feedback into the polygon model and callers may ignore it entirely.

use super::point::Point2;
use super::polygon::ConvexPolygon;
use std::fmt::Write;

const CANVAS: f64 = 400.0;
const MARGIN: f64 = 2.0;
const SPAN: f64 = CANVAS - 2.0 * MARGIN;

/// Render the closed polygon outline as an SVG document with the given
/// stroke color (any SVG color syntax, e.g. `"#000000"`).
///
/// Returns `None` when the polygon has no bounding box (no vertices) or a
/// degenerate box with zero extent in either axis, which would make the
/// per-axis normalization divide by zero.
pub fn polygon_outline(poly: &ConvexPolygon, stroke: &str) -> Option<String> {
    let (lo, hi) = poly.bounding_box()?;
    let dx = hi.x - lo.x;
    let dy = hi.y - lo.y;
    if dx <= 0.0 || dy <= 0.0 {
        return None;
    }

    let map = |p: &Point2| {
        let x = SPAN * (p.x - lo.x) / dx + MARGIN;
        let y = CANVAS - (SPAN * (p.y - lo.y) / dy + MARGIN);
        (x, y)
    };

    let mut points = String::new();
    for (i, v) in poly.vertices().iter().enumerate() {
        let (x, y) = map(v);
        if i > 0 {
            points.push(' ');
        }
        // write! to a String cannot fail.
        let _ = write!(points, "{x},{y}");
    }

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS}" height="{CANVAS}" viewBox="0 0 {CANVAS} {CANVAS}">"#
    );
    let _ = writeln!(
        doc,
        r#"  <rect width="100%" height="100%" fill="white"/>"#
    );
    let _ = writeln!(
        doc,
        r#"  <polygon points="{points}" fill="none" stroke="{stroke}"/>"#
    );
    doc.push_str("</svg>\n");
    Some(doc)
}
