//! Point-set I/O and the JSON hull report.
//!
//! Point sets on disk are plain JSON arrays of `[x, y]` pairs; the report
//! is a flat JSON object with every derived property, so downstream
//! tooling never recomputes geometry.

use anyhow::{Context, Result};
use hull2d::{ConvexPolygon, Point2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Derived properties of a constructed hull.
#[derive(Debug, Serialize, Deserialize)]
pub struct HullReport {
    pub vertices: Vec<[f64; 2]>,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub perimeter: f64,
    pub area: f64,
    pub centroid: Option<[f64; 2]>,
    pub regular: bool,
    /// [min corner, max corner], absent for the empty hull.
    pub bounding_box: Option<[[f64; 2]; 2]>,
}

impl HullReport {
    pub fn from_polygon(poly: &ConvexPolygon) -> Self {
        Self {
            vertices: poly.vertices().iter().map(|p| [p.x, p.y]).collect(),
            num_vertices: poly.num_vertices(),
            num_edges: poly.num_edges(),
            perimeter: poly.perimeter(),
            area: poly.area(),
            centroid: poly.centroid().map(|c| [c.x, c.y]),
            regular: poly.is_regular(),
            bounding_box: poly
                .bounding_box()
                .map(|(lo, hi)| [[lo.x, lo.y], [hi.x, hi.y]]),
        }
    }
}

/// Read a JSON `[[x, y], ...]` point set.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading point set {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing point set {}", path.display()))?;
    Ok(pairs.iter().map(|&[x, y]| Point2::new(x, y)).collect())
}

/// Write an artifact, creating parent directories first.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_set_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0.0, 0.0], [0.0, 3.0], [4.0, 0.0]]").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], Point2::new(4.0, 0.0));
    }

    #[test]
    fn report_carries_all_properties() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 3.0),
            Point2::new(4.0, 0.0),
            Point2::new(1.0, 1.0), // interior, must vanish
        ];
        let report = HullReport::from_polygon(&ConvexPolygon::from_points(&pts));
        assert_eq!(report.num_vertices, 3);
        assert_eq!(report.num_edges, 3);
        assert!((report.area - 6.0).abs() < 1e-12);
        assert!((report.perimeter - 12.0).abs() < 1e-12);
        assert!(!report.regular);
        let bbox = report.bounding_box.unwrap();
        assert_eq!(bbox, [[0.0, 0.0], [4.0, 3.0]]);
    }

    #[test]
    fn write_artifact_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.json");
        write_artifact(&path, b"{}").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }
}
