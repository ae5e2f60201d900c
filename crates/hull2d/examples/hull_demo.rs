//! Print hull properties for a random point cloud.
//!
//! Usage:
//!   cargo run -p hull2d --example hull_demo -- [count] [seed]

use hull2d::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let cfg = CloudCfg {
        count,
        half_extent: 10.0,
    };
    let pts = draw_point_cloud(&cfg, seed);
    let hull = ConvexPolygon::from_points(&pts);

    println!("input points:  {}", pts.len());
    println!("hull vertices: {}", hull.num_vertices());
    println!("hull edges:    {}", hull.num_edges());
    println!("perimeter:     {:.6}", hull.perimeter());
    println!("area:          {:.6}", hull.area());
    if let Some(c) = hull.centroid() {
        println!("centroid:      {c}");
    }
    if let Some((lo, hi)) = hull.bounding_box() {
        println!("bbox:          {lo} .. {hi}");
    }
}
