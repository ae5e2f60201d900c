//! Reproducible random point clouds for tests and benches.
//!
//! Model
//! - All draws go through a single `StdRng` seeded with a caller-supplied
//!   `u64`, so every cloud is replayable from `(cfg, seed)`.
//! - Two shapes: uniform in a centered square (generic inputs, most points
//!   interior) and a jittered ring (adversarial: nearly every point ends up
//!   on the hull).

use super::point::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform-square sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Points are drawn from `[-half_extent, half_extent]²`.
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 128,
            half_extent: 1.0,
        }
    }
}

/// Uniform point cloud in the centered square.
pub fn draw_point_cloud(cfg: &CloudCfg, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cfg.count)
        .map(|_| {
            Point2::new(
                rng.gen_range(-cfg.half_extent..=cfg.half_extent),
                rng.gen_range(-cfg.half_extent..=cfg.half_extent),
            )
        })
        .collect()
}

/// Points on a circle of the given radius with small radial jitter
/// (±1% of the radius), in random angular order.
pub fn draw_point_ring(count: usize, radius: f64, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = radius * (1.0 + rng.gen_range(-0.01..=0.01));
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
