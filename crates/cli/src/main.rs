use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hull2d::hull::rand::{draw_point_cloud, CloudCfg};
use hull2d::hull::svg;
use hull2d::ConvexPolygon;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{read_points, write_artifact, HullReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull construction and property reports")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull of a JSON point set and write a property report
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Render the hull outline of a JSON point set as an SVG file
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "#000000")]
        stroke: String,
    },
    /// Emit a reproducible random point cloud as a JSON point set
    Sample {
        #[arg(long, default_value_t = 128)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out } => hull(&input, &out),
        Action::Render { input, out, stroke } => render(&input, &out, &stroke),
        Action::Sample { count, seed, out } => sample(count, seed, &out),
    }
}

fn hull(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "hull");
    let pts = read_points(input)?;
    let poly = ConvexPolygon::from_points(&pts);
    tracing::info!(
        points = pts.len(),
        vertices = poly.num_vertices(),
        "hull_built"
    );
    let report = HullReport::from_polygon(&poly);
    write_artifact(out, &serde_json::to_vec_pretty(&report)?)
}

fn render(input: &Path, out: &Path, stroke: &str) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), stroke, "render");
    let pts = read_points(input)?;
    let poly = ConvexPolygon::from_points(&pts);
    match svg::polygon_outline(&poly, stroke) {
        Some(doc) => write_artifact(out, doc.as_bytes()),
        None => bail!(
            "point set in {} has a degenerate bounding box; nothing to render",
            input.display()
        ),
    }
}

fn sample(count: usize, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(count, seed, out = %out.display(), "sample");
    let cfg = CloudCfg {
        count,
        ..CloudCfg::default()
    };
    let pts = draw_point_cloud(&cfg, seed);
    let pairs: Vec<[f64; 2]> = pts.iter().map(|p| [p.x, p.y]).collect();
    write_artifact(out, &serde_json::to_vec_pretty(&pairs)?)
}
