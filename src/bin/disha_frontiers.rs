//! Detect frontiers in a saved map.
//!
//! Usage:
//!   disha_frontiers --map maps/office.yaml
//!   disha_frontiers --grid snapshot.json --robot-radius 0.2 --svg frontiers.svg
//!   disha_frontiers --values occupancy.yaml --config configs/config.yaml
//!
//! Enable debug logging to see per-stage counts:
//!   RUST_LOG=debug disha_frontiers --map maps/office.yaml

use std::path::PathBuf;

use clap::Parser;

use disha_frontier::{
    DishaConfig, FrontierError, FrontierFinder, OccupancyGrid, Result, load_ros_map,
    render_frontiers, save_svg,
};

/// Frontier detection on a 2D occupancy grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ROS map_server YAML (PGM image alongside)
    #[arg(short, long, conflicts_with_all = ["grid", "values"])]
    map: Option<PathBuf>,

    /// Serialized OccupancyGrid (.yaml or .json)
    #[arg(short, long, conflicts_with = "values")]
    grid: Option<PathBuf>,

    /// Raw ROS occupancy values (.yaml or .json), classified with the
    /// configured occupancy thresholds
    #[arg(long)]
    values: Option<PathBuf>,

    /// Configuration file path (defaults to configs/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured robot radius (meters)
    #[arg(long)]
    robot_radius: Option<f32>,

    /// Write an SVG overlay to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the JSON report to this path instead of stdout
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("[{}] {}", e.code(), e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DishaConfig::load(path)?,
        None => DishaConfig::load_default()?,
    };
    if let Some(radius) = args.robot_radius {
        config.frontier.robot_radius = radius;
    }

    let grid = load_grid(args, &config)?;
    let view = grid.view()?;
    let counts = grid.counts();
    eprintln!(
        "Grid: {}x{} @ {}m ({} free, {} occupied, {} unknown; {}/{} explored)",
        view.width(),
        view.height(),
        view.resolution(),
        counts.free,
        counts.occupied,
        counts.unknown,
        counts.known(),
        counts.total()
    );

    let finder = FrontierFinder::new(config.to_finder_config())?;
    let result = finder.find(&view)?;

    eprintln!(
        "Frontiers: {} ({} clusters, {} too narrow{})",
        result.len(),
        result.clusters_found,
        result.clusters_discarded,
        if result.truncated { ", TRUNCATED" } else { "" }
    );
    for (i, wf) in result.weighted.iter().enumerate() {
        eprintln!(
            "  F{}: ({:.3}, {:.3}) heading {:.1}° weight {}",
            i + 1,
            wf.frontier.position.x,
            wf.frontier.position.y,
            wf.frontier.heading.to_degrees(),
            wf.weight
        );
    }

    if let Some(path) = &args.svg {
        let svg = render_frontiers(&view, &result, &config.svg_config())?;
        save_svg(path, &svg)?;
    }

    let report = serde_json::to_string_pretty(&result.report())?;
    match &args.json {
        Some(path) => {
            std::fs::write(path, report)?;
            log::info!("Wrote report to {}", path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}

fn load_grid(args: &Args, config: &DishaConfig) -> Result<OccupancyGrid> {
    match (&args.map, &args.grid, &args.values) {
        (Some(map), _, _) => load_ros_map(map),
        (None, Some(grid), _) => OccupancyGrid::load(grid),
        (None, None, Some(values)) => {
            OccupancyGrid::load_ros_values(values, &config.occupancy_thresholds())
        }
        (None, None, None) => Err(FrontierError::config(
            "no input: pass --map <ros_map.yaml>, --grid <grid.yaml|json> or --values <values.yaml|json>",
        )),
    }
}
