//! # Disha Frontier
//!
//! Frontier detection on 2D occupancy grids for autonomous exploration.
//!
//! Given a snapshot of a Free / Occupied / Unknown grid, Disha finds the
//! cells where mapped free space meets unexplored space, groups them into
//! connected clusters, drops clusters too narrow for the robot, and reduces
//! each survivor to a goal pose: the cluster centroid plus a heading that
//! points into the unknown.
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ ROS map / grid   │───►│ OccupancyGrid│───►│ GridView         │
//! │ (PGM+YAML, JSON) │    │ (owned)      │    │ (borrowed)       │
//! └──────────────────┘    └──────────────┘    └────────┬─────────┘
//!                                                      │
//!                                                      ▼
//!                                           ┌────────────────────┐
//!                                           │ FrontierFinder     │
//!                                           │ classify → segment │
//!                                           │ → reduce           │
//!                                           └────────┬───────────┘
//!                                                    │
//!                          ┌─────────────────────────┼──────────────┐
//!                          ▼                         ▼              ▼
//!                  Vec<WeightedFrontier>      FrontierLayer    FrontierReport
//!                  (goal poses)               (SVG overlay)    (JSON)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use disha_frontier::{DishaConfig, FrontierFinder, load_ros_map};
//!
//! let config = DishaConfig::load_default()?;
//! let grid = load_ros_map("maps/office.yaml")?;
//!
//! let finder = FrontierFinder::new(config.to_finder_config())?;
//! let result = finder.find(&grid.view()?)?;
//!
//! if result.truncated {
//!     log::warn!("Only the first {} clusters were considered", result.clusters_found);
//! }
//! for wf in &result.weighted {
//!     println!("goal ({:.2}, {:.2}) heading {:.2}",
//!         wf.frontier.position.x, wf.frontier.position.y, wf.frontier.heading);
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - Grid row 0 sits at the map origin; +X along a row, +Y across rows
//! - Frontier positions are cell-center world coordinates (meters)
//! - Headings are radians in `(-π, π]`, measured from +X toward +Y

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod io;

// Re-export main types
pub use crate::config::DishaConfig;
pub use crate::core::{CellState, Direction, GridCoord, OccupancyThresholds, WorldPoint};
pub use crate::error::{FrontierError, Result};
pub use crate::frontier::{
    FinderConfig, Frontier, FrontierFinder, FrontierLayer, FrontierReport, FrontierResult,
    WeightedFrontier, find_frontiers,
};
pub use crate::grid::{GridView, OccupancyGrid, load_ros_map};
pub use crate::io::{SvgConfig, render_frontiers, save_svg};
