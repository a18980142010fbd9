//! Core types for the Disha frontier library.
//!
//! - [`CellState`]: tri-state cell classification (Free / Occupied / Unknown)
//! - [`OccupancyThresholds`]: mapping from ROS occupancy values to [`CellState`]
//! - [`GridCoord`] and [`WorldPoint`]: coordinate types
//! - [`Direction`]: accumulation vector for outward frontier headings
//!
//! Coordinates follow the ROS map convention: grid row 0 sits at the map
//! origin, +X runs along a row (columns) and +Y across rows.

mod cell;
mod point;

pub use cell::{CellState, OccupancyThresholds, ROS_OCCUPIED};
pub use point::{Direction, GridCoord, WorldPoint};
