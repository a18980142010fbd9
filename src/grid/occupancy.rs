//! Owned occupancy grid snapshot.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{CellState, OccupancyThresholds, WorldPoint};
use crate::error::{FrontierError, Result};

use super::view::GridView;

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Unknown cells
    pub unknown: usize,
    /// Free cells
    pub free: usize,
    /// Occupied cells
    pub occupied: usize,
}

impl CellCounts {
    /// Total known cells.
    pub fn known(&self) -> usize {
        self.free + self.occupied
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}

/// Raw ROS `OccupancyGrid` message data as stored on disk.
///
/// `data` holds row-major occupancy values: `-1` unknown, `0..=100` otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosGridMessage {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Meters per cell
    pub resolution: f32,
    /// World coordinates of the corner of cell (0, 0)
    #[serde(default)]
    pub origin: WorldPoint,
    /// Row-major occupancy values
    pub data: Vec<i8>,
}

/// An owned grid snapshot: dimensions, resolution, origin and row-major cells.
///
/// Serializes to YAML/JSON so snapshots can be stored next to test scenarios
/// and fed to the CLI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Meters per cell
    pub resolution: f32,
    /// World coordinates of the corner of cell (0, 0)
    #[serde(default)]
    pub origin: WorldPoint,
    /// Row-major cell states (`width * height` entries)
    pub cells: Vec<CellState>,
}

impl OccupancyGrid {
    /// Create a grid filled with `Unknown`.
    pub fn unknown(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> Self {
        Self {
            width,
            height,
            resolution,
            origin,
            cells: vec![CellState::Unknown; width * height],
        }
    }

    /// Build from ROS `OccupancyGrid` data (`-1` unknown, `0..=100` occupancy).
    pub fn from_ros_values(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        data: &[i8],
        thresholds: &OccupancyThresholds,
    ) -> Result<Self> {
        thresholds.validate()?;
        let grid = Self {
            width,
            height,
            resolution,
            origin,
            cells: data
                .iter()
                .map(|&v| CellState::from_ros_value(v, thresholds))
                .collect(),
        };
        // Geometry is checked by the view
        grid.view()?;
        Ok(grid)
    }

    /// Load a serialized [`RosGridMessage`] and classify it with `thresholds`.
    ///
    /// `.json` files are read as JSON, anything else as YAML.
    pub fn load_ros_values(path: &Path, thresholds: &OccupancyThresholds) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let msg: RosGridMessage = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };
        Self::from_ros_values(
            msg.width,
            msg.height,
            msg.resolution,
            msg.origin,
            &msg.data,
            thresholds,
        )
    }

    /// Parse rows of `?`, `.` and `#` (row 0 first).
    ///
    /// Handy for tests and small hand-made maps.
    pub fn from_ascii(rows: &[&str], resolution: f32, origin: WorldPoint) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);

        for (row_idx, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(FrontierError::config(format!(
                    "row {} has {} cells, expected {}",
                    row_idx,
                    row.chars().count(),
                    width
                )));
            }
            for c in row.chars() {
                let state = CellState::from_char(c).ok_or_else(|| {
                    FrontierError::config(format!("invalid cell character {:?} in row {}", c, row_idx))
                })?;
                cells.push(state);
            }
        }

        let grid = Self {
            width,
            height,
            resolution,
            origin,
            cells,
        };
        grid.view()?;
        Ok(grid)
    }

    /// Load a serialized snapshot; `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let grid: OccupancyGrid = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };
        grid.view()?;
        Ok(grid)
    }

    /// Validated read-only view over this snapshot.
    pub fn view(&self) -> Result<GridView<'_>> {
        GridView::new(
            self.width,
            self.height,
            self.resolution,
            self.origin,
            &self.cells,
        )
    }

    /// Count cells by state.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell {
                CellState::Unknown => counts.unknown += 1,
                CellState::Free => counts.free += 1,
                CellState::Occupied => counts.occupied += 1,
            }
        }
        counts
    }

    /// Render as rows of `?`, `.` and `#` (row 0 first).
    pub fn to_ascii(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.as_char()).collect())
            .collect()
    }
}
