//! Cell classification for the occupancy grid.
//!
//! Frontier detection only cares about three states. Richer maps (ROS
//! `OccupancyGrid` probabilities, map_server images) are collapsed into
//! [`CellState`] when a snapshot is taken.

use serde::{Deserialize, Serialize};

use crate::error::{FrontierError, Result};

/// Highest ROS occupancy value (certainly occupied).
pub const ROS_OCCUPIED: i8 = 100;

/// Tri-state cell classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Cell has never been observed
    #[default]
    Unknown = 0,

    /// Observed and traversable
    Free = 1,

    /// Observed obstacle
    Occupied = 2,
}

impl CellState {
    /// Convert a ROS occupancy value using the given thresholds.
    #[inline]
    pub fn from_ros_value(value: i8, thresholds: &OccupancyThresholds) -> Self {
        if value < 0 {
            CellState::Unknown
        } else if value <= thresholds.free_threshold {
            CellState::Free
        } else if value >= thresholds.occupied_threshold {
            CellState::Occupied
        } else {
            CellState::Unknown
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Unknown => '?',
            CellState::Free => '.',
            CellState::Occupied => '#',
        }
    }

    /// Parse the debugging character back into a state.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(CellState::Unknown),
            '.' => Some(CellState::Free),
            '#' => Some(CellState::Occupied),
            _ => None,
        }
    }
}

/// Thresholds mapping ROS occupancy values (`0..=100`) onto [`CellState`].
///
/// Values `0..=free_threshold` are Free, values `>= occupied_threshold` are
/// Occupied, negative values and anything in between are Unknown. The
/// defaults treat only exact `0` as Free and every positive value as
/// Occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyThresholds {
    /// Highest value still considered free.
    pub free_threshold: i8,
    /// Lowest value considered occupied.
    pub occupied_threshold: i8,
}

impl Default for OccupancyThresholds {
    fn default() -> Self {
        Self {
            free_threshold: 0,
            occupied_threshold: 1,
        }
    }
}

impl OccupancyThresholds {
    /// Check the thresholds form a valid partition of `0..=100`.
    pub fn validate(&self) -> Result<()> {
        if self.free_threshold < 0 {
            return Err(FrontierError::config(format!(
                "free_threshold must be >= 0, got {}",
                self.free_threshold
            )));
        }
        if self.occupied_threshold > ROS_OCCUPIED {
            return Err(FrontierError::config(format!(
                "occupied_threshold must be <= 100, got {}",
                self.occupied_threshold
            )));
        }
        if self.free_threshold >= self.occupied_threshold {
            return Err(FrontierError::config(format!(
                "free_threshold ({}) must be below occupied_threshold ({})",
                self.free_threshold, self.occupied_threshold
            )));
        }
        Ok(())
    }
}
