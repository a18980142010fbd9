//! Configuration sections.

use serde::{Deserialize, Serialize};

use crate::core::OccupancyThresholds;
use crate::frontier::FinderConfig;

use super::defaults;

/// Frontier detection section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontierSection {
    /// Narrowest opening worth exploring (meters)
    #[serde(default = "defaults::robot_radius")]
    pub robot_radius: f32,

    /// Cluster-id pool size per call
    #[serde(default = "defaults::max_clusters")]
    pub max_clusters: usize,
}

impl Default for FrontierSection {
    fn default() -> Self {
        Self {
            robot_radius: defaults::robot_radius(),
            max_clusters: defaults::max_clusters(),
        }
    }
}

impl FrontierSection {
    /// Convert to FinderConfig
    pub fn to_finder_config(&self) -> FinderConfig {
        FinderConfig {
            robot_radius: self.robot_radius,
            max_clusters: self.max_clusters,
        }
    }
}

/// ROS occupancy value mapping section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancySection {
    /// Values `0..=free_threshold` are Free
    #[serde(default = "defaults::free_threshold")]
    pub free_threshold: i8,

    /// Values `>= occupied_threshold` are Occupied
    #[serde(default = "defaults::occupied_threshold")]
    pub occupied_threshold: i8,
}

impl Default for OccupancySection {
    fn default() -> Self {
        Self {
            free_threshold: defaults::free_threshold(),
            occupied_threshold: defaults::occupied_threshold(),
        }
    }
}

impl OccupancySection {
    /// Convert to OccupancyThresholds
    pub fn to_thresholds(&self) -> OccupancyThresholds {
        OccupancyThresholds {
            free_threshold: self.free_threshold,
            occupied_threshold: self.occupied_threshold,
        }
    }
}

/// SVG output section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Pixels per meter
    #[serde(default = "defaults::svg_scale")]
    pub svg_scale: f32,

    /// Padding around the map (pixels)
    #[serde(default = "defaults::svg_padding")]
    pub svg_padding: f32,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            svg_scale: defaults::svg_scale(),
            svg_padding: defaults::svg_padding(),
        }
    }
}
