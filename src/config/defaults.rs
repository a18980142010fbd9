//! Default value functions for serde deserialization.

use crate::core::OccupancyThresholds;
use crate::frontier::{DEFAULT_MAX_CLUSTERS, DEFAULT_ROBOT_RADIUS};

pub fn robot_radius() -> f32 {
    DEFAULT_ROBOT_RADIUS
}

pub fn max_clusters() -> usize {
    DEFAULT_MAX_CLUSTERS
}

pub fn free_threshold() -> i8 {
    OccupancyThresholds::default().free_threshold
}

pub fn occupied_threshold() -> i8 {
    OccupancyThresholds::default().occupied_threshold
}

pub fn svg_scale() -> f32 {
    50.0
}

pub fn svg_padding() -> f32 {
    20.0
}
