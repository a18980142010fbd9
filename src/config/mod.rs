//! Configuration loading for Disha.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use disha_frontier::config::DishaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = DishaConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let finder_config = config.to_finder_config();
//! let thresholds = config.occupancy_thresholds();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`FrontierSection`] | Robot radius, cluster-id pool size |
//! | [`OccupancySection`] | ROS occupancy value thresholds |
//! | [`OutputSection`] | SVG scale and padding |
//!
//! ## Example YAML
//!
//! ```yaml
//! frontier:
//!   robot_radius: 0.17    # meters
//!   max_clusters: 255
//! occupancy:
//!   free_threshold: 0     # 0..=0 is Free
//!   occupied_threshold: 1 # 1..=100 is Occupied
//! output:
//!   svg_scale: 50.0       # pixels per meter
//!   svg_padding: 20.0
//! ```

mod defaults;
mod disha;
mod sections;

pub use disha::{DEFAULT_CONFIG_PATH, DishaConfig};
pub use sections::{FrontierSection, OccupancySection, OutputSection};
