//! Map loader for PGM+YAML format (ROS map_server standard)
//!
//! Produces an [`OccupancyGrid`] snapshot using the map_server "trinary"
//! interpretation: each pixel becomes Free, Occupied or Unknown depending on
//! its occupancy probability and the thresholds in the YAML file.

use image::GrayImage;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{CellState, WorldPoint};
use crate::error::{FrontierError, Result};

use super::occupancy::OccupancyGrid;

/// Map metadata from YAML file (ROS standard format)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosMapMetadata {
    /// PGM image filename (relative to YAML file)
    pub image: String,

    /// Map resolution in meters per pixel
    pub resolution: f32,

    /// Origin of map [x, y, yaw] - world coordinates of bottom-left pixel
    pub origin: [f32; 3],

    /// Invert pixel semantics (white = occupied)
    #[serde(default)]
    pub negate: i32,

    /// Pixels with occupancy probability above this are occupied
    #[serde(default = "default_occupied_thresh")]
    pub occupied_thresh: f32,

    /// Pixels with occupancy probability below this are free
    #[serde(default = "default_free_thresh")]
    pub free_thresh: f32,
}

fn default_occupied_thresh() -> f32 {
    0.65
}

fn default_free_thresh() -> f32 {
    0.196
}

impl RosMapMetadata {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let metadata: RosMapMetadata = serde_yaml::from_str(yaml)?;
        metadata.validate()?;
        Ok(metadata)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.free_thresh)
            || !(0.0..=1.0).contains(&self.occupied_thresh)
            || self.free_thresh >= self.occupied_thresh
        {
            return Err(FrontierError::config(format!(
                "map thresholds must satisfy 0 <= free_thresh ({}) < occupied_thresh ({}) <= 1",
                self.free_thresh, self.occupied_thresh
            )));
        }
        if self.origin[2] != 0.0 {
            log::warn!(
                "Map yaw {:.3} rad ignored; grid is treated as axis-aligned",
                self.origin[2]
            );
        }
        Ok(())
    }

    /// Classify one pixel value.
    #[inline]
    pub fn classify_pixel(&self, value: u8) -> CellState {
        let v = value as f32 / 255.0;
        let p = if self.negate != 0 { v } else { 1.0 - v };

        if p > self.occupied_thresh {
            CellState::Occupied
        } else if p < self.free_thresh {
            CellState::Free
        } else {
            CellState::Unknown
        }
    }
}

/// Load map from ROS-standard YAML + PGM files
pub fn load_ros_map<P: AsRef<Path>>(yaml_path: P) -> Result<OccupancyGrid> {
    let yaml_path = yaml_path.as_ref();

    let yaml_content = std::fs::read_to_string(yaml_path)?;
    let metadata = RosMapMetadata::from_yaml(&yaml_content)?;

    // Determine base directory for relative paths
    let yaml_dir = yaml_path.parent().unwrap_or(Path::new("."));
    let pgm_path = yaml_dir.join(&metadata.image);

    let img = image::open(&pgm_path)
        .map_err(|e| {
            FrontierError::Image(format!(
                "Failed to load map image {}: {}",
                pgm_path.display(),
                e
            ))
        })?
        .into_luma8();

    log::debug!(
        "Loaded map image {} ({}x{} px)",
        pgm_path.display(),
        img.width(),
        img.height()
    );

    grid_from_image(&img, &metadata)
}

/// Convert a grayscale map image into a grid snapshot.
///
/// Image row 0 is the top of the map, grid row 0 is the bottom (origin),
/// so rows are flipped.
pub fn grid_from_image(img: &GrayImage, metadata: &RosMapMetadata) -> Result<OccupancyGrid> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut cells = Vec::with_capacity(width * height);

    for row in 0..height {
        let py = (height - 1 - row) as u32;
        for px in 0..width as u32 {
            cells.push(metadata.classify_pixel(img.get_pixel(px, py).0[0]));
        }
    }

    let grid = OccupancyGrid {
        width,
        height,
        resolution: metadata.resolution,
        origin: WorldPoint::new(metadata.origin[0], metadata.origin[1]),
        cells,
    };
    grid.view()?;
    Ok(grid)
}
