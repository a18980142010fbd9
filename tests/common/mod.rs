//! Test utilities for frontier detection.
//!
//! Builders for ASCII grids, partially explored rooms and ROS map files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use disha_frontier::{CellState, OccupancyGrid, WorldPoint};

/// Build a grid from ASCII rows ('.' free, '#' occupied, '?' unknown), row 0 first.
pub fn ascii_grid(rows: &[&str], resolution: f32) -> OccupancyGrid {
    OccupancyGrid::from_ascii(rows, resolution, WorldPoint::ZERO).unwrap()
}

/// Walled room whose cells with `x >= explored_cols` are still unknown.
///
/// The wall ring is only drawn where it has been observed.
pub fn partially_explored_room(
    width: usize,
    height: usize,
    explored_cols: usize,
    resolution: f32,
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::unknown(width, height, resolution, WorldPoint::ZERO);
    for y in 0..height {
        for x in 0..explored_cols.min(width) {
            let wall = x == 0 || y == 0 || y == height - 1;
            grid.cells[y * width + x] = if wall {
                CellState::Occupied
            } else {
                CellState::Free
            };
        }
    }
    grid
}

/// Fully known grid of one state.
pub fn uniform_grid(width: usize, height: usize, state: CellState) -> OccupancyGrid {
    let mut grid = OccupancyGrid::unknown(width, height, 0.05, WorldPoint::ZERO);
    grid.cells.fill(state);
    grid
}

/// Write a binary PGM (P5) image. `pixels` is row-major, top row first.
pub fn write_pgm(path: &Path, width: usize, height: usize, pixels: &[u8]) {
    assert_eq!(pixels.len(), width * height);
    let mut bytes = format!("P5\n{} {}\n255\n", width, height).into_bytes();
    bytes.extend_from_slice(pixels);
    std::fs::write(path, bytes).unwrap();
}

/// Write a ROS map_server pair (`map.pgm` + `map.yaml`) into `dir`.
pub fn write_ros_map(
    dir: &Path,
    width: usize,
    height: usize,
    pixels: &[u8],
    resolution: f32,
    origin: [f32; 2],
) -> PathBuf {
    write_pgm(&dir.join("map.pgm"), width, height, pixels);
    let yaml = format!(
        "image: map.pgm\nresolution: {}\norigin: [{}, {}, 0.0]\nnegate: 0\noccupied_thresh: 0.65\nfree_thresh: 0.196\n",
        resolution, origin[0], origin[1]
    );
    let yaml_path = dir.join("map.yaml");
    std::fs::write(&yaml_path, yaml).unwrap();
    yaml_path
}
