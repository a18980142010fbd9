//! Read-only accessor over a flat, row-major cell array.
//!
//! Index `i` maps to column `i % width` and row `i / width`. Neighbor
//! lookups work in (column, row) space, so the last cell of a row is never
//! adjacent to the first cell of the next one.

use crate::core::{CellState, GridCoord, WorldPoint};
use crate::error::{FrontierError, Result};

/// Cardinal steps (N, E, S, W) as (dx, dy).
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// All 8 steps including diagonals, as (dx, dy).
pub const EIGHT_OFFSETS: [(i32, i32); 8] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
];

/// A neighboring cell together with the step that reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    /// Flat index of the neighbor
    pub index: usize,
    /// Column step from the source cell
    pub dx: i32,
    /// Row step from the source cell
    pub dy: i32,
}

/// Immutable view of one occupancy grid snapshot.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    width: usize,
    height: usize,
    resolution: f32,
    origin: WorldPoint,
    cells: &'a [CellState],
}

impl<'a> GridView<'a> {
    /// Create a view, validating geometry.
    ///
    /// Fails with [`FrontierError::Configuration`] when `width * height` does
    /// not match the cell count or the resolution is not a positive number.
    pub fn new(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        cells: &'a [CellState],
    ) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            FrontierError::config(format!("grid size {}x{} overflows", width, height))
        })?;
        if expected != cells.len() {
            return Err(FrontierError::config(format!(
                "grid is {}x{} ({} cells) but {} cells were given",
                width,
                height,
                expected,
                cells.len()
            )));
        }
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(FrontierError::config(format!(
                "resolution must be > 0, got {}",
                resolution
            )));
        }
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(FrontierError::config(format!(
                "origin must be finite, got ({}, {})",
                origin.x, origin.y
            )));
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(FrontierError::config(format!(
                "grid dimensions {}x{} exceed the addressable range",
                width, height
            )));
        }

        Ok(Self {
            width,
            height,
            resolution,
            origin,
            cells,
        })
    }

    // === Basic Properties ===

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per cell.
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// World coordinates of the corner of cell (0, 0).
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a 0-cell grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &'a [CellState] {
        self.cells
    }

    // === Classification ===

    /// State of the cell at `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    pub fn classify(&self, index: usize) -> CellState {
        self.cells[index]
    }

    /// True if the cell lies on the outermost ring of the grid.
    #[inline]
    pub fn is_border(&self, index: usize) -> bool {
        let coord = self.index_to_coord(index);
        coord.x == 0
            || coord.y == 0
            || coord.x as usize == self.width - 1
            || coord.y as usize == self.height - 1
    }

    // === Coordinate Conversion ===

    /// Column/row of a flat index.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        debug_assert!(index < self.cells.len());
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Flat index of a column/row, or `None` when outside the grid.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// World position of the center of the cell at `index`.
    #[inline]
    pub fn cell_center_to_world(&self, index: usize) -> WorldPoint {
        let coord = self.index_to_coord(index);
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Index of the cell containing a world point, or `None` outside the map.
    pub fn world_to_grid(&self, point: WorldPoint) -> Option<usize> {
        let x = ((point.x - self.origin.x) / self.resolution).floor();
        let y = ((point.y - self.origin.y) / self.resolution).floor();
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        if x >= self.width as f32 || y >= self.height as f32 {
            return None;
        }
        self.coord_to_index(GridCoord::new(x as i32, y as i32))
    }

    // === Neighborhoods ===

    /// Valid cardinal (N/E/S/W) neighbors with their steps.
    #[inline]
    pub fn cardinal_steps(&self, index: usize) -> impl Iterator<Item = Neighbor> + '_ {
        self.neighbors_with(index, &CARDINAL_OFFSETS)
    }

    /// Valid 8-connected neighbors with their steps.
    #[inline]
    pub fn eight_steps(&self, index: usize) -> impl Iterator<Item = Neighbor> + '_ {
        self.neighbors_with(index, &EIGHT_OFFSETS)
    }

    /// Up to 4 valid cardinal neighbor indices.
    #[inline]
    pub fn cardinal_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.cardinal_steps(index).map(|n| n.index)
    }

    /// Up to 8 valid neighbor indices (cardinal and diagonal).
    #[inline]
    pub fn eight_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.eight_steps(index).map(|n| n.index)
    }

    fn neighbors_with(
        &self,
        index: usize,
        offsets: &'static [(i32, i32)],
    ) -> impl Iterator<Item = Neighbor> + '_ {
        let coord = self.index_to_coord(index);
        offsets.iter().filter_map(move |&(dx, dy)| {
            self.coord_to_index(coord.offset(dx, dy))
                .map(|index| Neighbor { index, dx, dy })
        })
    }
}
