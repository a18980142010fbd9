//! Point and vector types for grid and world coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        GridCoord::new(self.x + dx, self.y + dy)
    }
}

/// World coordinates (meters, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };
}

/// Planar direction vector used to accumulate outward frontier headings.
///
/// Not normalized: a cell facing unknown space on two sides accumulates
/// two unit vectors before it is averaged.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Direction {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Direction {
    /// Zero vector
    pub const ZERO: Direction = Direction { x: 0.0, y: 0.0 };

    /// Create a new direction vector
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector along a grid offset (one of the 4 cardinal steps).
    #[inline]
    pub fn from_grid_step(dx: i32, dy: i32) -> Self {
        Self::new(dx as f32, dy as f32)
    }

    /// Angle of this vector (radians, CCW from +X).
    ///
    /// A zero vector has heading 0.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl Add for Direction {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Direction::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Direction {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Div<f32> for Direction {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Direction::new(self.x / scalar, self.y / scalar)
    }
}
