//! Occupancy grid snapshots and read-only access.
//!
//! ## Key Components
//!
//! - [`GridView`]: borrowed, validated view over a flat cell array with
//!   bounds-safe neighbor lookup and cell/world conversion
//! - [`OccupancyGrid`]: owned snapshot (serde), built from ROS occupancy
//!   values ([`RosGridMessage`]), ASCII rows or a serialized file
//! - [`ros_map`]: loader for ROS map_server PGM+YAML maps
//!
//! ## Layout
//!
//! ```text
//!   row H-1 │ ...                 │
//!       ... │                     │
//!   row 1   │ W   W+1   ...  2W-1 │
//!   row 0   │ 0   1     ...  W-1  │  ← origin at the corner of cell 0
//!           └─────────────────────┘
//!             +X →
//! ```

mod occupancy;
pub mod ros_map;
mod view;

pub use occupancy::{CellCounts, OccupancyGrid, RosGridMessage};
pub use ros_map::{RosMapMetadata, load_ros_map};
pub use view::{CARDINAL_OFFSETS, EIGHT_OFFSETS, GridView, Neighbor};
