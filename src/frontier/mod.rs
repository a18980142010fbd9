//! Frontier detection for autonomous exploration.
//!
//! A frontier is a boundary between explored free space and unexplored
//! (unknown) space. Detection runs in three stages:
//!
//! ```text
//! GridView ──► classify_boundary ──► MarkBuffer (Seed / NotSeed)
//!                                         │
//!                                         ▼
//!                  segment_clusters (8-connected flood fill, bounded ids)
//!                                         │
//!                                         ▼
//!                  reduce_clusters (size filter, centroid, heading)
//!                                         │
//!                                         ▼
//!                               Vec<WeightedFrontier>
//! ```
//!
//! [`FrontierFinder`] wires the stages together. Each call owns its own
//! mark buffer and id pool, so concurrent calls on different grids share
//! nothing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use disha_frontier::frontier::{FinderConfig, FrontierFinder};
//!
//! let finder = FrontierFinder::new(FinderConfig::with_robot_radius(0.17))?;
//! let result = finder.find(&grid.view()?)?;
//!
//! for wf in &result.weighted {
//!     println!("({:.2}, {:.2}) heading {:.2} weight {}",
//!         wf.frontier.position.x, wf.frontier.position.y,
//!         wf.frontier.heading, wf.weight);
//! }
//! ```

mod boundary;
mod finder;
mod layer;
mod reduce;
mod segment;
mod types;

pub use boundary::{classify_boundary, is_frontier_seed};
pub use finder::{
    DEFAULT_MAX_CLUSTERS, DEFAULT_ROBOT_RADIUS, FinderConfig, FrontierFinder, FrontierReport,
    FrontierResult, find_frontiers,
};
pub use layer::{FrontierLayer, LayerCell};
pub use reduce::{ReducerConfig, Reduction, reduce_cluster, reduce_clusters};
pub use segment::{Segmentation, frontier_point, segment_clusters};
pub use types::{
    Cluster, ClusterId, ClusterIdPool, Frontier, FrontierPoint, Mark, MarkBuffer,
    WeightedFrontier,
};
