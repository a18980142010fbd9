//! Frontier reduction: size filtering, centroid and heading per cluster.

use crate::core::{Direction, WorldPoint};
use crate::error::{FrontierError, Result};
use crate::grid::GridView;

use super::types::{Cluster, Frontier, WeightedFrontier};

/// Parameters for [`reduce_clusters`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReducerConfig {
    /// Narrowest opening the robot can use (meters, > 0)
    pub robot_radius: f32,
    /// Meters per cell
    pub resolution: f32,
}

impl ReducerConfig {
    /// Reducer settings for a grid.
    pub fn for_view(robot_radius: f32, view: &GridView<'_>) -> Self {
        Self {
            robot_radius,
            resolution: view.resolution(),
        }
    }

    /// Physical extent of a cluster of `cells` cells (meters).
    #[inline]
    pub fn extent(&self, cells: usize) -> f32 {
        cells as f32 * self.resolution
    }

    /// Can the robot pass an opening of `cells` cells?
    #[inline]
    pub fn is_passable(&self, cells: usize) -> bool {
        self.extent(cells) >= self.robot_radius
    }

    /// Reject non-positive values and a resolution that differs from the grid's.
    pub fn validate(&self, view: &GridView<'_>) -> Result<()> {
        if !self.robot_radius.is_finite() || self.robot_radius <= 0.0 {
            return Err(FrontierError::config(format!(
                "robot_radius must be > 0, got {}",
                self.robot_radius
            )));
        }
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(FrontierError::config(format!(
                "resolution must be > 0, got {}",
                self.resolution
            )));
        }
        if self.resolution != view.resolution() {
            return Err(FrontierError::config(format!(
                "reducer resolution {} does not match grid resolution {}",
                self.resolution,
                view.resolution()
            )));
        }
        Ok(())
    }
}

/// Output of [`reduce_clusters`].
#[derive(Clone, Debug, Default)]
pub struct Reduction {
    /// Surviving frontiers in cluster discovery order
    pub frontiers: Vec<WeightedFrontier>,
    /// Clusters dropped as too narrow
    pub discarded: usize,
}

/// Reduce clusters to weighted frontiers, dropping those too narrow to pass.
///
/// Output keeps the input order; no ranking is applied.
pub fn reduce_clusters(
    view: &GridView<'_>,
    clusters: &[Cluster],
    config: &ReducerConfig,
) -> Result<Reduction> {
    config.validate(view)?;

    let mut reduction = Reduction::default();

    for cluster in clusters {
        match reduce_cluster(view, cluster, config)? {
            Some(frontier) => reduction.frontiers.push(frontier),
            None => {
                log::trace!(
                    "Cluster {} discarded: {:.3}m < robot radius {:.3}m",
                    cluster.id.get(),
                    config.extent(cluster.len()),
                    config.robot_radius
                );
                reduction.discarded += 1;
            }
        }
    }

    Ok(reduction)
}

/// Reduce one cluster, or `None` when it is too narrow (or empty).
pub fn reduce_cluster(
    view: &GridView<'_>,
    cluster: &Cluster,
    config: &ReducerConfig,
) -> Result<Option<WeightedFrontier>> {
    config.validate(view)?;
    let count = cluster.len();
    if count == 0 || !config.is_passable(count) {
        return Ok(None);
    }

    // Accumulate in f64 so large clusters keep their precision
    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut direction = Direction::ZERO;

    for point in &cluster.points {
        let center = view.cell_center_to_world(point.index);
        sum_x += center.x as f64;
        sum_y += center.y as f64;
        direction += point.orientation()?;
    }

    let n = count as f64;
    let position = WorldPoint::new((sum_x / n) as f32, (sum_y / n) as f32);
    let mean_direction = direction / count as f32;

    Ok(Some(WeightedFrontier {
        frontier: Frontier {
            position,
            heading: mean_direction.heading(),
        },
        weight: count,
    }))
}
