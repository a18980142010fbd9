//! Frontier finder: the full classify → segment → reduce pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{FrontierError, Result};
use crate::grid::GridView;

use super::boundary::classify_boundary;
use super::reduce::{ReducerConfig, reduce_clusters};
use super::segment::segment_clusters;
use super::types::{Frontier, MarkBuffer, WeightedFrontier};

/// Default robot radius (meters).
pub const DEFAULT_ROBOT_RADIUS: f32 = 0.17;

/// Default size of the per-call cluster-id pool.
pub const DEFAULT_MAX_CLUSTERS: usize = 255;

/// Configuration for frontier detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Narrowest opening worth exploring (meters, > 0)
    pub robot_radius: f32,
    /// Maximum clusters per call; more seeds than this truncates the result
    pub max_clusters: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            robot_radius: DEFAULT_ROBOT_RADIUS,
            max_clusters: DEFAULT_MAX_CLUSTERS,
        }
    }
}

impl FinderConfig {
    /// Create a config with the default cluster limit.
    pub fn with_robot_radius(robot_radius: f32) -> Self {
        Self {
            robot_radius,
            ..Default::default()
        }
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.robot_radius.is_finite() || self.robot_radius <= 0.0 {
            return Err(FrontierError::config(format!(
                "robot_radius must be > 0, got {}",
                self.robot_radius
            )));
        }
        if self.max_clusters == 0 {
            return Err(FrontierError::config("max_clusters must be at least 1"));
        }
        Ok(())
    }
}

/// Result of one frontier computation.
#[derive(Clone, Debug)]
pub struct FrontierResult {
    /// Frontiers in cluster discovery order
    pub weighted: Vec<WeightedFrontier>,
    /// True if the cluster-id pool ran out; `weighted` covers only the clusters found
    pub truncated: bool,
    /// Clusters found before size filtering
    pub clusters_found: usize,
    /// Clusters dropped as narrower than the robot
    pub clusters_discarded: usize,
    /// Final per-cell marks, for debug overlays
    pub marks: MarkBuffer,
}

impl FrontierResult {
    /// Frontiers without weights.
    pub fn frontiers(&self) -> Vec<Frontier> {
        self.weighted.iter().map(|wf| wf.frontier).collect()
    }

    /// Number of frontiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.weighted.len()
    }

    /// True if no frontier survived.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weighted.is_empty()
    }

    /// Serializable summary for downstream consumers.
    pub fn report(&self) -> FrontierReport {
        FrontierReport {
            frontiers: self.weighted.clone(),
            truncated: self.truncated,
            clusters_found: self.clusters_found,
            clusters_discarded: self.clusters_discarded,
            frontier_cells: self.marks.frontier_cell_count(),
        }
    }
}

/// Serializable frontier summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontierReport {
    /// Weighted frontiers in discovery order
    pub frontiers: Vec<WeightedFrontier>,
    /// Cluster-id pool ran out
    pub truncated: bool,
    /// Clusters found before size filtering
    pub clusters_found: usize,
    /// Clusters dropped as too narrow
    pub clusters_discarded: usize,
    /// Total frontier cells (assigned or not)
    pub frontier_cells: usize,
}

/// Frontier detector for exploration.
///
/// Stateless between calls: every [`find`](Self::find) allocates its own mark
/// buffer and cluster-id pool, so snapshots can be fed in any order.
#[derive(Clone, Debug)]
pub struct FrontierFinder {
    config: FinderConfig,
}

impl FrontierFinder {
    /// Create a finder, validating the configuration.
    pub fn new(config: FinderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Detect frontiers in one grid snapshot.
    pub fn find(&self, view: &GridView<'_>) -> Result<FrontierResult> {
        // Step 1: Mark frontier seeds
        let marks = classify_boundary(view);
        let seeds = marks.seed_count();

        // Step 2: Group seeds into clusters
        let segmentation = segment_clusters(view, marks, self.config.max_clusters)?;

        // Step 3: Filter by size and reduce to centroid + heading
        let reducer = ReducerConfig::for_view(self.config.robot_radius, view);
        let reduction = reduce_clusters(view, &segmentation.clusters, &reducer)?;

        log::debug!(
            "Found {} frontiers from {} clusters ({} seeds, {} discarded{})",
            reduction.frontiers.len(),
            segmentation.clusters.len(),
            seeds,
            reduction.discarded,
            if segmentation.truncated {
                ", truncated"
            } else {
                ""
            }
        );

        Ok(FrontierResult {
            weighted: reduction.frontiers,
            truncated: segmentation.truncated,
            clusters_found: segmentation.clusters.len(),
            clusters_discarded: reduction.discarded,
            marks: segmentation.marks,
        })
    }
}

/// One-shot helper: validate `config` and run the finder once.
pub fn find_frontiers(view: &GridView<'_>, config: &FinderConfig) -> Result<FrontierResult> {
    FrontierFinder::new(config.clone())?.find(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;
    use crate::grid::OccupancyGrid;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default_config() {
        let config = FinderConfig::default();
        assert_eq!(config.robot_radius, 0.17);
        assert_eq!(config.max_clusters, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            FrontierFinder::new(FinderConfig::with_robot_radius(0.0)),
            Err(FrontierError::Configuration(_))
        ));
        assert!(FrontierFinder::new(FinderConfig::with_robot_radius(-0.3)).is_err());
        assert!(
            FrontierFinder::new(FinderConfig {
                robot_radius: 0.2,
                max_clusters: 0,
            })
            .is_err()
        );
    }

    #[test]
    fn test_interior_row_scenario() {
        // Unknown / Free / Free / Free / Occupied on the interior row
        let grid = OccupancyGrid::from_ascii(
            &["#####", "?...#", "#####"],
            1.0,
            WorldPoint::ZERO,
        )
        .unwrap();
        let finder = FrontierFinder::new(FinderConfig::with_robot_radius(0.5)).unwrap();
        let result = finder.find(&grid.view().unwrap()).unwrap();

        assert_eq!(result.len(), 1);
        assert!(!result.truncated);
        let wf = result.weighted[0];
        assert_eq!(wf.weight, 1);
        assert_relative_eq!(wf.frontier.position.x, 1.5);
        assert_relative_eq!(wf.frontier.position.y, 1.5);
        // Unknown lies to the west
        assert_relative_eq!(wf.frontier.heading.abs(), std::f32::consts::PI);
    }

    #[test]
    fn test_single_row_scenario_is_empty() {
        let grid = OccupancyGrid::from_ascii(&["?...#"], 1.0, WorldPoint::ZERO).unwrap();
        let result = find_frontiers(&grid.view().unwrap(), &FinderConfig::with_robot_radius(0.5))
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.clusters_found, 0);
    }

    #[test]
    fn test_report_counts() {
        let grid = OccupancyGrid::from_ascii(
            &["#######", "#?????#", "#.....#", "#..#..#", "#######"],
            0.1,
            WorldPoint::ZERO,
        )
        .unwrap();
        let finder = FrontierFinder::new(FinderConfig::with_robot_radius(0.3)).unwrap();
        let result = finder.find(&grid.view().unwrap()).unwrap();

        let report = result.report();
        assert_eq!(report.frontiers.len(), 1);
        assert_eq!(report.frontier_cells, 5);
        assert_eq!(report.clusters_found, 1);
        assert_eq!(report.clusters_discarded, 0);
        // Unknown row is at lower y than the free strip
        assert_relative_eq!(report.frontiers[0].frontier.heading, -FRAC_PI_2);
        assert_eq!(result.frontiers()[0], report.frontiers[0].frontier);
    }
}
