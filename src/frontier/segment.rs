//! Cluster segmentation: flood-fill frontier seeds into connected regions.
//!
//! # Algorithm
//!
//! 1. Scan cells in row-major order
//! 2. On an unassigned seed, take a fresh id from the bounded pool and
//!    flood-fill over **8-connected** seeds with an explicit queue
//! 3. For each member, sum unit vectors toward its **cardinal** Unknown
//!    neighbors (the same adjacency the classifier used to seed it)
//!
//! When the pool runs dry while seeds remain unassigned, segmentation stops
//! and reports a truncated result. The clusters found so far stay valid.

use std::collections::VecDeque;

use crate::core::{CellState, Direction};
use crate::error::{FrontierError, Result};
use crate::grid::GridView;

use super::types::{Cluster, ClusterId, ClusterIdPool, FrontierPoint, Mark, MarkBuffer};

/// Output of [`segment_clusters`].
#[derive(Clone, Debug)]
pub struct Segmentation {
    /// Clusters in discovery order
    pub clusters: Vec<Cluster>,
    /// Final marks: `Visited(id)` on assigned cells, `Seed` on cells left over after truncation
    pub marks: MarkBuffer,
    /// True if the id pool ran out before every seed was assigned
    pub truncated: bool,
}

/// Group seeds into clusters.
///
/// Takes ownership of the classification marks and returns them updated.
/// Fails with [`FrontierError::InternalInvariant`] if a seed has no Unknown
/// cardinal neighbor.
pub fn segment_clusters(
    view: &GridView<'_>,
    mut marks: MarkBuffer,
    max_clusters: usize,
) -> Result<Segmentation> {
    if marks.len() != view.len() {
        return Err(FrontierError::config(format!(
            "mark buffer has {} cells, grid has {}",
            marks.len(),
            view.len()
        )));
    }

    let mut pool = ClusterIdPool::new(max_clusters);
    let mut clusters = Vec::new();
    let mut truncated = false;
    let mut queue = VecDeque::new();

    for start in 0..view.len() {
        if marks.get(start) != Mark::Seed {
            continue;
        }

        let Some(id) = pool.acquire() else {
            truncated = true;
            log::warn!(
                "Cluster id pool exhausted after {} clusters; {} frontier cells left unassigned",
                pool.issued(),
                marks.seed_count()
            );
            break;
        };

        let cluster = flood_fill(view, &mut marks, start, id, &mut queue)?;
        log::trace!(
            "Cluster {} seeded at cell {} with {} cells",
            id.get(),
            start,
            cluster.len()
        );
        clusters.push(cluster);
    }

    Ok(Segmentation {
        clusters,
        marks,
        truncated,
    })
}

/// Flood fill from `start`, assigning every reachable seed to `id`.
fn flood_fill(
    view: &GridView<'_>,
    marks: &mut MarkBuffer,
    start: usize,
    id: ClusterId,
    queue: &mut VecDeque<usize>,
) -> Result<Cluster> {
    let mut points = Vec::new();

    queue.clear();
    queue.push_back(start);
    marks.set(start, Mark::Visited(id));

    while let Some(idx) = queue.pop_front() {
        points.push(frontier_point(view, idx)?);

        for neighbor in view.eight_neighbors(idx) {
            if marks.get(neighbor) == Mark::Seed {
                // Claim on push so no cell is queued twice
                marks.set(neighbor, Mark::Visited(id));
                queue.push_back(neighbor);
            }
        }
    }

    Ok(Cluster { id, points })
}

/// Outward direction of a frontier cell from its cardinal Unknown neighbors.
pub fn frontier_point(view: &GridView<'_>, index: usize) -> Result<FrontierPoint> {
    if index >= view.len() {
        return Err(FrontierError::config(format!(
            "cell index {} is outside a grid of {} cells",
            index,
            view.len()
        )));
    }

    let mut direction = Direction::ZERO;
    let mut unknown_neighbors = 0u8;

    for n in view.cardinal_steps(index) {
        if view.classify(n.index) == CellState::Unknown {
            direction += Direction::from_grid_step(n.dx, n.dy);
            unknown_neighbors += 1;
        }
    }

    if unknown_neighbors == 0 {
        return Err(FrontierError::InternalInvariant {
            index,
            message: "frontier cell has no unknown cardinal neighbor".to_string(),
        });
    }

    Ok(FrontierPoint {
        index,
        direction,
        unknown_neighbors,
    })
}
