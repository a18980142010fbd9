//! Data types shared by the frontier pipeline stages.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, WorldPoint};
use crate::error::{FrontierError, Result};

/// Identifier of a frontier cluster, unique within one computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterId(u32);

impl ClusterId {
    /// Raw id value (0-based, in discovery order).
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Bounded pool of cluster ids, local to one computation.
///
/// Ids are handed out in increasing order starting at 0. Once `capacity`
/// ids have been issued the pool is exhausted and [`acquire`](Self::acquire)
/// returns `None`; ids are never reused or wrapped.
#[derive(Clone, Debug)]
pub struct ClusterIdPool {
    next: u32,
    capacity: u32,
}

impl ClusterIdPool {
    /// Create a pool with room for `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            next: 0,
            capacity: capacity.min(u32::MAX as usize) as u32,
        }
    }

    /// Take the next free id.
    #[inline]
    pub fn acquire(&mut self) -> Option<ClusterId> {
        if self.next >= self.capacity {
            return None;
        }
        let id = ClusterId(self.next);
        self.next += 1;
        Some(id)
    }

    /// Number of ids issued so far.
    #[inline]
    pub fn issued(&self) -> usize {
        self.next as usize
    }

    /// True once every id has been issued.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.capacity
    }
}

/// Per-cell mark produced by classification and updated by segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Not a frontier cell
    #[default]
    NotSeed,
    /// Frontier cell not yet assigned to a cluster
    Seed,
    /// Frontier cell assigned to a cluster
    Visited(ClusterId),
}

/// One mark per grid cell. Owned by a single computation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkBuffer {
    marks: Vec<Mark>,
}

impl MarkBuffer {
    /// Buffer of `len` cells, all `NotSeed`.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![Mark::NotSeed; len],
        }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for an empty buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Mark of the cell at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Mark {
        self.marks[index]
    }

    /// Overwrite the mark of the cell at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.marks[index] = mark;
    }

    /// Cluster the cell was assigned to, if any.
    #[inline]
    pub fn cluster_of(&self, index: usize) -> Option<ClusterId> {
        match self.marks[index] {
            Mark::Visited(id) => Some(id),
            _ => None,
        }
    }

    /// All marks in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Mark] {
        &self.marks
    }

    /// Cells still marked `Seed` (unassigned frontier cells).
    pub fn seed_count(&self) -> usize {
        self.marks.iter().filter(|m| **m == Mark::Seed).count()
    }

    /// Cells assigned to some cluster.
    pub fn visited_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Visited(_)))
            .count()
    }

    /// All frontier cells, assigned or not.
    pub fn frontier_cell_count(&self) -> usize {
        self.seed_count() + self.visited_count()
    }
}

/// A frontier cell and its outward direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierPoint {
    /// Flat cell index
    pub index: usize,
    /// Sum of unit vectors toward each cardinal Unknown neighbor
    pub direction: Direction,
    /// How many cardinal neighbors are Unknown
    pub unknown_neighbors: u8,
}

impl FrontierPoint {
    /// Direction averaged over the Unknown neighbors.
    ///
    /// A frontier cell always faces at least one Unknown neighbor; a zero
    /// count means classification and segmentation disagree.
    pub fn orientation(&self) -> Result<Direction> {
        if self.unknown_neighbors == 0 {
            return Err(FrontierError::InternalInvariant {
                index: self.index,
                message: "frontier cell has no unknown cardinal neighbor".to_string(),
            });
        }
        Ok(self.direction / self.unknown_neighbors as f32)
    }
}

/// A connected group of frontier cells in discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// Cluster id from the per-call pool
    pub id: ClusterId,
    /// Member cells
    pub points: Vec<FrontierPoint>,
}

impl Cluster {
    /// Number of member cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the cluster has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Member cell indices.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.points.iter().map(|p| p.index)
    }
}

/// A frontier target: world position and outward heading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frontier {
    /// Centroid of the member cells (meters)
    pub position: WorldPoint,
    /// Outward heading (radians, CCW from +X)
    pub heading: f32,
}

/// A frontier weighted by the number of cells in its cluster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedFrontier {
    /// The frontier
    pub frontier: Frontier,
    /// Member cell count (proxy for opening width)
    pub weight: usize,
}
