//! Debug overlay: frontier cells as a world-space cell list.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::error::{FrontierError, Result};
use crate::grid::GridView;

use super::types::{ClusterId, Mark, MarkBuffer};

/// One frontier cell in the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerCell {
    /// Flat cell index
    pub index: usize,
    /// Cell center (meters)
    pub position: WorldPoint,
    /// Owning cluster; `None` for seeds left unassigned by truncation
    pub cluster: Option<ClusterId>,
}

/// Frontier cells of one computation, ready for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontierLayer {
    /// Cell edge length (meters)
    pub cell_size: f32,
    /// Frontier cells in index order
    pub cells: Vec<LayerCell>,
}

impl FrontierLayer {
    /// Build the overlay from the final marks of a computation.
    pub fn from_marks(view: &GridView<'_>, marks: &MarkBuffer) -> Result<Self> {
        if marks.len() != view.len() {
            return Err(FrontierError::config(format!(
                "mark buffer has {} cells, grid has {}",
                marks.len(),
                view.len()
            )));
        }

        let cells = marks
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(index, mark)| {
                let cluster = match mark {
                    Mark::NotSeed => return None,
                    Mark::Seed => None,
                    Mark::Visited(id) => Some(*id),
                };
                Some(LayerCell {
                    index,
                    position: view.cell_center_to_world(index),
                    cluster,
                })
            })
            .collect();

        Ok(Self {
            cell_size: view.resolution(),
            cells,
        })
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no frontier cell was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells belonging to one cluster.
    pub fn cluster_cells(&self, id: ClusterId) -> impl Iterator<Item = &LayerCell> + '_ {
        self.cells.iter().filter(move |c| c.cluster == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::{FinderConfig, FrontierFinder};
    use crate::grid::OccupancyGrid;
    use approx::assert_relative_eq;

    #[test]
    fn test_layer_lists_frontier_cells() {
        let grid = OccupancyGrid::from_ascii(
            &["#####", "#???#", "#...#", "#####"],
            0.5,
            WorldPoint::ZERO,
        )
        .unwrap();
        let view = grid.view().unwrap();
        let finder = FrontierFinder::new(FinderConfig::with_robot_radius(0.5)).unwrap();
        let result = finder.find(&view).unwrap();

        let layer = FrontierLayer::from_marks(&view, &result.marks).unwrap();
        assert_eq!(layer.len(), 3);
        assert_relative_eq!(layer.cell_size, 0.5);

        let indices: Vec<usize> = layer.cells.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![11, 12, 13]);
        assert_relative_eq!(layer.cells[0].position.x, 0.75);
        assert_relative_eq!(layer.cells[0].position.y, 1.25);

        let id = layer.cells[0].cluster.unwrap();
        assert_eq!(layer.cluster_cells(id).count(), 3);
    }

    #[test]
    fn test_unassigned_seeds_have_no_cluster() {
        let grid = OccupancyGrid::from_ascii(
            &["#####", "#?#?#", "#.#.#", "#####"],
            1.0,
            WorldPoint::ZERO,
        )
        .unwrap();
        let view = grid.view().unwrap();
        let finder = FrontierFinder::new(FinderConfig {
            robot_radius: 0.5,
            max_clusters: 1,
        })
        .unwrap();
        let result = finder.find(&view).unwrap();
        assert!(result.truncated);

        let layer = FrontierLayer::from_marks(&view, &result.marks).unwrap();
        assert_eq!(layer.len(), 2);
        assert!(layer.cells[0].cluster.is_some());
        assert!(layer.cells[1].cluster.is_none());
    }
}
