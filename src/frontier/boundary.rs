//! Boundary classification: which Free cells seed a frontier.
//!
//! A cell is a seed when it is Free, does not lie on the outer ring of the
//! grid, and has at least one Unknown cardinal neighbor. The outer ring is
//! excluded as a whole: cells there border unmapped space by construction.

use crate::core::CellState;
use crate::grid::GridView;

use super::types::{Mark, MarkBuffer};

/// Mark every frontier seed in the grid.
///
/// Returns a fresh buffer with `Seed` on frontier cells and `NotSeed`
/// everywhere else.
pub fn classify_boundary(view: &GridView<'_>) -> MarkBuffer {
    let mut marks = MarkBuffer::new(view.len());

    let width = view.width();
    let height = view.height();

    // Grids thinner than 3 cells are all border
    if width < 3 || height < 3 {
        return marks;
    }

    for y in 1..(height - 1) {
        for x in 1..(width - 1) {
            let idx = y * width + x;
            if view.classify(idx) == CellState::Free && has_unknown_cardinal(view, idx) {
                marks.set(idx, Mark::Seed);
            }
        }
    }

    log::trace!(
        "Boundary classification: {} seeds in {}x{} grid",
        marks.seed_count(),
        width,
        height
    );

    marks
}

/// Would the cell at `index` be marked as a seed?
pub fn is_frontier_seed(view: &GridView<'_>, index: usize) -> bool {
    !view.is_border(index)
        && view.classify(index) == CellState::Free
        && has_unknown_cardinal(view, index)
}

/// Check if a cell has at least one Unknown cardinal neighbor.
#[inline]
fn has_unknown_cardinal(view: &GridView<'_>, index: usize) -> bool {
    view.cardinal_neighbors(index)
        .any(|n| view.classify(n) == CellState::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;
    use crate::grid::OccupancyGrid;

    fn grid(rows: &[&str]) -> OccupancyGrid {
        OccupancyGrid::from_ascii(rows, 0.1, WorldPoint::ZERO).unwrap()
    }

    fn seeds(grid: &OccupancyGrid) -> Vec<usize> {
        let view = grid.view().unwrap();
        let marks = classify_boundary(&view);
        (0..marks.len())
            .filter(|&i| marks.get(i) == Mark::Seed)
            .collect()
    }

    #[test]
    fn test_free_cell_next_to_unknown_is_seed() {
        let g = grid(&["#####", "#?..#", "#####"]);
        // Only index 7 (row 1, col 2) touches the unknown cell at index 6
        assert_eq!(seeds(&g), vec![7]);
    }

    #[test]
    fn test_diagonal_unknown_does_not_seed() {
        let g = grid(&["#####", "#?###", "##..#", "#####"]);
        // Index 12 touches unknown index 6 only diagonally
        assert!(seeds(&g).is_empty());
    }

    #[test]
    fn test_unknown_and_occupied_never_seed() {
        let g = grid(&["?????", "?#?#?", "?????"]);
        assert!(seeds(&g).is_empty());
    }

    #[test]
    fn test_outer_ring_is_excluded() {
        // Border cells are Free and touch Unknown, yet only the interior center seeds
        let g = grid(&[".....", ".???.", ".?.?.", ".???.", "....."]);
        assert_eq!(seeds(&g), vec![12]);

        let g = grid(&["?????", "?...?", "?...?", "?...?", "?????"]);
        let s = seeds(&g);
        // Ring of interior cells around the center (index 12)
        assert_eq!(s, vec![6, 7, 8, 11, 13, 16, 17, 18]);
        let view = g.view().unwrap();
        for idx in s {
            assert!(!view.is_border(idx));
            assert!(is_frontier_seed(&view, idx));
        }
        assert!(!is_frontier_seed(&view, 12));
    }

    #[test]
    fn test_single_row_grid_is_all_border() {
        let g = grid(&["?...#"]);
        assert!(seeds(&g).is_empty());
    }
}
