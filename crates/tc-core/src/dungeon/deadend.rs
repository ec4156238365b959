//! Dead-end trimming

use super::Grid;

/// Fill in every floor cell with exactly one floor neighbour, repeating full
/// scans until one makes no change.
///
/// Cells are filled as the scan reaches them, so a corridor can shrink by
/// several cells in one pass. Returns the number of cells filled.
pub fn remove_dead_ends(grid: &mut Grid) -> usize {
    let mut removed = 0;

    loop {
        let mut changed = false;
        for pos in grid.interior() {
            if grid.cell(pos).is_passable() && grid.floor_neighbors(pos) == 1 {
                grid.uncarve(pos);
                removed += 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Cell, Pos, Rect};

    #[test]
    fn test_stub_corridor_removed() {
        let mut grid = Grid::new(11, 7);
        grid.start_region();
        grid.carve_rect(Rect::new(1, 1, 3, 3));
        // corridor poking out of the room to the east
        for x in 4..=8 {
            grid.carve(Pos::new(x, 2));
        }
        let removed = remove_dead_ends(&mut grid);

        assert_eq!(removed, 5);
        assert_eq!(grid.cell(Pos::new(4, 2)), Cell::Wall);
        assert_eq!(grid.floor_count(), 9);
    }

    #[test]
    fn test_loop_survives() {
        let mut grid = Grid::new(7, 7);
        grid.start_region();
        for i in 1..=5 {
            grid.carve(Pos::new(i, 1));
            grid.carve(Pos::new(i, 5));
            grid.carve(Pos::new(1, i));
            grid.carve(Pos::new(5, i));
        }
        assert_eq!(remove_dead_ends(&mut grid), 0);
        assert_eq!(grid.floor_count(), 16);
    }

    #[test]
    fn test_isolated_cell_kept() {
        // no neighbours is not a dead end
        let mut grid = Grid::new(3, 3);
        grid.start_region();
        grid.carve(Pos::new(1, 1));
        assert_eq!(remove_dead_ends(&mut grid), 0);
    }

    #[test]
    fn test_tree_collapses() {
        // A lone corridor shrinks until a single cell is left
        let mut grid = Grid::new(9, 3);
        grid.start_region();
        for x in 1..=7 {
            grid.carve(Pos::new(x, 1));
        }
        let removed = remove_dead_ends(&mut grid);
        assert_eq!(removed, 6);
        assert_eq!(grid.floor_count(), 1);
    }

    #[test]
    fn test_idempotent() {
        let mut grid = Grid::new(11, 7);
        grid.start_region();
        grid.carve_rect(Rect::new(1, 1, 3, 3));
        for x in 4..=8 {
            grid.carve(Pos::new(x, 2));
        }
        remove_dead_ends(&mut grid);
        let snapshot = grid.clone();
        assert_eq!(remove_dead_ends(&mut grid), 0);
        assert_eq!(grid, snapshot);
    }
}
