//! Maze growth (growing-tree walk)
//!
//! Fills the space left between rooms with corridors. Every odd-aligned cell
//! that is still wall seeds a new walk; each walk is its own region and carves
//! a spanning tree over the odd cells it can reach.

use log::trace;
use tc_rng::RandomSource;

use super::{Direction, Grid, Pos};

/// Check if a walk at `pos` may carve two cells towards `dir`.
///
/// The destination must still be wall and the cell one step beyond it must be
/// on the grid, so corridors never run flush against the border.
fn can_carve(grid: &Grid, pos: Pos, dir: Direction) -> bool {
    if !grid.in_bounds(pos.step(dir, 3)) {
        return false;
    }
    !grid.cell(pos.step(dir, 2)).is_passable()
}

/// Run one walk from `start` under a fresh region.
///
/// Returns the number of corridor steps carved (each step carves two cells).
pub fn growing_tree<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    start: Pos,
    winding_percent: u32,
    rng: &mut R,
) -> usize {
    let mut stack = vec![start];
    let mut last_dir: Option<Direction> = None;
    let mut steps = 0;

    let region = grid.start_region();
    grid.carve(start);

    while let Some(&cell) = stack.last() {
        let mut open = [Direction::North; 4];
        let mut count = 0;
        for dir in Direction::CARDINAL {
            if can_carve(grid, cell, dir) {
                open[count] = dir;
                count += 1;
            }
        }
        let open = &open[..count];

        if open.is_empty() {
            stack.pop();
            last_dir = None;
            continue;
        }

        let dir = match last_dir {
            Some(last) if open.contains(&last) && rng.rn2(100) >= winding_percent => last,
            _ => open[rng.rn2(open.len() as u32) as usize],
        };

        grid.carve(cell.step(dir, 1));
        let next = cell.step(dir, 2);
        grid.carve(next);
        stack.push(next);
        last_dir = Some(dir);
        steps += 1;
    }

    trace!("walk {region} from {start:?}: {steps} steps");
    steps
}

/// Start a walk at every odd-aligned wall cell, scanning row by row.
///
/// Returns the number of walks (and so regions) started.
pub fn grow_maze<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    winding_percent: u32,
    rng: &mut R,
) -> u32 {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let mut walks = 0;

    for y in (1..h - 1).step_by(2) {
        for x in (1..w - 1).step_by(2) {
            let pos = Pos::new(x, y);
            if grid.cell(pos).is_passable() {
                continue;
            }
            growing_tree(grid, pos, winding_percent, rng);
            walks += 1;
        }
    }

    walks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Cell, Rect};
    use tc_rng::{GameRng, SequenceRng};

    fn odd_cells(w: usize, h: usize) -> usize {
        (w - 1) / 2 * ((h - 1) / 2)
    }

    #[test]
    fn test_can_carve_respects_border() {
        let grid = Grid::new(9, 9);
        let p = Pos::new(1, 1);
        assert!(!can_carve(&grid, p, Direction::North));
        assert!(!can_carve(&grid, p, Direction::West));
        assert!(can_carve(&grid, p, Direction::East));
        assert!(can_carve(&grid, p, Direction::South));
        // (5,1) -> (7,1) needs (8,1) on the grid
        assert!(can_carve(&grid, Pos::new(5, 1), Direction::East));
        assert!(!can_carve(&grid, Pos::new(7, 1), Direction::East));
    }

    #[test]
    fn test_can_carve_needs_wall_destination() {
        let mut grid = Grid::new(9, 9);
        grid.start_region();
        grid.carve(Pos::new(3, 1));
        assert!(!can_carve(&grid, Pos::new(1, 1), Direction::East));
    }

    #[test]
    fn test_straight_corridor_with_constant_source() {
        // East is the only open direction on a 3-row grid; with zero winding
        // the walk then keeps going straight until the border.
        let mut rng = SequenceRng::constant(0);
        let mut grid = Grid::new(9, 3);
        let steps = growing_tree(&mut grid, Pos::new(1, 1), 0, &mut rng);
        assert_eq!(steps, 3);
        for x in 1..=7 {
            assert_eq!(grid.cell(Pos::new(x, 1)), Cell::Floor);
            assert_eq!(grid.region(Pos::new(x, 1)), 1);
        }
        assert_eq!(grid.cell(Pos::new(8, 1)), Cell::Wall);
    }

    #[test]
    fn test_maze_is_spanning_tree() {
        for (w, h) in [(10, 10), (11, 11), (21, 15), (9, 23)] {
            for seed in 0..10 {
                let mut rng = GameRng::new(seed);
                let mut grid = Grid::new(w, h);
                let walks = grow_maze(&mut grid, 0, &mut rng);

                assert_eq!(walks, 1, "{w}x{h} seed {seed}");
                let cells = odd_cells(w, h);
                // every odd cell plus one connecting cell per tree edge
                assert_eq!(grid.floor_count(), cells + (cells - 1));
            }
        }
    }

    #[test]
    fn test_walks_skip_rooms() {
        let mut rng = GameRng::new(5);
        let mut grid = Grid::new(21, 21);
        grid.start_region();
        grid.carve_rect(Rect::new(1, 1, 5, 5));
        let walks = grow_maze(&mut grid, 0, &mut rng);

        assert!(walks >= 1);
        assert_eq!(grid.region(Pos::new(3, 3)), 1);
        assert!(grid.region(Pos::new(7, 1)) > 1);
    }

    #[test]
    fn test_full_winding_still_spans() {
        let mut rng = GameRng::new(8);
        let mut grid = Grid::new(31, 31);
        assert_eq!(grow_maze(&mut grid, 100, &mut rng), 1);
        let cells = odd_cells(31, 31);
        assert_eq!(grid.floor_count(), 2 * cells - 1);
    }
}
