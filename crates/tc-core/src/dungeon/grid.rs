//! Construction-time grid
//!
//! Cells plus a parallel array of region ids, both stored flat and indexed
//! by `y * width + x`. Only the generator mutates a grid; the finished cells
//! move into a [`Board`](super::Board) and the region ids are dropped.

use serde::{Deserialize, Serialize};

use super::{Cell, Rect};

/// Integer grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position `steps` cells away in `dir`
    pub const fn step(self, dir: Direction, steps: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }

    /// Squared Euclidean distance
    pub const fn distance_sq(self, other: Pos) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Cardinal directions, in the order every phase scans them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit (dx, dy); y grows southwards
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Mutable grid used while generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Region id per cell, 0 = none
    regions: Vec<u32>,
    /// Last region id handed out
    current_region: u32,
}

impl Grid {
    /// All-wall grid with no regions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
            regions: vec![0; width * height],
            current_region: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position lies on the grid
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> usize {
        debug_assert!(
            self.in_bounds(pos),
            "grid access at ({}, {}) outside {}x{}",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        pos.y as usize * self.width + pos.x as usize
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Region id of a cell, 0 if unassigned
    pub fn region(&self, pos: Pos) -> u32 {
        self.regions[self.index(pos)]
    }

    /// Open a new region; subsequent carves are tagged with it
    pub fn start_region(&mut self) -> u32 {
        self.current_region += 1;
        self.current_region
    }

    /// Last region id handed out (0 before the first region)
    pub fn current_region(&self) -> u32 {
        self.current_region
    }

    /// Make a cell floor, tagged with the current region
    pub fn carve(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Cell::Floor;
        self.regions[idx] = self.current_region;
    }

    /// Make a cell floor without touching its region
    pub fn carve_junction(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Cell::Floor;
    }

    /// Turn a cell back into wall
    pub fn uncarve(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Cell::Wall;
    }

    /// Carve every cell of a rectangle into the current region
    pub fn carve_rect(&mut self, rect: Rect) {
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                self.carve(Pos::new(x, y));
            }
        }
    }

    /// Number of floor cells among the four cardinal neighbours
    pub fn floor_neighbors(&self, pos: Pos) -> usize {
        Direction::CARDINAL
            .iter()
            .map(|&dir| pos.step(dir, 1))
            .filter(|&n| self.in_bounds(n) && self.cell(n).is_passable())
            .count()
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Interior positions (excluding the border), row by row
    pub fn interior(&self) -> impl Iterator<Item = Pos> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Pos::new(x, y)))
    }

    pub(crate) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
