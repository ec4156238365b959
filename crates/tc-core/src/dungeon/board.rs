//! Finished dungeon board
//!
//! Read-only view of a generated grid. Renderers paint its cells and entity
//! layers ask it for passability and random free cells.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tc_rng::RandomSource;

use super::{Cell, Grid, Rect};
use crate::GenError;

/// Immutable generated map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells
    cells: Vec<Cell>,
    /// Rooms placed during generation
    rooms: Vec<Rect>,
}

impl Board {
    pub(crate) fn from_grid(grid: Grid, rooms: Vec<Rect>) -> Self {
        let (width, height) = (grid.width(), grid.height());
        Self {
            width,
            height,
            cells: grid.into_cells(),
            rooms,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y), or `None` off the board
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Cell at (x, y)
    ///
    /// # Panics
    /// If (x, y) is off the board.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        self.cells[y * self.width + x]
    }

    /// Check if (x, y) is on the board and walkable
    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|c| c.is_passable())
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Rooms placed during generation; empty for parsed boards
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Pick a random floor cell by rejection sampling (x drawn before y).
    ///
    /// Fails with [`GenError::NoPassableCell`] instead of looping forever on a
    /// board without floor.
    pub fn find_free_cell<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(usize, usize), GenError> {
        if !self.cells.iter().any(|c| c.is_passable()) {
            return Err(GenError::NoPassableCell);
        }
        loop {
            let x = rng.rn2(self.width as u32) as usize;
            let y = rng.rn2(self.height as u32) as usize;
            if self.is_passable(x, y) {
                return Ok((x, y));
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GenError;

    /// Parse the `#`/`.` text form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        // trailing blank lines are dropped, any other blank line is an error
        let used = lines.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);

        for (i, line) in lines[..used].iter().enumerate() {
            if line.is_empty() {
                return Err(GenError::InvalidMap {
                    line: i + 1,
                    reason: "blank line inside map".to_string(),
                });
            }
            let row: Vec<Cell> = line
                .chars()
                .map(|ch| {
                    Cell::from_glyph(ch).ok_or_else(|| GenError::InvalidMap {
                        line: i + 1,
                        reason: format!("unknown glyph {ch:?}"),
                    })
                })
                .collect::<Result<_, _>>()?;

            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(GenError::InvalidMap {
                        line: i + 1,
                        reason: format!("row has {} cells, expected {w}", row.len()),
                    });
                }
                Some(_) => {}
            }
            cells.extend(row);
            height += 1;
        }

        let width = width.ok_or_else(|| GenError::InvalidMap {
            line: 0,
            reason: "empty map".to_string(),
        })?;

        Ok(Self {
            width,
            height,
            cells,
            rooms: Vec::new(),
        })
    }
}
