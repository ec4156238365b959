//! Map cell type

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of a single grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Cell {
    #[default]
    #[strum(serialize = "#")]
    Wall = 0,
    #[strum(serialize = ".")]
    Floor = 1,
}

impl Cell {
    /// Check if this is passable (can walk through)
    pub const fn is_passable(&self) -> bool {
        matches!(self, Cell::Floor)
    }

    /// ASCII glyph used by the board's text form
    pub const fn glyph(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
        }
    }

    /// Parse a glyph back into a cell
    pub const fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            _ => None,
        }
    }
}
