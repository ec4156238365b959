//! Rectangles for room placement

use serde::{Deserialize, Serialize};

use super::Pos;

/// Axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow by `by` cells on every side
    pub const fn expand(&self, by: i32) -> Rect {
        Rect::new(
            self.x - by,
            self.y - by,
            self.width + 2 * by,
            self.height + 2 * by,
        )
    }

    /// Point test, inclusive of the far edge (`x + width`, `y + height`)
    pub const fn contains_point(&self, p: Pos) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Corner points as used by the corner test
    pub const fn corners(&self) -> [Pos; 4] {
        [
            Pos::new(self.x, self.y),
            Pos::new(self.x + self.width, self.y),
            Pos::new(self.x, self.y + self.height),
            Pos::new(self.x + self.width, self.y + self.height),
        ]
    }

    /// True if any corner of either rectangle lies within the other.
    ///
    /// Two rectangles crossing like a plus sign hold no corner of each other
    /// and pass this test.
    pub fn intersects_corners(&self, other: &Rect) -> bool {
        other.corners().iter().any(|&c| self.contains_point(c))
            || self.corners().iter().any(|&c| other.contains_point(c))
    }

    /// True if the rectangles share at least one cell
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Check whether a cell lies inside the rectangle
    pub const fn contains_cell(&self, p: Pos) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}
