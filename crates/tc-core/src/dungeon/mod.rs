//! Dungeon generation
//!
//! Contains the grid, rooms, maze growth, region connection and dead-end
//! trimming, plus the finished board handed to consumers.

mod board;
mod cell;
mod connect;
mod deadend;
mod generation;
mod grid;
mod maze;
mod rect;
mod room;

pub use board::Board;
pub use cell::Cell;
pub use connect::{connect_regions, find_connectors, ConnectStats, Connector, RegionMerger};
pub use deadend::remove_dead_ends;
pub use generation::{generate, BoardBuilder, GenerationStats, Generator};
pub use grid::{Direction, Grid, Pos};
pub use maze::{grow_maze, growing_tree};
pub use rect::Rect;
pub use room::place_rooms;
