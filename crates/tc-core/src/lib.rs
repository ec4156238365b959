//! tc-core: dungeon generation for tinycrawl
//!
//! Builds a connected room-and-maze layout on a 2D grid in four phases:
//! room placement, maze growth, region connection and dead-end trimming.
//! The result is an immutable [`Board`] that renderers and entity layers
//! query for passability.
//!
//! ```no_run
//! use tc_core::BoardBuilder;
//! use tc_rng::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let board = BoardBuilder::new().size(41, 25).build(&mut rng).unwrap();
//! println!("{board}");
//! ```

pub mod dungeon;

mod config;
mod error;

pub use config::{GeneratorConfig, OverlapTest, MAX_DIMENSION, MIN_DIMENSION};
pub use dungeon::{
    generate, Board, BoardBuilder, Cell, Direction, GenerationStats, Generator, Grid, Pos, Rect,
};
pub use error::GenError;
pub use tc_rng::RandomSource;
