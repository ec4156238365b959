//! Dungeon generation pipeline
//!
//! Runs the phases in a fixed order on one grid, consuming the random source
//! in the same order every time:
//! 1. Place rooms
//! 2. Grow mazes through the remaining wall
//! 3. Connect all regions through single junction cells
//! 4. Trim dead-end corridors
//!
//! Identical configurations fed identical random streams produce identical
//! boards.

use log::debug;
use serde::Serialize;
use tc_rng::RandomSource;

use super::{connect_regions, grow_maze, place_rooms, remove_dead_ends, Board, Grid};
use crate::{GenError, GeneratorConfig, OverlapTest};

/// Counters collected while generating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GenerationStats {
    pub rooms_placed: usize,
    /// Maze walks started
    pub maze_walks: u32,
    /// Regions created by rooms and walks together
    pub regions: u32,
    pub connectors_found: usize,
    pub connectors_carved: usize,
    /// Regions left unmerged; 1 for a connected board
    pub open_regions: usize,
    pub dead_ends_removed: usize,
}

/// Validated generator
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Check the configuration once up front
    pub fn new(config: GeneratorConfig) -> Result<Self, GenError> {
        config.validate()?;
        if config.width % 2 == 0 || config.height % 2 == 0 {
            debug!(
                "even dimensions {}x{}: last column/row stays unaligned",
                config.width, config.height
            );
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one board
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (Board, GenerationStats) {
        let config = &self.config;
        let mut grid = Grid::new(config.width, config.height);
        let mut stats = GenerationStats::default();

        let rooms = place_rooms(&mut grid, config.room_tries, config.overlap_test, rng);
        stats.rooms_placed = rooms.len();
        debug!(
            "placed {} rooms in {} tries",
            rooms.len(),
            config.room_tries
        );

        stats.maze_walks = grow_maze(&mut grid, config.winding_percent, rng);
        stats.regions = grid.current_region();
        debug!(
            "grew {} maze walks, {} regions total",
            stats.maze_walks, stats.regions
        );

        let connect = connect_regions(&mut grid, rng);
        stats.connectors_found = connect.connectors_found;
        stats.connectors_carved = connect.connectors_carved;
        stats.open_regions = connect.open_regions;
        debug!(
            "carved {} of {} connectors",
            connect.connectors_carved, connect.connectors_found
        );

        if config.remove_dead_ends {
            stats.dead_ends_removed = remove_dead_ends(&mut grid);
            debug!("removed {} dead-end cells", stats.dead_ends_removed);
        }

        (Board::from_grid(grid, rooms), stats)
    }
}

/// Validate `config` and generate one board
pub fn generate<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Board, GenError> {
    let (board, _) = Generator::new(*config)?.run(rng);
    Ok(board)
}

/// Fluent configuration front end
///
/// ```no_run
/// use tc_core::{BoardBuilder, OverlapTest};
/// use tc_rng::GameRng;
///
/// let board = BoardBuilder::new()
///     .size(61, 41)
///     .winding_percent(20)
///     .overlap_test(OverlapTest::Full)
///     .build(&mut GameRng::new(7))
///     .unwrap();
/// assert_eq!(board.width(), 61);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    config: GeneratorConfig,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn room_tries(mut self, tries: u32) -> Self {
        self.config.room_tries = tries;
        self
    }

    pub fn winding_percent(mut self, percent: u32) -> Self {
        self.config.winding_percent = percent;
        self
    }

    pub fn remove_dead_ends(mut self, remove: bool) -> Self {
        self.config.remove_dead_ends = remove;
        self
    }

    pub fn overlap_test(mut self, test: OverlapTest) -> Self {
        self.config.overlap_test = test;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Board, GenError> {
        generate(&self.config, rng)
    }

    /// Build and also return the phase counters
    pub fn build_with_stats<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Board, GenerationStats), GenError> {
        Ok(Generator::new(self.config)?.run(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_rng::{GameRng, SequenceRng};

    #[test]
    fn test_builder_sets_config() {
        let builder = BoardBuilder::new()
            .size(31, 21)
            .room_tries(5)
            .winding_percent(40)
            .remove_dead_ends(false)
            .overlap_test(OverlapTest::Full);
        let config = builder.config();
        assert_eq!((config.width, config.height), (31, 21));
        assert_eq!(config.room_tries, 5);
        assert_eq!(config.winding_percent, 40);
        assert!(!config.remove_dead_ends);
        assert_eq!(config.overlap_test, OverlapTest::Full);
    }

    #[test]
    fn test_invalid_config_draws_nothing() {
        let mut rng = SequenceRng::constant(1);
        let err = BoardBuilder::new().size(2, 40).build(&mut rng).unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig { .. }));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_stats_are_consistent() {
        let mut rng = GameRng::new(21);
        let (board, stats) = BoardBuilder::new()
            .size(51, 31)
            .build_with_stats(&mut rng)
            .unwrap();

        assert_eq!(stats.rooms_placed, board.rooms().len());
        assert_eq!(stats.regions as usize, stats.rooms_placed + stats.maze_walks as usize);
        assert_eq!(stats.open_regions, 1);
        assert!(stats.connectors_carved <= stats.connectors_found);
        assert!(stats.connectors_carved <= stats.regions as usize - 1);
    }

    #[test]
    fn test_smallest_grid() {
        let mut rng = GameRng::new(0);
        let (board, stats) = BoardBuilder::new()
            .size(3, 3)
            .build_with_stats(&mut rng)
            .unwrap();
        assert_eq!(stats.rooms_placed, 0);
        assert_eq!(stats.maze_walks, 1);
        assert_eq!(board.floor_count(), 1);
        assert_eq!(board.cell_at(1, 1), crate::Cell::Floor);
    }

    #[test]
    fn test_generate_matches_builder() {
        let config = GeneratorConfig::with_size(41, 41);
        let a = generate(&config, &mut GameRng::new(5)).unwrap();
        let b = BoardBuilder::from_config(config)
            .build(&mut GameRng::new(5))
            .unwrap();
        assert_eq!(a, b);
    }
}
