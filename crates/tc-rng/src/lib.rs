//! tc-rng: random sources for the tinycrawl dungeon generator
//!
//! The generator never owns randomness. Every phase takes a `&mut` handle to
//! something implementing [`RandomSource`], so a map is reproduced by
//! replaying the same source through the same sequence of calls.

use serde::{Deserialize, Serialize};

mod game;
mod sequence;

pub use game::GameRng;
pub use sequence::SequenceRng;

/// A single shared stream of uniform integers.
pub trait RandomSource {
    /// Next raw value from the stream.
    fn next_u32(&mut self) -> u32;

    /// Returns a value in `[0, bound)`.
    ///
    /// Returns 0 if `bound` is 0.
    fn rn2(&mut self, bound: u32) -> u32;

    /// Returns a value in `[min, max)`.
    ///
    /// Returns `min` without consuming a draw if the range is empty.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = max.abs_diff(min);
        min.wrapping_add(self.rn2(span) as i32)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn rn2(&mut self, bound: u32) -> u32 {
        (**self).rn2(bound)
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }
}

/// An RNG call trace entry for debugging draw-sequence divergences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    /// Function name (e.g. "rn2", "next_u32")
    pub func: String,
    /// Argument (bound for rn2, 0 for raw draws)
    pub arg: u64,
    /// Result value
    pub result: u64,
}
