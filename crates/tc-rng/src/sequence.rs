//! Fixed-sequence random source
//!
//! Replays a caller-supplied list of raw values, wrapping around at the end.
//! Bounded draws reduce the raw value modulo the bound, so a test can steer
//! every decision of the generator by choosing the sequence.

use crate::RandomSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
    draws: u64,
}

impl SequenceRng {
    /// An empty sequence yields 0 forever.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            pos: 0,
            draws: 0,
        }
    }

    /// A source that always returns the same raw value.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values consumed so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Rewind to the first value.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.draws = 0;
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        value
    }

    fn rn2(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}
