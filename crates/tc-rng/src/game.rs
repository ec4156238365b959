//! Seeded game RNG
//!
//! Uses a seeded ChaCha RNG for reproducibility.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{RandomSource, RngTraceEntry};

/// Game random number generator
///
/// Wraps ChaCha8Rng. Serializes as its seed only; deserializing rewinds the
/// stream to the start.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
    /// Total number of draws made
    call_count: u64,
    /// If true, record all calls into trace log
    tracing: bool,
    /// Trace log (only populated when tracing is true)
    trace: Vec<RngTraceEntry>,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Enable RNG tracing, clearing any previous trace
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    /// Disable RNG tracing
    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Recorded calls since tracing was enabled
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Total number of draws
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    fn record(&mut self, func: &str, arg: u64, result: u64) {
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count,
                func: func.to_string(),
                arg,
                result,
            });
        }
        self.call_count += 1;
    }
}

impl RandomSource for GameRng {
    fn next_u32(&mut self) -> u32 {
        let res = RngCore::next_u32(&mut self.rng);
        self.record("next_u32", 0, res as u64);
        res
    }

    fn rn2(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let res = self.rng.gen_range(0..bound);
        self.record("rn2", bound as u64, res as u64);
        res
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_bound() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.call_count(), 0);
    }

    #[test]
    fn test_tracing() {
        let mut rng = GameRng::new(1);
        rng.rn2(5);
        rng.enable_tracing();
        let a = rng.rn2(10);
        let b = rng.next_u32();
        rng.disable_tracing();
        rng.rn2(3);

        let trace = rng.trace();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].seq, 1);
        assert_eq!(trace[0].func, "rn2");
        assert_eq!(trace[0].arg, 10);
        assert_eq!(trace[0].result, a as u64);
        assert_eq!(trace[1].func, "next_u32");
        assert_eq!(trace[1].result, b as u64);
        assert_eq!(rng.call_count(), 4);
    }

    #[test]
    fn test_serde_keeps_seed() {
        let mut rng = GameRng::new(99);
        let first = rng.rn2(1000);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "99");

        let mut restored: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed(), 99);
        assert_eq!(restored.rn2(1000), first);
    }
}
