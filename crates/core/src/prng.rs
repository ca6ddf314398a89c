//! Deterministic Xorshift64 PRNG for random seed rows.
//!
//! Pure integer arithmetic, so a given seed yields the same seed row on every
//! platform and a [`Recipe`](crate::recipe::Recipe) that stores only the seed
//! still reproduces the piece exactly.

use serde::{Deserialize, Serialize};

/// Xorshift64 with shifts (13, 7, 17).
///
/// A seed of 0 is the algorithm's all-zeros fixed point and is replaced with
/// a non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new generator. Seed 0 maps to a fixed non-zero state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a fair coin flip taken from the high bit of the next value.
    ///
    /// The low bits of xorshift output are the weakest, so they are skipped.
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}
