//! Pseudo-random initial state.
//!
//! Registers and memory can power up holding garbage. The generator is a
//! 64-bit xorshift, seeded from the configuration so runs are reproducible.

use super::constants::DEFAULT_SEED;

/// Xorshift64 generator.
#[derive(Clone, Debug)]
pub struct Xorshift {
    state: u64,
}

impl Xorshift {
    /// Creates a generator; a zero seed falls back to the default seed.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Next 64-bit value.
    pub const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Next 32-bit value.
    pub const fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}
