//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/> implemented to satisfy the [RngCore] trait.
//!
//! The generator is used to build [random formulas](crate::builder::uniform), where a fixed seed is required to reproduce a formula.
//!
//! ```rust
//! # use dpll_sat::generic::minimal_pcg::MinimalPCG32;
//! # use rand::{Rng, SeedableRng};
//! let mut a = MinimalPCG32::seed_from_u64(7);
//! let mut b = MinimalPCG32::seed_from_u64(7);
//!
//! for _ in 0..16 {
//!     assert_eq!(a.gen_range(0..100_u32), b.gen_range(0..100_u32));
//! }
//! ```

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

const MULTIPLIER: u64 = 6364136223846793005;

/// This increment is entirely unmotivated.
const INCREMENT: u64 = 3215534235932367344;

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    // Two outputs, as a single output leaves the high bits clear.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_seeds() {
        let mut a = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(3u64.to_le_bytes());

        let a_values: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b_values: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a_values, b_values);
    }

    #[test]
    fn high_bits_used() {
        let mut x = MinimalPCG32::from_seed(2u64.to_le_bytes());
        assert!((0..32).any(|_| x.next_u64() > u32::MAX as u64));
    }
}
