//! Seeded randomness for board setups.
//!
//! A board drawn from a `u64` seed is always the same board, so demos,
//! benchmarks and bug reports only need to carry the seed.
//!
//! ```
//! use camel_ring::core::BoardRng;
//!
//! let fields = [3, 7, 11];
//! let a = BoardRng::new(7).pick(&fields).copied();
//! let b = BoardRng::new(7).pick(&fields).copied();
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream remembering the seed it was built from.
#[derive(Clone, Debug)]
pub struct BoardRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fair coin.
    pub fn flip(&mut self) -> bool {
        self.stream.gen()
    }

    /// Put `items` in random order.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }

    /// Any one of `items`, or `None` when there are none.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }
}
