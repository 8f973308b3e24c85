//! Deterministic random number generation for the random playstyle.
//!
//! ChaCha8 behind a small newtype: the same seed always produces the same
//! match, and `fork` derives an independent deterministic branch so a forked
//! playstyle never replays its parent's draws.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic, forkable RNG.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG into an independent deterministic branch.
    ///
    /// Each fork produces a different but reproducible sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);
        let items = [1, 2, 3, 4, 5];

        for _ in 0..100 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_fork_diverges_from_parent() {
        let mut rng = BattleRng::new(42);
        let forked = rng.fork();

        assert_ne!(rng.seed, forked.seed);
    }

    #[test]
    fn test_choose_from_empty() {
        let mut rng = BattleRng::new(42);
        let empty: [i32; 0] = [];

        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_is_member() {
        let mut rng = BattleRng::new(7);
        let items = ['a', 'b', 'c'];

        for _ in 0..20 {
            let chosen = rng.choose(&items).unwrap();
            assert!(items.contains(chosen));
        }
    }
}
