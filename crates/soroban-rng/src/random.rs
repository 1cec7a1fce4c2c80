//! Xoshiro256**-backed random source.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Random source for one generator.
///
/// Identical seeds produce identical draw sequences.
pub struct DrillRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

impl DrillRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    /// Uniform pick from a candidate slice; `None` when it is empty.
    pub fn pick<T: Copy>(&mut self, candidates: &[T]) -> Option<T> {
        self.calls_count += 1;
        candidates.choose(&mut self.rng).copied()
    }

    /// Derive an independent generator, e.g. one per problem in a batch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.calls_count += 1;
        Self::new(self.rng.gen::<u64>())
    }
}

impl std::fmt::Debug for DrillRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrillRng")
            .field("seed", &self.seed)
            .field("calls_count", &self.calls_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DrillRng::new(42);
        let mut rng2 = DrillRng::new(42);

        let candidates: Vec<i32> = (-9..=9).collect();
        for _ in 0..100 {
            assert_eq!(rng1.pick(&candidates), rng2.pick(&candidates));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DrillRng::new(42);
        let mut rng2 = DrillRng::new(43);

        let candidates: Vec<u32> = (0..1000).collect();
        let seq1: Vec<u32> = (0..20).map(|_| rng1.pick(&candidates).unwrap()).collect();
        let seq2: Vec<u32> = (0..20).map(|_| rng2.pick(&candidates).unwrap()).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = DrillRng::new(1);
        assert_eq!(rng.pick::<i32>(&[]), None);
    }

    #[test]
    fn test_pick_covers_all_candidates() {
        let mut rng = DrillRng::new(12345);
        let candidates = [1, 2, 3, 4];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let picked = rng.pick(&candidates).unwrap();
            seen[(picked - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fork() {
        let mut rng = DrillRng::new(12345);
        let forked = rng.fork();
        assert_ne!(forked.seed(), 12345);

        let mut rng2 = DrillRng::new(12345);
        assert_eq!(rng2.fork().seed(), forked.seed());
    }

    #[test]
    fn test_calls_count() {
        let mut rng = DrillRng::new(12345);
        assert_eq!(rng.calls_count(), 0);

        let _ = rng.pick(&[1, 2]);
        assert_eq!(rng.calls_count(), 1);

        let _ = rng.fork();
        assert_eq!(rng.calls_count(), 2);
    }
}
