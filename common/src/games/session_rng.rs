use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source owned by one game session.
///
/// The seed is kept so a session can be replayed with the exact same
/// random-tier choices.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniformly picks one element, or `None` for an empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_range(0..items.len());
        Some(items[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        let items = [0, 1, 2, 3, 4, 5, 6, 7, 8];

        for _ in 0..32 {
            assert_eq!(a.pick(&items), b.pick(&items));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_pick_from_empty_slice_is_none() {
        let mut rng = SessionRng::new(7);
        let items: [usize; 0] = [];

        assert_eq!(rng.pick(&items), None);
    }

    #[test]
    fn test_pick_stays_within_items() {
        let mut rng = SessionRng::from_random();
        let items = [2, 5, 7];

        for _ in 0..100 {
            let picked = rng.pick(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }
}
