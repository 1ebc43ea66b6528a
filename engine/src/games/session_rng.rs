use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source owned by one engine, so a run can be replayed from its seed.
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

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let left: Vec<i32> = (0..20).map(|_| a.random_range(0..100)).collect();
        let right: Vec<i32> = (0..20).map(|_| b.random_range(0..100)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_optional_seed_is_kept() {
        let rng = SessionRng::from_optional_seed(Some(99));
        assert_eq!(rng.seed(), 99);
    }
}
