use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice among `len` candidates. Implementations must return a value
/// in `0..len` and are only called with `len > 0`.
pub trait RandomSource {
    fn pick_index(&mut self, len: usize) -> usize;
}

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
}

impl RandomSource for SessionRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
