use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

/// Seeded randomness for a run. One seed fixes every shuffle the run makes.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a seed from the OS so unseeded runs still report a replayable seed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().next_u64())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform Fisher-Yates permutation of `items`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
