//! Randomness consumed by grid collapse, path generation and animation

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::math::noise::ValueNoise;

/// Source of uniform randomness and smooth noise
///
/// Everything stochastic in the crate goes through this trait, so a fixed
/// implementation makes collapse and traversal fully reproducible.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn random(&mut self) -> f64;

    /// Uniform index in `0..len`, or `None` when `len` is zero
    fn random_index(&mut self, len: usize) -> Option<usize>;

    /// Smooth noise of one coordinate, in `[0, 1)`
    fn noise(&self, x: f64) -> f64;

    /// Uniform sample in `[low, high)`
    fn random_range(&mut self, low: f64, high: f64) -> f64 {
        (high - low).mul_add(self.random(), low)
    }

    /// Uniform choice from a slice, or `None` when it is empty
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.random_index(items.len())
            .and_then(|index| items.get(index))
    }
}

/// Seeded random source for reproducible output
pub struct SeededRandom {
    rng: StdRng,
    noise: ValueNoise,
}

impl SeededRandom {
    /// Create a deterministic random source
    ///
    /// The noise lattice is drawn from the same seed before any other sample.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = ValueNoise::new(&mut rng);
        Self { rng, noise }
    }
}

impl RandomSource for SeededRandom {
    fn random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn random_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    fn noise(&self, x: f64) -> f64 {
        self.noise.sample(x)
    }
}
