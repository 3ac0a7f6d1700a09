//! Unit tests mirroring the `src/` tree, one file per source file

use lightrail::algorithm::random::RandomSource;


/// Random source that always takes the first option
///
/// Uniform samples are zero, choices pick index zero and noise sits at the midpoint.
pub struct FirstChoice;

impl RandomSource for FirstChoice {
    fn random(&mut self) -> f64 {
        0.0
    }

    fn random_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then_some(0)
    }

    fn noise(&self, _x: f64) -> f64 {
        0.5
    }
}
