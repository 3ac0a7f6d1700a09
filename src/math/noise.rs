//! Smooth one-dimensional value noise
//!
//! Layered octaves of cosine-interpolated lattice values. Each octave doubles the
//! frequency and halves the amplitude, so the sum stays strictly below one.

use rand::Rng;

/// Lattice mask; the lattice holds `LATTICE_MASK + 1` values
const LATTICE_MASK: usize = 4095;
/// Number of layered octaves
const OCTAVES: usize = 4;
/// Amplitude multiplier between octaves
const FALLOFF: f64 = 0.5;

/// Seeded value noise over a wrapping lattice
#[derive(Debug, Clone)]
pub struct ValueNoise {
    lattice: Vec<f64>,
}

impl ValueNoise {
    /// Fill a new lattice from `rng`
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let lattice = (0..=LATTICE_MASK).map(|_| rng.random::<f64>()).collect();
        Self { lattice }
    }

    /// Sample the noise at `x`
    ///
    /// Output lies in `[0, 1)`. Nearby coordinates give nearby values; negative
    /// coordinates mirror positive ones.
    pub fn sample(&self, x: f64) -> f64 {
        let x = x.abs();
        let mut cell = x.floor() as usize;
        let mut fraction = x - x.floor();
        let mut amplitude = 0.5;
        let mut total = 0.0;

        for _ in 0..OCTAVES {
            let weight = scaled_cosine(fraction);
            let low = self.lattice_value(cell);
            let high = self.lattice_value(cell.wrapping_add(1));
            total += weight.mul_add(high - low, low) * amplitude;
            amplitude *= FALLOFF;

            cell = cell.wrapping_shl(1);
            fraction *= 2.0;
            if fraction >= 1.0 {
                cell = cell.wrapping_add(1);
                fraction -= 1.0;
            }
        }

        total
    }

    fn lattice_value(&self, cell: usize) -> f64 {
        self.lattice
            .get(cell & LATTICE_MASK)
            .copied()
            .unwrap_or_default()
    }
}

/// Cosine ease from 0 to 1 over the unit interval
fn scaled_cosine(t: f64) -> f64 {
    0.5 * (1.0 - (t * std::f64::consts::PI).cos())
}
