//! Tests for seeded value noise

#[cfg(test)]
mod tests {
    use lightrail::math::noise::ValueNoise;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn noise(seed: u64) -> ValueNoise {
        ValueNoise::new(&mut StdRng::seed_from_u64(seed))
    }

    // Tests equal seeds give identical noise and different seeds differ
    // Verified by drawing the lattice from an unseeded generator
    #[test]
    fn test_seeded_noise_is_reproducible() {
        let a = noise(7);
        let b = noise(7);
        let c = noise(8);

        let samples: Vec<f64> = (0..50).map(|i| f64::from(i) * 0.37).collect();
        assert!(samples.iter().all(|&x| (a.sample(x) - b.sample(x)).abs() < f64::EPSILON));
        assert!(samples.iter().any(|&x| (a.sample(x) - c.sample(x)).abs() > 1e-9));
    }

    // Tests nearby coordinates produce nearby values
    // Verified by replacing the cosine weight with a step function
    #[test]
    fn test_noise_is_smooth() {
        let field = noise(3);
        for i in 0..200 {
            let x = f64::from(i) * 0.05;
            let delta = (field.sample(x) - field.sample(x + 0.001)).abs();
            assert!(delta < 0.01, "jump of {delta} at {x}");
        }
    }

    proptest! {
        // Tests every sample stays in the unit interval
        // Verified by starting the octave amplitude at one
        #[test]
        fn test_noise_in_unit_interval(seed in any::<u64>(), x in -1.0e4f64..1.0e4) {
            let value = noise(seed).sample(x);
            prop_assert!((0.0..1.0).contains(&value));
        }
    }
}
