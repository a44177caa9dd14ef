//! Random fill support.
//!
//! Every `random`/`set_random` entry point draws from a fresh thread-local
//! generator, so each call sees independent entropy. For reproducible fills
//! use the `_with_rng` variants, which thread an explicit seeded generator.

use rand::distr::StandardUniform;
use rand::Rng;

use crate::scalar::Scalar;

/// Trait for types that can be sampled uniformly from `[lower, upper)`.
pub trait RandomUniform: Scalar {
    /// Sample a random value from the uniform distribution `[lower, upper)`.
    fn sample_uniform<R: Rng>(rng: &mut R, lower: Self, upper: Self) -> Self;
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R, lower: Self, upper: Self) -> Self {
        lower + (upper - lower) * rng.sample::<f64, _>(StandardUniform)
    }
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R, lower: Self, upper: Self) -> Self {
        lower + (upper - lower) * rng.sample::<f32, _>(StandardUniform)
    }
}

/// Fill a packed buffer with uniform samples from `[lower, upper)`.
pub(crate) fn fill_uniform<T: RandomUniform, R: Rng>(
    data: &mut [T],
    lower: T,
    upper: T,
    rng: &mut R,
) {
    for x in data {
        *x = T::sample_uniform(rng, lower, upper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let v = f64::sample_uniform(&mut rng, -2.0, 5.0);
            assert!((-2.0..5.0).contains(&v), "value {} not in [-2, 5)", v);
        }
    }

    #[test]
    fn test_fill_reproducible() {
        let mut a = [0.0_f64; 16];
        let mut b = [0.0_f64; 16];

        let mut rng = StdRng::seed_from_u64(42);
        fill_uniform(&mut a, 0.0, 1.0, &mut rng);

        let mut rng = StdRng::seed_from_u64(42);
        fill_uniform(&mut b, 0.0, 1.0, &mut rng);

        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_independent_calls_differ() {
        let mut a = [0.0_f64; 16];
        let mut b = [0.0_f64; 16];

        fill_uniform(&mut a, 0.0, 1.0, &mut rand::rng());
        fill_uniform(&mut b, 0.0, 1.0, &mut rand::rng());

        assert_ne!(a, b);
    }
}
