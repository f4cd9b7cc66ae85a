//! Random number generators.
//!
//! A Mersenne Twister (MT19937-64, via `rand_mt`) provides uniforms; the
//! Gaussian generator maps them through the inverse normal CDF so that a
//! given seed always yields the same sequence of draws.

use fg_core::Real;
use rand_mt::Mt19937GenRand64;

/// A uniform pseudo-random number generator on `[0, 1)` backed by
/// MT19937-64.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // Top 53 bits give every representable double in [0, 1) equal weight.
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// A standard-normal generator using inverse-transform sampling.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // Reject exact 0, which would map to -inf.
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 {
                break u;
            }
        };
        crate::distributions::normal::probit(u)
    }

    /// Draw `n` deviates into a new vector.
    pub fn next_sequence(&mut self, n: usize) -> Vec<Real> {
        (0..n).map(|_| self.next_real()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_stay_in_unit_interval() {
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..10_000 {
            let x = rng.next_real();
            assert!((0.0..1.0).contains(&x), "uniform {x} escaped [0, 1)");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = InverseCumulativeNormalRng::new(7).next_sequence(64);
        let b = InverseCumulativeNormalRng::new(7).next_sequence(64);
        assert_eq!(a, b);
        let c = InverseCumulativeNormalRng::new(8).next_sequence(64);
        assert_ne!(a, c);
    }

    #[test]
    fn gaussian_moments_are_plausible() {
        let samples = InverseCumulativeNormalRng::new(42).next_sequence(20_000);
        let n = samples.len() as Real;
        let mean = samples.iter().sum::<Real>() / n;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<Real>() / (n - 1.0);
        // Standard error of the mean is ~0.007 at this sample size.
        assert!(mean.abs() < 0.03, "mean {mean} out of expected range");
        assert!((var - 1.0).abs() < 0.05, "variance {var} out of expected range");
    }
}
