//! Sample statistics accumulator for Monte Carlo estimators.

use crate::distributions::two_sided_quantile;
use fg_core::{errors::Result, Real};

/// Incremental statistics accumulator.
///
/// Keeps a running mean and sum of squared deviations (Welford's update) so
/// a Monte Carlo engine can add one discounted payoff at a time and read the
/// mean, the sample variance and the standard error of the mean at the end.
/// The update stays accurate when the samples sit far from zero.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    count: usize,
    mean: Real,
    m2: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
    }

    /// Add every sample from an iterator.
    pub fn extend<I: IntoIterator<Item = Real>>(&mut self, samples: I) {
        for x in samples {
            self.add(x);
        }
    }

    /// Sample mean. `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased (Bessel-corrected) sample variance. `None` for fewer than
    /// two samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        Some(self.m2 / (self.count - 1) as Real)
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Standard error of the mean, `σ / √n`.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }

    /// Two-sided normal confidence interval for the mean at `level`
    /// (e.g. `0.95`). `None` for fewer than two samples.
    pub fn confidence_interval(&self, level: Real) -> Result<Option<(Real, Real)>> {
        let z = two_sided_quantile(level)?;
        Ok(self
            .mean()
            .zip(self.error_estimate())
            .map(|(m, e)| (m - z * e, m + z * e)))
    }
}
