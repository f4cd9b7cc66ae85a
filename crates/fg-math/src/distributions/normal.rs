//! Standard normal distribution.

use fg_core::{ensure, errors::Result, Real};
use statrs::distribution::{ContinuousCDF, Normal};

/// The standard normal cumulative distribution function Φ(x).
///
/// Delegates to `statrs`, which evaluates it through `erfc` to full double
/// precision.
pub fn normal_cdf(x: Real) -> Real {
    standard_normal().cdf(x)
}

/// The inverse standard normal CDF (probit function).
///
/// Peter J. Acklam's rational approximation, maximum absolute error below
/// `1.15e-9`. `p` must lie strictly inside `(0, 1)`.
pub fn normal_cdf_inverse(p: Real) -> Result<Real> {
    ensure!(p > 0.0 && p < 1.0, "probability must be in (0, 1), got {p}");
    Ok(probit(p))
}

/// The `z` such that `P(-z ≤ X ≤ z) = level` for a standard normal `X`.
///
/// Used for Monte Carlo confidence intervals, e.g. `1.959964` at 95 %.
pub fn two_sided_quantile(level: Real) -> Result<Real> {
    ensure!(
        level > 0.0 && level < 1.0,
        "confidence level must be in (0, 1), got {level}"
    );
    Ok(standard_normal().inverse_cdf(0.5 * (1.0 + level)))
}

fn standard_normal() -> Normal {
    // Parameters are constant and valid.
    Normal::standard()
}

const CENTRAL_NUM: [f64; 6] = [
    -3.969_683_028_665_376e+01,
    2.209_460_984_245_205e+02,
    -2.759_285_104_469_687e+02,
    1.383_577_518_672_690e+02,
    -3.066_479_806_614_716e+01,
    2.506_628_277_459_239e+00,
];
const CENTRAL_DEN: [f64; 5] = [
    -5.447_609_879_822_406e+01,
    1.615_858_368_580_409e+02,
    -1.556_989_798_598_866e+02,
    6.680_131_188_771_972e+01,
    -1.328_068_155_288_572e+01,
];
const TAIL_NUM: [f64; 6] = [
    -7.784_894_002_430_293e-03,
    -3.223_964_580_411_365e-01,
    -2.400_758_277_161_838e+00,
    -2.549_732_539_343_734e+00,
    4.374_664_141_464_968e+00,
    2.938_163_982_698_783e+00,
];
const TAIL_DEN: [f64; 4] = [
    7.784_695_709_041_462e-03,
    3.224_671_290_700_398e-01,
    2.445_134_137_142_996e+00,
    3.754_408_661_907_416e+00,
];

/// Break-point between the central and tail rational approximations.
const P_LOW: f64 = 0.02425;

/// Acklam's approximation without the domain check; `p` must be in `(0, 1)`.
pub(crate) fn probit(p: Real) -> Real {
    if p < P_LOW {
        tail(p)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        horner(&CENTRAL_NUM, r) * q / (horner(&CENTRAL_DEN, r) * r + 1.0)
    } else {
        -tail(1.0 - p)
    }
}

/// Lower-tail branch; the upper tail follows by symmetry.
fn tail(p: Real) -> Real {
    let q = (-2.0 * p.ln()).sqrt();
    horner(&TAIL_NUM, q) / (horner(&TAIL_DEN, q) * q + 1.0)
}

/// Evaluate `c[0]·x^{n-1} + … + c[n-1]`.
#[inline]
fn horner(coeffs: &[f64], x: Real) -> Real {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cdf_at_zero_is_half() {
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn inverse_of_median_is_zero() {
        assert_abs_diff_eq!(normal_cdf_inverse(0.5).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_matches_known_quantiles() {
        assert_abs_diff_eq!(normal_cdf_inverse(0.975).unwrap(), 1.959_963_985, epsilon = 1e-8);
        assert_abs_diff_eq!(normal_cdf_inverse(0.01).unwrap(), -2.326_347_874, epsilon = 1e-8);
        assert_abs_diff_eq!(normal_cdf_inverse(0.999).unwrap(), 3.090_232_306, epsilon = 1e-8);
    }

    #[test]
    fn inverse_round_trips_through_cdf() {
        for p in [0.001, 0.02, 0.1, 0.3, 0.5, 0.7, 0.9, 0.98, 0.999] {
            let x = normal_cdf_inverse(p).unwrap();
            assert!(
                (normal_cdf(x) - p).abs() < 1e-8,
                "round trip failed for p={p}: Φ({x}) = {}",
                normal_cdf(x)
            );
        }
    }

    #[test]
    fn inverse_rejects_closed_endpoints() {
        assert!(normal_cdf_inverse(0.0).is_err());
        assert!(normal_cdf_inverse(1.0).is_err());
    }

    #[test]
    fn ninety_five_percent_two_sided() {
        assert_abs_diff_eq!(two_sided_quantile(0.95).unwrap(), 1.959_963_985, epsilon = 1e-8);
        assert!(two_sided_quantile(1.0).is_err());
    }
}
