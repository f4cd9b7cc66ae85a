//! End-to-end properties of the Crank-Nicolson solver on a forward contract.

use fg_core::{Error, Real, Time};
use fg_methods::finite_differences::{
    BoundaryProblem, CrankNicolsonSolver, FdGridSpec, GridGreeks, ValueGrid,
};
use proptest::prelude::*;

struct Forward {
    strike: Real,
    rate: Real,
}

impl BoundaryProblem for Forward {
    fn terminal_value(&self, s: Real) -> Real {
        s - self.strike
    }
    fn lower_boundary(&self, _tau: Time) -> Real {
        0.0
    }
    fn upper_boundary(&self, s_max: Real, tau: Time) -> Real {
        s_max - self.strike * (-self.rate * tau).exp()
    }
}

fn solve(
    s_max: Real,
    strike: Real,
    maturity: Time,
    rate: Real,
    vol: Real,
    n: usize,
    m: usize,
) -> ValueGrid {
    let spec = FdGridSpec::new(s_max, n, m, maturity).unwrap();
    CrankNicolsonSolver::new(spec, rate, vol)
        .unwrap()
        .solve(&Forward { strike, rate })
        .unwrap()
        .grid
}

fn present_value(spot: Real, strike: Real, rate: Real, maturity: Time) -> Real {
    spot - strike * (-rate * maturity).exp()
}

// ─── Convergence ──────────────────────────────────────────────────────────────

#[test]
fn price_error_shrinks_at_second_order() {
    let pv = present_value(100.0, 100.0, 0.05, 1.0);
    let errors: Vec<Real> = [(150, 10), (300, 20), (600, 40), (1200, 80)]
        .iter()
        .map(|&(n, m)| {
            let grid = solve(600.0, 100.0, 1.0, 0.05, 0.2, n, m);
            let g = GridGreeks::at_spot(&grid, 100.0).unwrap();
            assert_eq!(g.level, 100.0, "spot should sit on a grid level for N = {n}");
            (g.price - pv).abs()
        })
        .collect();

    for w in errors.windows(2) {
        assert!(w[1] < w[0], "errors not decreasing: {errors:?}");
        let ratio = w[0] / w[1];
        assert!(ratio > 3.5, "expected ~4x per doubling, got {ratio:.2} in {errors:?}");
    }
    assert!(errors[0] < 2e-5, "coarsest error {:.3e}", errors[0]);
}

#[test]
fn theta_approaches_analytic_present_value_decay() {
    // d/dt (S − K·e^{−r(T−t)}) = −r·K·e^{−r(T−t)}
    let exact = -0.05 * 100.0 * (-0.05_f64).exp();
    let mut previous = Real::INFINITY;
    for (n, m) in [(150, 10), (300, 20), (600, 40)] {
        let grid = solve(600.0, 100.0, 1.0, 0.05, 0.2, n, m);
        let err = (GridGreeks::at_spot(&grid, 100.0).unwrap().theta - exact).abs();
        assert!(err < previous, "theta error grew to {err:.3e} at M = {m}");
        previous = err;
    }
    assert!(previous < 5e-3);
}

#[test]
fn second_parameter_set() {
    let grid = solve(300.0, 100.0, 0.5, 0.03, 0.3, 300, 100);
    let g = GridGreeks::at_spot(&grid, 120.0).unwrap();
    assert_eq!(g.row, 120);
    assert!((g.price - 21.488_805_942_1).abs() < 1e-7, "price {}", g.price);
    assert!((g.delta - 1.0).abs() < 1e-6, "delta {}", g.delta);
    assert!(g.gamma.abs() < 1e-6, "gamma {}", g.gamma);
    assert!((g.theta + 2.955_56).abs() < 1e-4, "theta {}", g.theta);
}

// ─── Degenerate grids ─────────────────────────────────────────────────────────

#[test]
fn smallest_grid_solves_and_rejects_boundary_queries() {
    let grid = solve(600.0, 100.0, 1.0, 0.05, 0.2, 3, 1);
    assert_eq!(grid.values().rows(), 4);
    assert_eq!(grid.values().cols(), 2);
    assert!(GridGreeks::at_spot(&grid, 200.0).is_ok());

    let err = GridGreeks::at_spot(&grid, 50.0).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfRangeQuery {
            spot: 50.0,
            lower: 200.0,
            upper: 400.0
        }
    );
    assert!(GridGreeks::at_spot(&grid, 450.0).is_err());
}

#[test]
fn grid_below_minimum_is_rejected_before_solving() {
    assert!(matches!(
        FdGridSpec::new(600.0, 2, 1, 1.0),
        Err(Error::InvalidGrid(_))
    ));
    assert!(matches!(
        FdGridSpec::new(600.0, 3, 0, 1.0),
        Err(Error::InvalidGrid(_))
    ));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn boundaries_are_assigned_exactly(
        s_max in 150.0..1000.0_f64,
        strike in 10.0..140.0_f64,
        maturity in 0.1..3.0_f64,
        rate in -0.02..0.1_f64,
        vol in 0.05..0.6_f64,
        n in 3usize..200,
        m in 1usize..40,
    ) {
        let grid = solve(s_max, strike, maturity, rate, vol, n, m);
        let spec = *grid.spec();
        for j in 0..m {
            let tau = spec.maturity() - j as Real * spec.dt();
            prop_assert_eq!(grid.value(0, j), 0.0);
            prop_assert_eq!(grid.value(n, j), s_max - strike * (-rate * tau).exp());
        }
        prop_assert_eq!(grid.value(n, m), s_max - strike);
        prop_assert_eq!(grid.value(0, m), -strike);
    }

    #[test]
    fn identical_inputs_give_identical_grids(
        rate in 0.0..0.1_f64,
        vol in 0.05..0.5_f64,
        n in 3usize..120,
        m in 1usize..20,
    ) {
        let a = solve(600.0, 100.0, 1.0, rate, vol, n, m);
        let b = solve(600.0, 100.0, 1.0, rate, vol, n, m);
        prop_assert_eq!(a.values(), b.values());
    }

    #[test]
    fn forward_gamma_vanishes_away_from_the_lower_boundary(
        rate in 0.0..0.08_f64,
        vol in 0.1..0.3_f64,
        n in 60usize..400,
        m in 5usize..60,
    ) {
        let grid = solve(600.0, 100.0, 1.0, rate, vol, n, m);
        let g = GridGreeks::at_spot(&grid, 100.0).unwrap();
        prop_assert!(g.gamma.abs() < 1e-6, "gamma = {}", g.gamma);
        prop_assert!((g.delta - 1.0).abs() < 1e-5, "delta = {}", g.delta);
    }
}
