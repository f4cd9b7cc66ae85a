//! Finite-difference Greeks read from a solved value grid.

use super::grid::ValueGrid;
use fg_core::{ensure_post, errors::Result, Real};

/// Price and Greeks at inception on one grid row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGreeks {
    /// Row the values were read from.
    pub row: usize,
    /// Price level of that row.
    pub level: Real,
    /// `V[row, 0]`.
    pub price: Real,
    /// Central first difference in price.
    pub delta: Real,
    /// Central second difference in price.
    pub gamma: Real,
    /// Forward difference in time, `(V[row, 1] − V[row, 0]) / Δt`.
    pub theta: Real,
}

impl GridGreeks {
    /// Read price, Delta, Gamma and Theta at the first level `≥ spot`.
    ///
    /// Fails with [`OutOfRangeQuery`](fg_core::Error::OutOfRangeQuery) when
    /// `spot` is within one price step of either boundary, and with a
    /// postcondition error if any of the four numbers is not finite.
    pub fn at_spot(grid: &ValueGrid, spot: Real) -> Result<Self> {
        let axis = grid.price_axis();
        let row = axis.differentiable_row(spot)?;
        let ds = axis.ds();
        let dt = grid.spec().dt();

        let inception = grid.column(0);
        let (down, mid, up) = (inception[row - 1], inception[row], inception[row + 1]);
        let greeks = Self {
            row,
            level: axis.level(row),
            price: mid,
            delta: (up - down) / (2.0 * ds),
            gamma: (up - 2.0 * mid + down) / (ds * ds),
            theta: (grid.value(row, 1) - mid) / dt,
        };
        ensure_post!(
            [greeks.price, greeks.delta, greeks.gamma, greeks.theta]
                .iter()
                .all(|v| v.is_finite()),
            "non-finite greeks at row {row}: {greeks:?}"
        );
        tracing::debug!(row, level = greeks.level, price = greeks.price, "read grid greeks");
        Ok(greeks)
    }
}
