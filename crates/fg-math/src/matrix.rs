//! Dense two-dimensional storage of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`. Storage is column-major,
//! so every column is one contiguous slice; finite-difference grids keep one
//! time level per column and hand those slices straight to the solver.

use fg_core::Real;
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

/// A dynamically-sized 2D matrix of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Column `j` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `j >= self.cols()`.
    pub fn column(&self, j: usize) -> &[Real] {
        let n = self.rows();
        &self.0.as_slice()[j * n..(j + 1) * n]
    }

    /// Column `j` as a mutable contiguous slice.
    ///
    /// # Panics
    /// Panics if `j >= self.cols()`.
    pub fn column_mut(&mut self, j: usize) -> &mut [Real] {
        let n = self.rows();
        &mut self.0.as_mut_slice()[j * n..(j + 1) * n]
    }

    /// Two distinct columns at once: `target` mutably, `source` shared.
    ///
    /// # Panics
    /// Panics if the indices are equal or out of range.
    pub fn column_pair_mut(&mut self, target: usize, source: usize) -> (&mut [Real], &[Real]) {
        assert_ne!(target, source, "column_pair_mut needs two distinct columns");
        let n = self.rows();
        let data = self.0.as_mut_slice();
        if target < source {
            let (lo, hi) = data.split_at_mut(source * n);
            (&mut lo[target * n..(target + 1) * n], &hi[..n])
        } else {
            let (lo, hi) = data.split_at_mut(target * n);
            (&mut hi[..n], &lo[source * n..(source + 1) * n])
        }
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vec<Real> {
        self.0.row(i).iter().copied().collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, idx: (usize, usize)) -> &Real {
        &self.0[idx]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Real {
        &mut self.0[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: usize, cols: usize) -> Matrix {
        let mut m = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m[(i, j)] = (10 * i + j) as Real;
            }
        }
        m
    }

    #[test]
    fn columns_are_contiguous_slices() {
        let m = numbered(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.column(2), &[2.0, 12.0, 22.0]);
        assert_eq!(m.row(1), vec![10.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn column_mut_writes_through() {
        let mut m = numbered(2, 2);
        m.column_mut(1).copy_from_slice(&[5.0, 6.0]);
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m[(1, 1)], 6.0);
        assert_eq!(m[(1, 0)], 10.0);
    }

    #[test]
    fn column_pair_in_both_orders() {
        let mut m = numbered(3, 3);
        {
            let (dst, src) = m.column_pair_mut(0, 2);
            assert_eq!(src, &[2.0, 12.0, 22.0]);
            dst.copy_from_slice(src);
        }
        assert_eq!(m.column(0), &[2.0, 12.0, 22.0]);

        let (dst, src) = m.column_pair_mut(2, 1);
        assert_eq!(src, &[1.0, 11.0, 21.0]);
        dst[0] = -1.0;
        assert_eq!(m[(0, 2)], -1.0);
    }

    #[test]
    #[should_panic]
    fn column_pair_rejects_aliasing() {
        let mut m = Matrix::zeros(2, 2);
        let _ = m.column_pair_mut(1, 1);
    }
}
