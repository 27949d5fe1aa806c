//! Zero-padding to square power-of-two dimensions, and the inverse crop.
//!
//! Zero rows and columns contribute nothing to the accumulated sums, so
//! `pad(A) * pad(B)` agrees with `A * B` on the original region.

use crate::matrix::Matrix;

/// Smallest power of two greater than or equal to `n` (and at least 1).
#[must_use]
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Embed `m` in the top-left corner of a `size x size` zero matrix.
/// `size` must be at least `max(rows, cols)`.
#[must_use]
pub fn pad_to(m: &Matrix, size: usize) -> Matrix {
    debug_assert!(size >= m.rows().max(m.cols()));
    let mut out = Matrix::zeros(size, size);
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            out.set(i, j, m.get(i, j));
        }
    }
    out
}

/// Pad to the smallest power-of-two square that contains `m`.
#[must_use]
pub fn pad_to_power_of_two(m: &Matrix) -> Matrix {
    pad_to(m, next_power_of_two(m.rows().max(m.cols())))
}

/// Crop the top-left `rows x cols` block. Inverse of [`pad_to`] given
/// the original dimensions; the padded matrix does not record them.
#[must_use]
pub fn unpad(m: &Matrix, rows: usize, cols: usize) -> Matrix {
    debug_assert!(rows <= m.rows() && cols <= m.cols());
    let mut out = Matrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            out.set(i, j, m.get(i, j));
        }
    }
    out
}
