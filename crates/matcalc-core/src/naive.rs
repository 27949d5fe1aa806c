//! Cubic-time base multiplier.

use crate::matrix::Matrix;

/// Multiply two `n x n` matrices by triple-nested accumulation.
///
/// Loops run in i-k-j order so the inner loop walks both `b` and the
/// output row contiguously. This is the recursion floor and the ground
/// truth the Strassen path must agree with exactly (integer arithmetic,
/// no tolerance).
///
/// Dimension checks are the caller's contract; the public [`Multiplier`]
/// wrappers validate before reaching this function.
///
/// [`Multiplier`]: crate::multiplier::Multiplier
#[must_use]
pub fn naive_multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.dim();
    debug_assert_eq!(n, b.dim());
    let mut c = Matrix::zeros(n, n);
    for i in 0..n {
        for k in 0..n {
            let aik = a.get(i, k);
            if aik == 0 {
                continue;
            }
            for j in 0..n {
                c.set(i, j, c.get(i, j) + aik * b.get(k, j));
            }
        }
    }
    c
}
