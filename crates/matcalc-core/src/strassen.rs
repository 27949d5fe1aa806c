//! Recursive Strassen multiplication engine.
//!
//! Standard block multiplication needs 8 half-size products; Strassen's
//! linear combinations need 7, turning the recurrence from
//! `T(n) = 8T(n/2) + O(n^2)` into `T(n) = 7T(n/2) + O(n^2)`, i.e.
//! Θ(n^log2(7)) ≈ Θ(n^2.807).
//!
//! The seven subproducts of one level are independent. For the first
//! `parallel_depth` levels they are fanned out onto the rayon pool with
//! nested `rayon::join` calls; deeper levels recurse sequentially, so
//! total task count stays bounded instead of growing as 7^depth. Each
//! `join` returns only when both branches are done, which makes the
//! combine step a structural barrier: no quadrant of the output is
//! assembled before all seven subproducts exist.

use crate::matrix::Matrix;
use crate::naive::naive_multiply;
use crate::options::Options;
use crate::padding::{pad_to, unpad};

/// Multiply two square matrices of equal dimension with Strassen's
/// algorithm. Dimension preconditions are checked by the public
/// [`Multiplier`] wrapper.
///
/// [`Multiplier`]: crate::multiplier::Multiplier
#[must_use]
pub(crate) fn strassen_multiply(a: &Matrix, b: &Matrix, opts: &Options) -> Matrix {
    multiply_at_depth(a, b, opts, 0)
}

fn multiply_at_depth(a: &Matrix, b: &Matrix, opts: &Options, depth: usize) -> Matrix {
    let n = a.dim();

    // Base case. The `n == 1` guard keeps a cutoff of zero from
    // recursing forever through the odd-dimension pad.
    if n <= opts.base_cutoff || n == 1 {
        return naive_multiply(a, b);
    }

    // Odd dimension: pad this level to n + 1, recurse at the padded
    // size, crop the extra row and column from the combined result.
    // Only the current level's matrices change; siblings are untouched.
    if n % 2 != 0 {
        let padded = multiply_at_depth(&pad_to(a, n + 1), &pad_to(b, n + 1), opts, depth);
        return unpad(&padded, n, n);
    }

    let [a11, a12, a21, a22] = a.split_quadrants();
    let [b11, b12, b21, b22] = b.split_quadrants();

    let mul = |x: &Matrix, y: &Matrix| multiply_at_depth(x, y, opts, depth + 1);

    let (p1, p2, p3, p4, p5, p6, p7) = if depth < opts.parallel_depth {
        // Binary tree of joins: all seven subproducts eligible to run
        // concurrently, completion order irrelevant.
        let ((p1, p2), ((p3, p4), ((p5, p6), p7))) = rayon::join(
            || {
                rayon::join(
                    || mul(&a11.add(&a22), &b11.add(&b22)),
                    || mul(&a21.add(&a22), &b11),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || mul(&a11, &b12.sub(&b22)),
                            || mul(&a22, &b21.sub(&b11)),
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || mul(&a11.add(&a12), &b22),
                                    || mul(&a21.sub(&a11), &b11.add(&b12)),
                                )
                            },
                            || mul(&a12.sub(&a22), &b21.add(&b22)),
                        )
                    },
                )
            },
        );
        (p1, p2, p3, p4, p5, p6, p7)
    } else {
        (
            mul(&a11.add(&a22), &b11.add(&b22)),
            mul(&a21.add(&a22), &b11),
            mul(&a11, &b12.sub(&b22)),
            mul(&a22, &b21.sub(&b11)),
            mul(&a11.add(&a12), &b22),
            mul(&a21.sub(&a11), &b11.add(&b12)),
            mul(&a12.sub(&a22), &b21.add(&b22)),
        )
    };

    let c11 = p1.add(&p4).sub(&p5).add(&p7);
    let c12 = p3.add(&p5);
    let c21 = p2.add(&p4);
    let c22 = p1.sub(&p2).add(&p3).add(&p6);

    Matrix::join_quadrants(&c11, &c12, &c21, &c22)
}
