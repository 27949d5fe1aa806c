//! # matcalc-core
//!
//! Core library for MatCalc-rs, a parallel integer matrix multiplication
//! tool. Implements Strassen's seven-product divide-and-conquer algorithm
//! with a cubic base case, zero-padding for non-power-of-two dimensions,
//! and depth-bounded parallel fan-out on the rayon pool.

pub mod constants;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub(crate) mod naive;
pub mod options;
pub mod padding;
pub(crate) mod strassen;
pub mod triangles;

// Re-exports
pub use constants::{exit_codes, DEFAULT_BASE_CUTOFF, DEFAULT_PARALLEL_DEPTH};
pub use error::MatError;
pub use matrix::Matrix;
pub use multiplier::{Multiplier, NaiveMultiplier, StrassenMultiplier};
pub use options::Options;

/// Multiply two square matrices with the Strassen engine and default
/// options.
///
/// This is a convenience function for simple use cases. For explicit
/// cutoff and parallelism control, construct a [`StrassenMultiplier`].
///
/// # Errors
///
/// Returns an error if the matrices are not square or their sizes
/// differ.
///
/// # Example
/// ```
/// use matcalc_core::Matrix;
///
/// let a = Matrix::from_rows(&[&[1, 2], &[3, 4]]);
/// let b = Matrix::from_rows(&[&[5, 6], &[7, 8]]);
/// let c = matcalc_core::multiply(&a, &b).unwrap();
/// assert_eq!(c, Matrix::from_rows(&[&[19, 22], &[43, 50]]));
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    StrassenMultiplier::new(Options::default()).multiply(a, b)
}
