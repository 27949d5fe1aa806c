//! The `Multiplier` trait seam and its two implementations.
//!
//! `NaiveMultiplier` is the cubic reference path used for verification;
//! `StrassenMultiplier` is the production engine. Both validate the
//! square/matched-dimension preconditions and fail fast with a
//! descriptive error instead of truncating or guessing intent.

use crate::error::MatError;
use crate::matrix::Matrix;
use crate::naive::naive_multiply;
use crate::options::Options;
use crate::strassen::strassen_multiply;

/// Narrow interface for matrix multiplication engines.
pub trait Multiplier: Send + Sync {
    /// Multiply two `n x n` matrices.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::NotSquare`] if either operand is not square,
    /// or [`MatError::DimensionMismatch`] if their sizes differ.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError>;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}

fn check_dimensions(a: &Matrix, b: &Matrix) -> Result<(), MatError> {
    if !a.is_square() {
        return Err(MatError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if !b.is_square() {
        return Err(MatError::NotSquare {
            rows: b.rows(),
            cols: b.cols(),
        });
    }
    if a.dim() != b.dim() {
        return Err(MatError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(())
}

/// Cubic-time reference engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for NaiveMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        check_dimensions(a, b)?;
        Ok(naive_multiply(a, b))
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Parallel Strassen engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrassenMultiplier {
    options: Options,
}

impl StrassenMultiplier {
    /// Create an engine with the given options (normalized first).
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options: options.normalize(),
        }
    }

    /// Create an engine that never fans out onto the rayon pool.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            options: Options::sequential(),
        }
    }

    /// The normalized options this engine runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        check_dimensions(a, b)?;
        Ok(strassen_multiply(a, b, &self.options))
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
