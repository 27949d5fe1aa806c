//! Multiplication options and configuration.

use crate::constants::{DEFAULT_BASE_CUTOFF, DEFAULT_PARALLEL_DEPTH};

/// Options for the Strassen multiplication engine.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Matrix side length at or below which the cubic base case is used.
    pub base_cutoff: usize,
    /// Number of recursion levels that run their subproducts in parallel.
    /// Levels deeper than this run sequentially. `normalize()` replaces
    /// a value of 0 with the default; use `sequential()` for a truly
    /// serial engine.
    pub parallel_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_cutoff: DEFAULT_BASE_CUTOFF,
            parallel_depth: DEFAULT_PARALLEL_DEPTH,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.base_cutoff == 0 {
            self.base_cutoff = DEFAULT_BASE_CUTOFF;
        }
        if self.parallel_depth == 0 {
            self.parallel_depth = DEFAULT_PARALLEL_DEPTH;
        }
        self
    }

    /// Options for a fully sequential engine (no rayon fan-out at any
    /// level). Useful for benchmarking the parallel speedup itself.
    /// Not subject to `normalize()`.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            base_cutoff: DEFAULT_BASE_CUTOFF,
            parallel_depth: 0,
        }
    }
}
