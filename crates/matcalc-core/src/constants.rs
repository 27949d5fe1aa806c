//! Constants for multiplication thresholds and configuration.

/// Default matrix side length at or below which the engine switches to
/// the cubic base case. Recursion overhead dominates below this size.
pub const DEFAULT_BASE_CUTOFF: usize = 64;

/// Default number of recursion levels that fan out their seven
/// subproducts onto the rayon pool. 7^3 = 343 leaf tasks is already far
/// beyond any realistic core count; deeper levels run sequentially.
pub const DEFAULT_PARALLEL_DEPTH: usize = 3;

/// Exit codes for the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strassen and reference results did not match in check mode.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_is_positive() {
        assert!(DEFAULT_BASE_CUTOFF >= 1);
    }

    #[test]
    fn exit_codes_distinct() {
        assert_ne!(exit_codes::SUCCESS, exit_codes::ERROR_GENERIC);
        assert_ne!(exit_codes::ERROR_MISMATCH, exit_codes::ERROR_CONFIG);
    }
}
