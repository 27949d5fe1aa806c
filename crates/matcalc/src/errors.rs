//! Error handling and exit codes.

use matcalc_core::exit_codes;
use matcalc_core::MatError;

/// Map a failed run to the appropriate process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MatError>() {
        Some(MatError::InvalidInput(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}
