//! Error type for matrix computations.

/// Error type for matrix construction and multiplication.
#[derive(Debug, thiserror::Error)]
pub enum MatError {
    /// A matrix entering the engine was not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// The two operands have different dimensions.
    #[error("dimension mismatch: left is {left}x{left}, right is {right}x{right}")]
    DimensionMismatch {
        /// Side length of the left operand.
        left: usize,
        /// Side length of the right operand.
        right: usize,
    },

    /// Malformed input data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O failure while reading or writing matrix data.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MatError::NotSquare { rows: 3, cols: 4 };
        assert_eq!(err.to_string(), "matrix is not square: 3x4");

        let err = MatError::DimensionMismatch { left: 2, right: 4 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: left is 2x2, right is 4x4"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MatError = io.into();
        assert!(matches!(err, MatError::Io(_)));
    }
}
