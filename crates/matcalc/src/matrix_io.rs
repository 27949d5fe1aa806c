//! Text-file matrix loading and result writing.
//!
//! The input format is a flat whitespace-separated stream of `2n^2`
//! integers: the first `n^2` fill A row-major, the next `n^2` fill B.

use std::io::Write;
use std::path::Path;

use matcalc_core::{MatError, Matrix};

/// Load the A/B matrix pair for side length `n` from a text file.
///
/// # Errors
///
/// Returns [`MatError::Io`] if the file cannot be read, or
/// [`MatError::InvalidInput`] if it holds the wrong number of entries
/// or a non-integer token.
pub fn load_pair(path: &Path, n: usize) -> Result<(Matrix, Matrix), MatError> {
    let text = std::fs::read_to_string(path)?;
    let mut entries = Vec::with_capacity(2 * n * n);
    for token in text.split_whitespace() {
        let value: i64 = token.parse().map_err(|_| {
            MatError::InvalidInput(format!("non-integer token {token:?} in {}", path.display()))
        })?;
        entries.push(value);
    }
    if entries.len() != 2 * n * n {
        return Err(MatError::InvalidInput(format!(
            "expected {} entries for two {n}x{n} matrices, found {} in {}",
            2 * n * n,
            entries.len(),
            path.display()
        )));
    }
    let b_entries = entries.split_off(n * n);
    let a = Matrix::from_vec(n, n, entries)?;
    let b = Matrix::from_vec(n, n, b_entries)?;
    Ok((a, b))
}

/// Write a full matrix to a file, one row per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_matrix(path: &Path, m: &Matrix) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{m}")?;
    Ok(())
}

/// Render the diagonal entries, one per line (autograder format).
#[must_use]
pub fn format_diagonal(m: &Matrix) -> String {
    let mut out = String::new();
    for value in m.diagonal() {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}
