//! Triangle counting via matrix powers.
//!
//! For an undirected simple graph with 0/1 adjacency matrix A, each
//! triangle contributes 6 closed walks of length 3, so the triangle
//! count is trace(A^3) / 6. This exercises the multiplication engine
//! against a combinatorial identity rather than raw arithmetic.

use crate::error::MatError;
use crate::matrix::Matrix;
use crate::multiplier::Multiplier;

/// Count triangles in the graph described by `adj` using the given
/// multiplication engine for the two products in A^3.
///
/// # Errors
///
/// Returns [`MatError::InvalidInput`] if `adj` is not a symmetric 0/1
/// matrix with a zero diagonal, or propagates the engine's dimension
/// errors.
pub fn count_triangles(adj: &Matrix, multiplier: &dyn Multiplier) -> Result<u64, MatError> {
    validate_adjacency(adj)?;
    let squared = multiplier.multiply(adj, adj)?;
    let cubed = multiplier.multiply(&squared, adj)?;
    let trace = cubed.trace();
    debug_assert!(trace >= 0 && trace % 6 == 0);
    #[allow(clippy::cast_sign_loss)]
    let count = (trace / 6) as u64;
    Ok(count)
}

fn validate_adjacency(adj: &Matrix) -> Result<(), MatError> {
    if !adj.is_square() {
        return Err(MatError::NotSquare {
            rows: adj.rows(),
            cols: adj.cols(),
        });
    }
    let n = adj.dim();
    for i in 0..n {
        if adj.get(i, i) != 0 {
            return Err(MatError::InvalidInput(format!(
                "adjacency matrix has a self-loop at vertex {i}"
            )));
        }
        for j in 0..n {
            let v = adj.get(i, j);
            if v != 0 && v != 1 {
                return Err(MatError::InvalidInput(format!(
                    "adjacency entry ({i}, {j}) is {v}, expected 0 or 1"
                )));
            }
            if v != adj.get(j, i) {
                return Err(MatError::InvalidInput(format!(
                    "adjacency matrix is not symmetric at ({i}, {j})"
                )));
            }
        }
    }
    Ok(())
}
