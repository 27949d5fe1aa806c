//! Dense square integer matrices in row-major order.
//!
//! Every operation produces a new `Matrix`; the multiplication engines
//! never mutate their inputs. Quadrant views are materialized as owned
//! copies that live for one recursion level.

use crate::error::MatError;

/// Dense row-major matrix of `i64` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Create a `rows x cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Create a matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::InvalidInput`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self, MatError> {
        if data.len() != rows * cols {
            return Err(MatError::InvalidInput(format!(
                "expected {} entries for a {rows}x{cols} matrix, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from nested row slices. Panics on ragged rows;
    /// intended for tests and small literals.
    #[must_use]
    pub fn from_rows(rows: &[&[i64]]) -> Self {
        let r = rows.len();
        let c = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(r * c);
        for row in rows {
            assert_eq!(row.len(), c, "ragged rows");
            data.extend_from_slice(row);
        }
        Self {
            rows: r,
            cols: c,
            data,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Side length of a square matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        debug_assert!(self.is_square());
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: i64) {
        self.data[i * self.cols + j] = value;
    }

    /// Flat row-major view of the entries.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Entry-wise sum. Panics if shapes differ; the engines only add
    /// same-size quadrants.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.rows, other.rows);
        assert_eq!(self.cols, other.cols);
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| x + y)
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Entry-wise difference. Panics if shapes differ.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        assert_eq!(self.rows, other.rows);
        assert_eq!(self.cols, other.cols);
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| x - y)
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> i64 {
        debug_assert!(self.is_square());
        (0..self.rows).map(|i| self.get(i, i)).sum()
    }

    /// The diagonal entries, top-left to bottom-right.
    #[must_use]
    pub fn diagonal(&self) -> Vec<i64> {
        (0..self.rows.min(self.cols))
            .map(|i| self.get(i, i))
            .collect()
    }

    /// Copy the `size x size` block whose top-left corner is `(row, col)`.
    #[must_use]
    pub fn block(&self, row: usize, col: usize, size: usize) -> Self {
        debug_assert!(row + size <= self.rows && col + size <= self.cols);
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            let start = (row + i) * self.cols + col;
            data.extend_from_slice(&self.data[start..start + size]);
        }
        Self {
            rows: size,
            cols: size,
            data,
        }
    }

    /// Split an even-dimension square matrix into its four quadrants:
    /// `[top-left, top-right, bottom-left, bottom-right]`.
    #[must_use]
    pub fn split_quadrants(&self) -> [Self; 4] {
        debug_assert!(self.is_square() && self.rows % 2 == 0);
        let half = self.rows / 2;
        [
            self.block(0, 0, half),
            self.block(0, half, half),
            self.block(half, 0, half),
            self.block(half, half, half),
        ]
    }

    /// Reassemble four `half x half` quadrants into a `2*half` square
    /// matrix: top row `[c11 | c12]`, bottom row `[c21 | c22]`.
    #[must_use]
    pub fn join_quadrants(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self {
        let half = c11.rows;
        debug_assert!(
            [c11, c12, c21, c22]
                .iter()
                .all(|q| q.rows == half && q.cols == half)
        );
        let n = half * 2;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..half {
            data.extend_from_slice(&c11.data[i * half..(i + 1) * half]);
            data.extend_from_slice(&c12.data[i * half..(i + 1) * half]);
        }
        for i in 0..half {
            data.extend_from_slice(&c21.data[i * half..(i + 1) * half]);
            data.extend_from_slice(&c22.data[i * half..(i + 1) * half]);
        }
        Self {
            rows: n,
            cols: n,
            data,
        }
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        &self.data[i * self.cols + j]
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_diagonal() {
        let id = Matrix::identity(4);
        assert_eq!(id.diagonal(), vec![1, 1, 1, 1]);
        assert_eq!(id.trace(), 4);
        assert_eq!(id.get(0, 1), 0);
    }

    #[test]
    fn from_vec_length_check() {
        assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.get(1, 0), 3);
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Matrix::from_rows(&[&[1, 2], &[3, 4]]);
        let b = Matrix::from_rows(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn split_join_roundtrip() {
        let m = Matrix::from_rows(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12],
            &[13, 14, 15, 16],
        ]);
        let [q11, q12, q21, q22] = m.split_quadrants();
        assert_eq!(q11, Matrix::from_rows(&[&[1, 2], &[5, 6]]));
        assert_eq!(q22, Matrix::from_rows(&[&[11, 12], &[15, 16]]));
        assert_eq!(Matrix::join_quadrants(&q11, &q12, &q21, &q22), m);
    }

    #[test]
    fn block_copies_subregion() {
        let m = Matrix::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let b = m.block(1, 1, 2);
        assert_eq!(b, Matrix::from_rows(&[&[5, 6], &[8, 9]]));
    }

    #[test]
    fn index_operator() {
        let m = Matrix::from_rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 1)], 4);
    }

    #[test]
    fn display_rows() {
        let m = Matrix::from_rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }
}
