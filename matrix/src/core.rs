//! Bounded dense matrices and schoolbook arithmetic over them.
//!
//! Every operation takes its inputs by reference and returns a fresh matrix;
//! nothing is modified in place. Arithmetic is checked, so a result that
//! does not fit in `i64` is reported as [`MatrixError::Overflow`].

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::error::MatrixError;

/// Largest number of rows or columns a matrix may have.
pub const MAX_DIM: usize = 20;

/// A row-major grid of integers, at most [`MAX_DIM`] × [`MAX_DIM`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// A `rows` × `cols` grid of zeros. Both sides must be in `1..=MAX_DIM`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_dims(rows, cols)?;
        Ok(Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        })
    }

    /// Build from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        check_dims(n_rows, n_cols)?;
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n_cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: n_cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.offset(row, col)])
    }

    pub fn row(&self, row: usize) -> Option<&[i64]> {
        if row >= self.rows {
            return None;
        }
        let start = self.offset(row, 0);
        Some(&self.data[start..start + self.cols])
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.data.chunks(self.cols).map(<[i64]>::to_vec).collect()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

/// One line per row, each cell right-aligned in four columns and followed
/// by a space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value:4} ")?;
            }
        }
        Ok(())
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if !(1..=MAX_DIM).contains(&rows) || !(1..=MAX_DIM).contains(&cols) {
        return Err(MatrixError::DimensionOutOfRange {
            rows,
            cols,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// `A + B`, cell by cell. Shapes must match.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(a, b, i64::checked_add)
}

/// `A - B`, cell by cell. Shapes must match.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(a, b, i64::checked_sub)
}

fn elementwise(
    a: &Matrix,
    b: &Matrix,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| op(x, y).ok_or(MatrixError::Overflow))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Matrix {
        data,
        rows: a.rows,
        cols: a.cols,
    })
}

/// `A · B` (naive O(n³)). Requires `a.cols() == b.rows()`; the result is
/// `a.rows()` × `b.cols()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols != b.rows {
        return Err(MatrixError::NotConformable {
            left_cols: a.cols,
            right_rows: b.rows,
        });
    }
    trace!(left = ?a.shape(), right = ?b.shape(), "multiplying");
    let mut out = Matrix::zeros(a.rows, b.cols)?;
    for i in 0..a.rows {
        for j in 0..b.cols {
            let mut acc: i64 = 0;
            for k in 0..a.cols {
                acc = a[(i, k)]
                    .checked_mul(b[(k, j)])
                    .and_then(|product| acc.checked_add(product))
                    .ok_or(MatrixError::Overflow)?;
            }
            out[(i, j)] = acc;
        }
    }
    Ok(out)
}

/// `Aᵀ`: cell `(i, j)` moves to `(j, i)`.
pub fn transpose(a: &Matrix) -> Matrix {
    let mut data = Vec::with_capacity(a.data.len());
    for j in 0..a.cols {
        for i in 0..a.rows {
            data.push(a[(i, j)]);
        }
    }
    Matrix {
        data,
        rows: a.cols,
        cols: a.rows,
    }
}

/// True iff `a` is square and equal to its transpose.
pub fn is_symmetric(a: &Matrix) -> bool {
    if !a.is_square() {
        return false;
    }
    (0..a.rows).all(|i| (0..a.cols).all(|j| a[(i, j)] == a[(j, i)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::from_rows(rows).expect("valid matrix")
    }

    #[test]
    fn zeros_rejects_out_of_range_dimensions() {
        assert!(Matrix::zeros(MAX_DIM, MAX_DIM).is_ok());
        for (rows, cols) in [(0, 1), (1, 0), (MAX_DIM + 1, 1)] {
            assert_eq!(
                Matrix::zeros(rows, cols),
                Err(MatrixError::DimensionOutOfRange {
                    rows,
                    cols,
                    max: MAX_DIM
                })
            );
        }
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).expect_err("ragged");
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn add_and_subtract_cell_by_cell() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![10, 20], vec![30, 40]]);
        assert_eq!(add(&a, &b), Ok(m(vec![vec![11, 22], vec![33, 44]])));
        assert_eq!(subtract(&a, &b), Ok(m(vec![vec![-9, -18], vec![-27, -36]])));
    }

    #[test]
    fn subtract_undoes_add() {
        let a = m(vec![vec![5, -3, 7], vec![0, 2, -8]]);
        let b = m(vec![vec![-1, 4, 9], vec![6, -6, 1]]);
        let sum = add(&a, &b).expect("add");
        assert_eq!(subtract(&sum, &b), Ok(a));
    }

    #[test]
    fn elementwise_rejects_mismatched_shapes() {
        let a = m(vec![vec![1, 2]]);
        let b = m(vec![vec![1], vec![2]]);
        assert_eq!(
            add(&a, &b),
            Err(MatrixError::ShapeMismatch {
                left: (1, 2),
                right: (2, 1)
            })
        );
    }

    #[test]
    fn add_reports_overflow() {
        let a = m(vec![vec![i64::MAX]]);
        let b = m(vec![vec![1]]);
        assert_eq!(add(&a, &b), Err(MatrixError::Overflow));
    }

    #[test]
    fn multiply_ones_sums_inner_dimension() {
        let a = m(vec![vec![1; 3]; 2]);
        let b = m(vec![vec![1; 2]; 3]);
        let product = multiply(&a, &b).expect("multiply");
        assert_eq!(product, m(vec![vec![3, 3], vec![3, 3]]));
    }

    #[test]
    fn multiply_matches_hand_computation() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        assert_eq!(multiply(&a, &b), Ok(m(vec![vec![19, 22], vec![43, 50]])));
    }

    #[test]
    fn multiply_rejects_non_conformable_shapes() {
        let a = m(vec![vec![1, 2, 3]]);
        let b = m(vec![vec![1, 2, 3]]);
        assert_eq!(
            multiply(&a, &b),
            Err(MatrixError::NotConformable {
                left_cols: 3,
                right_rows: 1
            })
        );
    }

    #[test]
    fn transpose_swaps_shape_and_is_involutive() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let t = transpose(&a);
        assert_eq!(t, m(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
        assert_eq!(transpose(&t), a);
    }

    #[test]
    fn symmetric_iff_equal_to_transpose() {
        let sym = m(vec![vec![1, 7, 3], vec![7, 4, -5], vec![3, -5, 6]]);
        let asym = m(vec![vec![1, 2], vec![3, 4]]);
        assert!(is_symmetric(&sym));
        assert_eq!(transpose(&sym), sym);
        assert!(!is_symmetric(&asym));
        assert_ne!(transpose(&asym), asym);
    }

    #[test]
    fn non_square_is_never_symmetric() {
        assert!(!is_symmetric(&m(vec![vec![0, 0, 0], vec![0, 0, 0]])));
    }

    #[test]
    fn display_pads_cells_to_four_columns() {
        let a = m(vec![vec![1, -20], vec![300, 4000]]);
        assert_eq!(a.to_string(), "   1  -20 \n 300 4000 ");
    }

    #[test]
    fn accessors_respect_bounds() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.get(1, 0), Some(3));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a.row(1), Some(&[3, 4][..]));
        assert_eq!(a.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn dimension_limit_matches_console_config() {
        assert_eq!(console::config::MATRIX_DIM_LIMIT, MAX_DIM);
    }
}
