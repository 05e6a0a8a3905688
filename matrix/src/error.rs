use thiserror::Error;

/// Why a matrix could not be built or an operation could not produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("dimensions must be between 1 and {max}, got {rows}x{cols}")]
    DimensionOutOfRange { rows: usize, cols: usize, max: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Multiply needs `left.cols == right.rows`.
    #[error("columns of A ({left_cols}) != rows of B ({right_rows})")]
    NotConformable { left_cols: usize, right_rows: usize },
    #[error("arithmetic overflow")]
    Overflow,
}
