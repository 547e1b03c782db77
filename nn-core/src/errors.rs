use thiserror::Error;

use crate::linalg::Shape;

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("InvalidDimensions: a matrix needs at least one row and one column, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("OutOfMemory: could not allocate storage for a {rows}x{columns} matrix")]
    OutOfMemory { rows: usize, columns: usize },

    #[error("NullInput: no matrix was supplied")]
    NullInput,

    #[error("ShapeMismatch: {left} is not compatible with {right}")]
    ShapeMismatch { left: Shape, right: Shape },

    #[error("NotAVector: a {shape} matrix is neither a row nor a column vector")]
    NotAVector { shape: Shape },

    #[error("EmptyVector: softmax needs at least one element")]
    EmptyVector,

    /// Every element is negative infinity, so the softmax denominator is zero.
    #[error("DegenerateInput: every element of the vector is -inf")]
    DegenerateInput,

    #[error("IndexOutOfBounds: ({row}, {column}) is outside a {shape} matrix")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        shape: Shape,
    },

    #[error("InvalidDistribution: {0}")]
    InvalidDistribution(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_shapes_involved() {
        let err = MatrixError::ShapeMismatch {
            left: Shape::new(2, 3),
            right: Shape::new(3, 2),
        };
        assert_eq!(
            err.to_string(),
            "ShapeMismatch: 2x3 is not compatible with 3x2"
        );

        let err = MatrixError::IndexOutOfBounds {
            row: 4,
            column: 0,
            shape: Shape::new(2, 2),
        };
        assert_eq!(
            err.to_string(),
            "IndexOutOfBounds: (4, 0) is outside a 2x2 matrix"
        );
    }

    #[test]
    fn invalid_dimensions_message() {
        let err = MatrixError::InvalidDimensions {
            rows: 0,
            columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "InvalidDimensions: a matrix needs at least one row and one column, got 0x3"
        );
    }
}
