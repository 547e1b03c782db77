use super::{allocate, Matrix};
use crate::errors::{MatrixError, Result};

/// A scalar function that can be applied to every element of a matrix.
///
/// Implemented for every `Fn(f64) -> f64`, so plain functions, closures and closures that
/// capture parameters (a leaky slope, an ELU alpha) can all be handed to [`Matrix::map`].
pub trait ScalarFn {
    fn apply(&self, x: f64) -> f64;
}

impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

impl Matrix {
    /// Returns a new matrix of the same shape with `f` applied to every element.
    ///
    /// `self` is left untouched. `NaN` and infinite results of `f` are stored as-is.
    pub fn map<F>(&self, f: &F) -> Result<Matrix>
    where
        F: ScalarFn + ?Sized,
    {
        let mut data = allocate(self.num_rows, self.num_columns)?;
        data.extend(self.data.iter().map(|&x| f.apply(x)));
        Ok(Matrix::from_parts(self.num_rows, self.num_columns, data))
    }

    /// Element-wise product of two matrices with identical shapes.
    pub fn hadamard_product(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() {
            log::debug!(
                "hadamard product of {} and {} rejected",
                self.shape(),
                other.shape()
            );
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut data = allocate(self.num_rows, self.num_columns)?;
        data.extend(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a * b),
        );
        Ok(Matrix::from_parts(self.num_rows, self.num_columns, data))
    }

    /// Clamps every element into `[min_value, max_value]`.
    ///
    /// The caller must ensure `min_value <= max_value`. An element is replaced only when it
    /// compares below `min_value` or above `max_value`; `NaN` compares as neither, so it is
    /// copied to the output unchanged.
    pub fn clip(&self, min_value: f64, max_value: f64) -> Result<Matrix> {
        debug_assert!(
            min_value <= max_value,
            "clip bounds are inverted: [{}, {}]",
            min_value,
            max_value
        );

        self.map(&|value: f64| {
            if value < min_value {
                min_value
            } else if value > max_value {
                max_value
            } else {
                value
            }
        })
    }
}
