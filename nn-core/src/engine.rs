//! Handle-level entry points.
//!
//! These mirror the matrix methods for callers that hold an optional matrix, such as a
//! slot that may not have been filled yet. `None` is rejected with
//! [`MatrixError::NullInput`]; everything else forwards to [`Matrix`] and [`crate::softmax`].

use crate::errors::{MatrixError, Result};
use crate::linalg::{Matrix, ScalarFn};
use crate::softmax::{self, Axis};

fn require(m: Option<&Matrix>) -> Result<&Matrix> {
    m.ok_or_else(|| {
        log::debug!("operation called without a matrix");
        MatrixError::NullInput
    })
}

/// Creates a zero-filled matrix. The caller owns the result.
pub fn create_matrix(num_rows: usize, num_columns: usize) -> Result<Matrix> {
    Matrix::new(num_rows, num_columns)
}

/// Releases a matrix. Releasing `None` does nothing.
pub fn release_matrix(m: Option<Matrix>) {
    if let Some(m) = m {
        log::trace!("releasing {} matrix", m.shape());
        drop(m);
    }
}

pub fn map_elementwise<F>(m: Option<&Matrix>, f: &F) -> Result<Matrix>
where
    F: ScalarFn + ?Sized,
{
    require(m)?.map(f)
}

pub fn hadamard_product(a: Option<&Matrix>, b: Option<&Matrix>) -> Result<Matrix> {
    require(a)?.hadamard_product(require(b)?)
}

pub fn clip_matrix(m: Option<&Matrix>, min_value: f64, max_value: f64) -> Result<Matrix> {
    require(m)?.clip(min_value, max_value)
}

pub fn softmax_vector(v: Option<&Matrix>) -> Result<Matrix> {
    softmax::softmax_vector(require(v)?)
}

pub fn softmax_batch(m: Option<&Matrix>, axis: Axis) -> Result<Matrix> {
    softmax::softmax_batch(require(m)?, axis)
}
